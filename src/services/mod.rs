//! Game services
//!
//! Simulation logic that operates on the models: combat, warp navigation,
//! troop movement, ranking and companion command parsing.

pub mod combat;
pub mod commands;
pub mod navigation;
pub mod rank;
pub mod troops;
