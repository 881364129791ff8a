//! Domain models
//!
//! This module contains all domain models representing game entities
//! and concepts. Models are plain data with their own state transitions;
//! orchestration lives in `services`.

pub mod constants;
pub mod difficulty;
pub mod enemy;
pub mod errors;
pub mod galaxy;
pub mod position;
pub mod sector_grid;
pub mod ship;
pub mod station;
pub mod torpedo;
