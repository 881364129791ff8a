//! Star Raiders simulation engine
//!
//! The simulation core of a real-time 3D space-combat game. The player's
//! ship sits at the origin of a 128-sector galaxy, fights enemy ships,
//! defends starbases and warps between sectors.
//!
//! # Modules
//!
//! - [`game_engine`] - Simulation context, per-frame tick and end states
//! - [`models`] - Galaxy, ship, enemies, torpedoes and stations
//! - [`services`] - Combat, warp navigation, troop movement, ranking, commands
//! - [`config`] - JSON configuration
//! - [`io`] and [`ui`] - Text output for the headless runner
//!
//! # Example
//!
//! ```rust,no_run
//! use star_raiders::{FrameInput, GameEngine};
//!
//! let mut engine = GameEngine::new(42, 3);
//! engine.toggle_shields();
//! let events = engine.tick(1.0 / 60.0, FrameInput::default());
//! ```

pub mod autopilot;
pub mod cli;
pub mod config;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use config::SimConfig;
pub use game_engine::{FrameInput, GameEngine, GameEvent, GameState};
pub use models::errors::{GameError, GameResult};
