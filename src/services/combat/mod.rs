//! Combat system
//!
//! Owns the live objects of the current sector and runs the per-frame
//! combat loop: enemy AI, torpedo flight, collision detection and hit
//! resolution.

mod collision;
mod coordinator;
mod events;
mod hits;
mod torpedo_pool;
mod torpedoes;

pub use collision::{check_collisions, HitEvent};
pub use coordinator::CombatCoordinator;
pub use events::{CombatEvent, CombatFrame};
pub use torpedo_pool::TorpedoPool;
pub use torpedoes::{launch_cost, max_torpedoes, max_torpedoes_for_view};
