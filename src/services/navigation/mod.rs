//! Navigation system
//!
//! Warp travel between sectors and population of the sector on arrival.

mod population;
mod warp;

pub use population::{populate_sector, PopulationReport};
pub use warp::{warp_cost, SectorTransitionController, TransitionContext, WarpEvent, WarpPhase};
