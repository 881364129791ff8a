//! User interface and presentation
//!
//! Presenters turn engine events and state into text lines, keeping
//! formatting out of the simulation.

pub mod presenters;
