//! Player torpedo launch.

use glam::DVec3;

use crate::models::constants::{ViewMode, FRAME_RATE, MAX_TORPEDOES};
use crate::models::difficulty::effective_scalar;

/// Lateral offset of the two forward launch bays.
const BAY_OFFSET: f64 = 4.0;
/// Sideways drift toward the centre line, per frame.
const DRIFT: f64 = 2.0 / FRAME_RATE;
/// Upward climb, per frame.
const CLIMB: f64 = 1.7 / FRAME_RATE;
/// Closing speed along z, per frame.
const FORCE_Z: f64 = 95.0 / FRAME_RATE;

/// Which forward bay fires next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TorpedoBay {
    #[default]
    Right,
    Left,
}

impl TorpedoBay {
    fn other(self) -> Self {
        match self {
            TorpedoBay::Right => TorpedoBay::Left,
            TorpedoBay::Left => TorpedoBay::Right,
        }
    }
}

/// Live player torpedo cap for the forward view.
pub fn max_torpedoes(difficulty: u32) -> u32 {
    MAX_TORPEDOES.saturating_sub(effective_scalar(difficulty))
}

/// Live player torpedo cap for the given view. The rear view is two lower, never below one.
pub fn max_torpedoes_for_view(difficulty: u32, view: ViewMode) -> u32 {
    let cap = max_torpedoes(difficulty);
    match view {
        ViewMode::Aft => cap.saturating_sub(2).max(1),
        ViewMode::Fore | ViewMode::GalacticMap => cap,
    }
}

/// Energy spent per launch.
pub fn launch_cost(difficulty: u32) -> i32 {
    5 * effective_scalar(difficulty) as i32
}

/// Launch position and velocity for the next torpedo. Forward shots alternate
/// between bays, so `bay` is advanced; rear shots always use one bay.
pub fn launch_vector(view: ViewMode, bay: &mut TorpedoBay) -> (DVec3, DVec3) {
    if view == ViewMode::Aft {
        return (DVec3::new(-0.1, 2.0, 0.0), DVec3::new(0.0, 0.0, FORCE_Z));
    }

    let fired = *bay;
    *bay = bay.other();
    match fired {
        TorpedoBay::Right => (
            DVec3::new(BAY_OFFSET, -2.0, 0.0),
            DVec3::new(-DRIFT, CLIMB, -FORCE_Z),
        ),
        TorpedoBay::Left => (
            DVec3::new(-BAY_OFFSET, -2.0, 0.0),
            DVec3::new(DRIFT, CLIMB, -FORCE_Z),
        ),
    }
}
