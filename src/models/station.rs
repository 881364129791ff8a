use glam::{DQuat, DVec3};
use std::f64::consts::TAU;

use super::constants::STATION_ROTATION_SPEED;

/// A Zylon starbase. Spins slowly in place and repairs the player on arrival.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub position: DVec3,
    /// Rotation about the station's own axis, in [0, 2π).
    pub angle: f64,
}

impl Default for Station {
    fn default() -> Self {
        Self::new()
    }
}

impl Station {
    pub fn new() -> Self {
        Station {
            position: DVec3::new(0.0, 0.0, -50.0),
            angle: 0.0,
        }
    }

    pub fn update(&mut self, delta_seconds: f64) {
        self.angle = (self.angle + STATION_ROTATION_SPEED * delta_seconds).rem_euclid(TAU);
    }

    pub fn rotate_about_origin(&mut self, rotation: DQuat) {
        self.position = rotation * self.position;
    }
}
