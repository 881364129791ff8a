use glam::DVec3;

use super::constants::{TORPEDO_CORRECTION_DIVIDER, TORPEDO_LIFESPAN, TORPEDO_SPEED};

/// Who fired a torpedo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TorpedoKind {
    /// Fired by the player. Flies ballistic.
    Zylon,
    /// Fired by an enemy ship. Homes toward the origin.
    Humon,
}

/// A live torpedo.
#[derive(Debug, Clone, PartialEq)]
pub struct Torpedo {
    pub id: u32,
    pub kind: TorpedoKind,
    pub position: DVec3,
    /// Units per frame. Only player torpedoes use it.
    pub velocity: DVec3,
    pub age: u32,
}

impl Torpedo {
    pub fn new(id: u32, kind: TorpedoKind, position: DVec3, velocity: DVec3) -> Self {
        Torpedo {
            id,
            kind,
            position,
            velocity,
            age: 0,
        }
    }

    /// Advance one frame. Returns false once the torpedo has reached the
    /// end of its lifespan.
    pub fn update(&mut self) -> bool {
        self.age += 1;

        match self.kind {
            TorpedoKind::Humon => {
                // Exponential decay toward the player on x/y, constant closing speed on z.
                self.position.x -= self.position.x / TORPEDO_CORRECTION_DIVIDER;
                self.position.y -= self.position.y / TORPEDO_CORRECTION_DIVIDER;
                self.position.z += TORPEDO_SPEED;
            }
            TorpedoKind::Zylon => {
                self.position += self.velocity;
            }
        }

        self.age < TORPEDO_LIFESPAN
    }

    pub fn distance_from_origin(&self) -> f64 {
        self.position.length()
    }
}
