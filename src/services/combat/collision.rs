//! Distance-based hit detection.
//!
//! Radii are fixed; the visual size of a model never affects a hit.

use crate::models::constants::{ENEMY_HIT_RADIUS, PLAYER_HIT_RADIUS, STATION_HIT_RADIUS};
use crate::models::enemy::EnemyUnit;
use crate::models::station::Station;
use crate::models::torpedo::{Torpedo, TorpedoKind};

/// One hit found this frame. Ids refer to torpedoes and enemies that may
/// already be gone by the time the event is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitEvent {
    PlayerHit { torpedo: u32 },
    EnemyHit { torpedo: u32, enemy: u32 },
    StationHit { torpedo: u32 },
}

/// Find every hit for the current frame, in torpedo order.
///
/// An enemy torpedo inside the player radius hits the player. A player
/// torpedo hits the first enemy in range (at most one), and is checked
/// against the station independently, so a single torpedo can report both
/// an enemy hit and a station hit in the same frame.
pub fn check_collisions(
    torpedoes: &[Torpedo],
    enemies: &[EnemyUnit],
    station: Option<&Station>,
) -> Vec<HitEvent> {
    let mut events = Vec::new();

    for torp in torpedoes {
        match torp.kind {
            TorpedoKind::Humon => {
                if torp.distance_from_origin() < PLAYER_HIT_RADIUS {
                    events.push(HitEvent::PlayerHit { torpedo: torp.id });
                }
            }
            TorpedoKind::Zylon => {
                if let Some(enemy) = enemies
                    .iter()
                    .find(|e| e.position.distance(torp.position) < ENEMY_HIT_RADIUS)
                {
                    events.push(HitEvent::EnemyHit {
                        torpedo: torp.id,
                        enemy: enemy.id,
                    });
                }

                if let Some(station) = station {
                    if station.position.distance(torp.position) < STATION_HIT_RADIUS {
                        events.push(HitEvent::StationHit { torpedo: torp.id });
                    }
                }
            }
        }
    }

    events
}
