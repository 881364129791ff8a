//! Per-event hit handlers. Each one removes the torpedo first; removal of
//! an entity that is already gone is a silent no-op.

use crate::models::ship::{HitOutcome, ShipState};

use super::collision::HitEvent;
use super::coordinator::CombatCoordinator;
use super::events::CombatEvent;

impl CombatCoordinator {
    /// Resolve one hit. Returns true if the player was destroyed.
    pub(super) fn resolve_hit(
        &mut self,
        hit: HitEvent,
        ship: &mut ShipState,
        difficulty: u32,
        events: &mut Vec<CombatEvent>,
    ) -> bool {
        match hit {
            HitEvent::PlayerHit { torpedo } => self.handle_player_hit(torpedo, ship, difficulty, events),
            HitEvent::EnemyHit { torpedo, enemy } => {
                self.handle_enemy_hit(torpedo, enemy, events);
                false
            }
            HitEvent::StationHit { torpedo } => {
                self.handle_station_hit(torpedo, events);
                false
            }
        }
    }

    fn handle_player_hit(
        &mut self,
        torpedo: u32,
        ship: &mut ShipState,
        difficulty: u32,
        events: &mut Vec<CombatEvent>,
    ) -> bool {
        self.torpedoes.remove(torpedo);

        match ship.receive_damage(difficulty) {
            HitOutcome::Destroyed => {
                log::info!("Player destroyed by torpedo {}", torpedo);
                events.push(CombatEvent::PlayerDestroyed);
                true
            }
            HitOutcome::Absorbed => {
                events.push(CombatEvent::PlayerShieldHit {
                    shield_strength: ship.shield_strength(),
                });
                false
            }
            HitOutcome::ShieldsCollapsed => {
                log::debug!("Shields collapsed");
                events.push(CombatEvent::PlayerShieldHit {
                    shield_strength: ship.shield_strength(),
                });
                events.push(CombatEvent::ShieldsCollapsed);
                false
            }
        }
    }

    fn handle_enemy_hit(&mut self, torpedo: u32, enemy: u32, events: &mut Vec<CombatEvent>) {
        self.torpedoes.remove(torpedo);

        if let Some(idx) = self.enemies.iter().position(|e| e.id == enemy) {
            let destroyed = self.enemies.remove(idx);
            log::debug!("Enemy {} ({}) destroyed", destroyed.id, destroyed.ship_type.name());
            events.push(CombatEvent::EnemyDestroyed {
                id: destroyed.id,
                ship_type: destroyed.ship_type,
            });
        }
    }

    fn handle_station_hit(&mut self, torpedo: u32, events: &mut Vec<CombatEvent>) {
        self.torpedoes.remove(torpedo);

        if self.station.take().is_some() {
            log::info!("Station destroyed");
            events.push(CombatEvent::StationDestroyed);
        }
    }
}
