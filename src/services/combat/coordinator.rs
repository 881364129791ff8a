use glam::{DQuat, DVec3};
use rand::rngs::StdRng;

use crate::models::constants::{ShipType, ViewMode};
use crate::models::enemy::EnemyUnit;
use crate::models::ship::ShipState;
use crate::models::station::Station;

use super::collision::{check_collisions, HitEvent};
use super::events::{CombatEvent, CombatFrame};
use super::torpedo_pool::TorpedoPool;
use super::torpedoes::{launch_cost, launch_vector, max_torpedoes_for_view, TorpedoBay};

/// Owns every live object in the current sector: enemies, the optional
/// station and all torpedoes. Nothing else mutates them.
#[derive(Default)]
pub struct CombatCoordinator {
    pub(super) enemies: Vec<EnemyUnit>,
    pub(super) station: Option<Station>,
    pub(super) torpedoes: TorpedoPool,
    enemy_count_at_spawn: usize,
    next_enemy_id: u32,
    bay: TorpedoBay,
}

impl std::fmt::Debug for CombatCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombatCoordinator")
            .field("enemies", &self.enemies.len())
            .field("station", &self.station.is_some())
            .field("torpedoes", &self.torpedoes.len())
            .field("enemy_count_at_spawn", &self.enemy_count_at_spawn)
            .finish_non_exhaustive()
    }
}

impl CombatCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Frame update ==========

    /// Run one combat frame in fixed order: station spin, enemy AI and fire,
    /// torpedo motion, collision detection, then hit resolution in the order
    /// the hits were found.
    pub fn update(
        &mut self,
        ship: &mut ShipState,
        difficulty: u32,
        delta_seconds: f64,
        rng: &mut StdRng,
    ) -> CombatFrame {
        let mut frame = CombatFrame::default();

        if let Some(station) = self.station.as_mut() {
            station.update(delta_seconds);
        }

        for i in 0..self.enemies.len() {
            if self.enemies[i].update(rng) {
                let enemy = &self.enemies[i];
                let torpedo = self.torpedoes.fire_humon(enemy.position);
                frame.events.push(CombatEvent::EnemyFired {
                    torpedo,
                    enemy: enemy.id,
                });
            }
        }

        frame.expired_torpedoes = self.torpedoes.update();

        let hits = check_collisions(self.torpedoes.active(), &self.enemies, self.station.as_ref());
        for hit in hits {
            // A destroyed player takes no further hits this frame.
            if let (true, HitEvent::PlayerHit { torpedo }) = (frame.player_destroyed, hit) {
                self.torpedoes.remove(torpedo);
                continue;
            }
            if self.resolve_hit(hit, ship, difficulty, &mut frame.events) {
                frame.player_destroyed = true;
            }
        }

        if self.enemies.is_empty() && self.enemy_count_at_spawn > 0 {
            log::info!("Sector cleared ({} enemies destroyed)", self.enemy_count_at_spawn);
            self.enemy_count_at_spawn = 0;
            frame.events.push(CombatEvent::SectorCleared);
        }

        frame
    }

    // ========== Player fire ==========

    /// Launch a player torpedo. Refused (false) at the live torpedo cap.
    pub fn fire_zylon_torpedo(&mut self, ship: &mut ShipState, difficulty: u32, view: ViewMode) -> bool {
        let cap = max_torpedoes_for_view(difficulty, view) as usize;
        if self.torpedoes.zylon_count() >= cap {
            return false;
        }

        ship.drain_energy(launch_cost(difficulty));
        let (position, velocity) = launch_vector(view, &mut self.bay);
        self.torpedoes.fire_zylon(position, velocity);
        true
    }

    // ========== Sector lifecycle ==========

    /// Drop every live object and forget the spawn count.
    pub fn clear_sector(&mut self) {
        self.torpedoes.clear_all();
        self.enemies.clear();
        self.station = None;
        self.enemy_count_at_spawn = 0;
    }

    /// Spawn one enemy per entry at random positions in front of the player.
    pub fn spawn_enemies(&mut self, ship_types: &[ShipType], rng: &mut StdRng) {
        for &ship_type in ship_types {
            let id = self.allocate_enemy_id();
            self.enemies.push(EnemyUnit::spawn(id, ship_type, rng));
        }
    }

    /// Add an already-built enemy. Its id is replaced with a fresh one.
    pub fn add_enemy(&mut self, mut enemy: EnemyUnit) -> u32 {
        enemy.id = self.allocate_enemy_id();
        let id = enemy.id;
        self.enemies.push(enemy);
        id
    }

    pub fn spawn_station(&mut self) {
        self.station = Some(Station::new());
    }

    /// Record how many enemies the sector started with, for clear detection.
    pub fn set_enemy_count(&mut self, count: usize) {
        self.enemy_count_at_spawn = count;
    }

    fn allocate_enemy_id(&mut self) -> u32 {
        let id = self.next_enemy_id;
        self.next_enemy_id = self.next_enemy_id.wrapping_add(1);
        id
    }

    // ========== Steering ==========

    /// Rotate every sector object about the player.
    pub fn rotate_about_origin(&mut self, rotation: DQuat) {
        for enemy in &mut self.enemies {
            enemy.rotate_about_origin(rotation);
        }
        if let Some(station) = self.station.as_mut() {
            station.rotate_about_origin(rotation);
        }
        self.torpedoes.for_each_mut(|t| {
            t.position = rotation * t.position;
            t.velocity = rotation * t.velocity;
        });
    }

    // ========== Queries ==========

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn enemy_count_at_spawn(&self) -> usize {
        self.enemy_count_at_spawn
    }

    pub fn enemies(&self) -> &[EnemyUnit] {
        &self.enemies
    }

    pub fn station(&self) -> Option<&Station> {
        self.station.as_ref()
    }

    pub fn torpedoes(&self) -> &TorpedoPool {
        &self.torpedoes
    }

    /// Distance from the player to the closest enemy.
    pub fn nearest_enemy_distance(&self) -> Option<f64> {
        self.enemies
            .iter()
            .map(|e| e.position.distance(DVec3::ZERO))
            .min_by(|a, b| a.total_cmp(b))
    }
}
