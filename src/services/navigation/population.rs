//! Sector population on arrival.

use rand::rngs::StdRng;

use crate::models::constants::{
    SectorType, EMPTY_ARRIVAL_SPEED, ENEMY_ARRIVAL_SPEED, STARBASE_ARRIVAL_SPEED,
};
use crate::models::galaxy::GalaxyMap;
use crate::models::position::SectorIndex;
use crate::models::ship::ShipState;
use crate::services::combat::CombatCoordinator;

/// What was placed into the sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PopulationReport {
    pub sector: SectorIndex,
    pub sector_type: SectorType,
    pub enemies_spawned: usize,
    /// A station was spawned, so a repair should follow.
    pub station_spawned: bool,
}

/// Fill the combat arena from the galaxy cell at the ship's current sector.
/// Old objects are always cleared first. Sets the arrival speed.
pub fn populate_sector(
    ship: &mut ShipState,
    galaxy: &GalaxyMap,
    combat: &mut CombatCoordinator,
    rng: &mut StdRng,
) -> PopulationReport {
    let sector = ship.current_sector();
    let cell = galaxy.sector(sector);

    combat.clear_sector();

    let mut report = PopulationReport {
        sector,
        sector_type: cell.sector_type,
        enemies_spawned: 0,
        station_spawned: false,
    };

    match cell.sector_type {
        SectorType::Starbase => {
            ship.set_speed(STARBASE_ARRIVAL_SPEED);
            combat.spawn_station();
            report.station_spawned = true;
        }
        SectorType::Enemy | SectorType::Enemy2 | SectorType::Enemy3 => {
            ship.set_speed(ENEMY_ARRIVAL_SPEED);
            let enemies = cell.enemies();
            if !enemies.is_empty() {
                combat.spawn_enemies(enemies, rng);
                combat.set_enemy_count(enemies.len());
                report.enemies_spawned = enemies.len();
            }
        }
        SectorType::Empty => ship.set_speed(EMPTY_ARRIVAL_SPEED),
    }

    log::info!(
        "Populated sector {} ({:?}): {} enemies, station: {}",
        sector,
        report.sector_type,
        report.enemies_spawned,
        report.station_spawned
    );
    report
}
