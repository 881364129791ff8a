//! Enemy troop movement between sectors.
//!
//! Only the siege check exists: a starbase is besieged when every
//! orthogonal neighbour on the galactic map is occupied by enemies.

use crate::models::constants::{SectorType, GALAXY_COLUMNS, GALAXY_ROWS, TROOP_MOVEMENT_BASE_INTERVAL};
use crate::models::difficulty::effective_scalar;
use crate::models::galaxy::GalaxyMap;
use crate::models::position::SectorIndex;

#[derive(Debug, Clone)]
pub struct TroopMonitor {
    interval: u32,
    frames_since_check: u32,
    besieged: Vec<SectorIndex>,
}

impl TroopMonitor {
    pub fn new(difficulty: u32) -> Self {
        TroopMonitor {
            interval: (TROOP_MOVEMENT_BASE_INTERVAL / effective_scalar(difficulty)).max(1),
            frames_since_check: 0,
            besieged: Vec::new(),
        }
    }

    /// Frames between siege checks.
    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn besieged_stations(&self) -> &[SectorIndex] {
        &self.besieged
    }

    /// Count one frame. Returns true when a siege check ran.
    pub fn update(&mut self, galaxy: &GalaxyMap) -> bool {
        self.frames_since_check += 1;
        if self.frames_since_check < self.interval {
            return false;
        }

        self.frames_since_check = 0;
        self.besieged = besieged_stations(galaxy);
        if !self.besieged.is_empty() {
            log::warn!("{} station(s) under siege", self.besieged.len());
        }
        true
    }
}

/// Starbases whose in-bounds orthogonal neighbours are all enemy sectors.
pub fn besieged_stations(galaxy: &GalaxyMap) -> Vec<SectorIndex> {
    galaxy
        .starbase_indices()
        .into_iter()
        .filter(|s| {
            neighbours(s.index()).all(|n| galaxy.get(n).map_or(true, |cell| cell.is_occupied()))
        })
        .collect()
}

fn neighbours(index: usize) -> impl Iterator<Item = usize> {
    let row = index / GALAXY_COLUMNS;
    let col = index % GALAXY_COLUMNS;
    [
        (row > 0).then(|| index - GALAXY_COLUMNS),
        (row + 1 < GALAXY_ROWS).then(|| index + GALAXY_COLUMNS),
        (col > 0).then(|| index - 1),
        (col + 1 < GALAXY_COLUMNS).then(|| index + 1),
    ]
    .into_iter()
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::{ShipType, GALAXY_SECTORS};
    use crate::models::sector_grid::SectorGrid;

    fn occupy(sectors: &mut [SectorGrid], i: usize) {
        sectors[i].sector_type = SectorType::Enemy;
        sectors[i].number_of_objects = 1;
        sectors[i].enemy_types = Some(vec![ShipType::Scout]);
    }

    fn blank() -> Vec<SectorGrid> {
        (1..=GALAXY_SECTORS).map(SectorGrid::empty).collect()
    }

    #[test]
    fn interval_scales_with_difficulty() {
        assert_eq!(TroopMonitor::new(1).interval(), 4800);
        assert_eq!(TroopMonitor::new(3).interval(), 1600);
        assert_eq!(TroopMonitor::new(0).interval(), 4800);
    }

    #[test]
    fn surrounded_station_is_besieged() {
        let mut sectors = blank();
        sectors[40].sector_type = SectorType::Starbase;
        for n in [24, 56, 39, 41] {
            occupy(&mut sectors, n);
        }
        let galaxy = GalaxyMap::from_sectors(sectors);
        assert_eq!(besieged_stations(&galaxy), vec![SectorIndex::new(40).unwrap()]);
    }

    #[test]
    fn one_open_neighbour_breaks_siege() {
        let mut sectors = blank();
        sectors[40].sector_type = SectorType::Starbase;
        for n in [24, 56, 39] {
            occupy(&mut sectors, n);
        }
        let galaxy = GalaxyMap::from_sectors(sectors);
        assert!(besieged_stations(&galaxy).is_empty());
    }

    #[test]
    fn corner_station_needs_two_neighbours() {
        let mut sectors = blank();
        sectors[0].sector_type = SectorType::Starbase;
        occupy(&mut sectors, 1);
        occupy(&mut sectors, 16);
        let galaxy = GalaxyMap::from_sectors(sectors);
        assert_eq!(besieged_stations(&galaxy).len(), 1);
    }

    #[test]
    fn checks_only_on_interval() {
        let galaxy = GalaxyMap::from_sectors(blank());
        let mut monitor = TroopMonitor::new(5);
        let runs = (0..960 * 2).filter(|_| monitor.update(&galaxy)).count();
        assert_eq!(runs, 2);
    }
}
