//! Galaxy model
//!
//! Represents the game universe: 128 sectors split into four quadrants of
//! 32, holding one starbase per quadrant and a difficulty-scaled number of
//! enemy-occupied sectors.

mod generation;
mod queries;

use rand::rngs::StdRng;
use std::fmt;

use super::constants::{SectorType, GALAXY_SECTORS};
use super::difficulty::DifficultyConfig;
use super::position::SectorIndex;
use super::sector_grid::SectorGrid;

use generation::generate_sectors;

/// The galaxy map. Exclusively owns all sector cells.
#[derive(Clone)]
pub struct GalaxyMap {
    /// Index = sector number - 1.
    sectors: Vec<SectorGrid>,
    initial_occupied: usize,
}

impl GalaxyMap {
    /// Generate a galaxy for a raw difficulty level (1-5).
    /// Unrecognized levels fall back to the default generation table.
    pub fn generate(difficulty_level: u32, rng: &mut StdRng) -> Self {
        let config = DifficultyConfig::for_level(difficulty_level);
        let sectors = generate_sectors(config, rng);
        let mut galaxy = GalaxyMap {
            sectors,
            initial_occupied: 0,
        };
        galaxy.initial_occupied = galaxy.current_occupied_count();

        log::info!(
            "galaxy generated at level {}: {} occupied sectors, {} starbases",
            difficulty_level,
            galaxy.initial_occupied,
            galaxy.starbase_count()
        );
        galaxy
    }

    /// Build a galaxy from explicit sectors. The initial occupied count is
    /// captured from the given cells.
    pub fn from_sectors(sectors: Vec<SectorGrid>) -> Self {
        debug_assert_eq!(sectors.len(), GALAXY_SECTORS);
        let mut galaxy = GalaxyMap {
            sectors,
            initial_occupied: 0,
        };
        galaxy.initial_occupied = galaxy.current_occupied_count();
        galaxy
    }

    // ========== Accessor Methods ==========

    pub fn sectors(&self) -> &[SectorGrid] {
        &self.sectors
    }

    pub fn sector(&self, index: SectorIndex) -> &SectorGrid {
        &self.sectors[index.index()]
    }

    /// Lookup by raw index; `None` outside 0..128.
    pub fn get(&self, index: usize) -> Option<&SectorGrid> {
        self.sectors.get(index)
    }

    pub fn initial_occupied_count(&self) -> usize {
        self.initial_occupied
    }

    /// Count of sectors currently hosting enemies.
    pub fn current_occupied_count(&self) -> usize {
        self.sectors.iter().filter(|s| s.is_occupied()).count()
    }

    pub fn starbase_count(&self) -> usize {
        self.sectors
            .iter()
            .filter(|s| s.sector_type == SectorType::Starbase)
            .count()
    }

    /// Remaining share of the initially occupied sectors. Zero when the
    /// galaxy started without any.
    pub fn occupied_ratio(&self) -> f64 {
        if self.initial_occupied == 0 {
            return 0.0;
        }
        self.current_occupied_count() as f64 / self.initial_occupied as f64
    }

    // ========== Mutation ==========

    /// Reset a sector to empty after its last enemy or its station is
    /// destroyed. Out-of-range indices are ignored.
    pub fn clear_sector(&mut self, index: usize) {
        match self.sectors.get_mut(index) {
            Some(sector) => {
                log::debug!("sector {} cleared (was {:?})", index + 1, sector.sector_type);
                sector.clear();
            }
            None => log::warn!("clear_sector: index {} outside the galaxy", index),
        }
    }
}

impl fmt::Debug for GalaxyMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("GalaxyMap")
            .field("occupied", &self.current_occupied_count())
            .field("initial_occupied", &self.initial_occupied)
            .field("starbases", &self.starbase_count())
            .finish_non_exhaustive()
    }
}
