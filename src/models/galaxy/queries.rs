use crate::models::constants::{SectorType, GALAXY_COLUMNS};
use crate::models::position::SectorIndex;

use super::GalaxyMap;

impl GalaxyMap {
    /// Indices of every sector currently hosting enemies.
    pub fn occupied_indices(&self) -> Vec<SectorIndex> {
        self.indices_where(|t| t.is_occupied())
    }

    pub fn starbase_indices(&self) -> Vec<SectorIndex> {
        self.indices_where(|t| t == SectorType::Starbase)
    }

    /// Closest occupied sector by index distance. Ties go to the lower index.
    pub fn nearest_occupied(&self, from: SectorIndex) -> Option<SectorIndex> {
        self.occupied_indices()
            .into_iter()
            .min_by_key(|s| (s.distance(from), s.index()))
    }

    /// Render one row of the 8x16 galactic map. `row` is 0-based (0-7).
    pub fn render_row(&self, row: usize) -> String {
        let start = row * GALAXY_COLUMNS;
        self.sectors()
            .iter()
            .skip(start)
            .take(GALAXY_COLUMNS)
            .map(|s| s.sector_type.symbol())
            .collect()
    }

    fn indices_where(&self, pred: impl Fn(SectorType) -> bool) -> Vec<SectorIndex> {
        self.sectors()
            .iter()
            .enumerate()
            .filter(|(_, s)| pred(s.sector_type))
            .filter_map(|(i, _)| SectorIndex::new(i))
            .collect()
    }
}
