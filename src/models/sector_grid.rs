use super::constants::{SectorType, ShipType};

/// Persistent data about a single galaxy sector.
/// Only the roster is kept; enemy positions are rolled again on every visit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SectorGrid {
    /// 1-based sector number (1-128)
    pub number: usize,
    pub sector_type: SectorType,
    pub number_of_objects: usize,
    pub enemy_types: Option<Vec<ShipType>>,
}

impl SectorGrid {
    pub fn empty(number: usize) -> Self {
        SectorGrid {
            number,
            sector_type: SectorType::Empty,
            number_of_objects: 0,
            enemy_types: None,
        }
    }

    /// Reset to an empty sector.
    pub fn clear(&mut self) {
        self.sector_type = SectorType::Empty;
        self.number_of_objects = 0;
        self.enemy_types = None;
    }

    pub fn is_occupied(&self) -> bool {
        self.sector_type.is_occupied()
    }

    /// Enemy roster for this sector; empty for stations and empty space.
    pub fn enemies(&self) -> &[ShipType] {
        self.enemy_types.as_deref().unwrap_or(&[])
    }

    /// Check the roster invariants: a present roster matches the object
    /// count, and an empty sector has no roster and no objects.
    pub fn is_consistent(&self) -> bool {
        let roster_ok = self
            .enemy_types
            .as_ref()
            .map_or(true, |types| types.len() == self.number_of_objects);
        let empty_ok = self.sector_type != SectorType::Empty
            || (self.enemy_types.is_none() && self.number_of_objects == 0);
        roster_ok && empty_ok
    }
}
