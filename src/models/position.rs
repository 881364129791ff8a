use std::fmt;

use super::constants::{Quadrant, GALAXY_SECTORS, QUADRANT_SECTORS};

/// A 0-based index into the 128-sector galaxy.
///
/// This is the canonical sector representation everywhere in the crate.
/// The 1-based sector number only appears in display helpers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SectorIndex(usize);

impl SectorIndex {
    /// Returns `None` for indices outside `0..128`.
    pub fn new(index: usize) -> Option<Self> {
        (index < GALAXY_SECTORS).then_some(SectorIndex(index))
    }

    /// Build from a 1-based sector number (1..=128).
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::new)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    /// 1-based sector number (1..=128).
    pub fn number(&self) -> usize {
        self.0 + 1
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::ALL[self.0 / QUADRANT_SECTORS]
    }

    /// 1-based position within the quadrant (1..=32).
    pub fn quadrant_number(&self) -> usize {
        self.0 % QUADRANT_SECTORS + 1
    }

    /// Number of sectors between two indices, used for warp cost.
    pub fn distance(&self, other: SectorIndex) -> usize {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for SectorIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.quadrant().name(), self.quadrant_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_indices() {
        assert!(SectorIndex::new(0).is_some());
        assert!(SectorIndex::new(127).is_some());
        assert!(SectorIndex::new(128).is_none());
        assert!(SectorIndex::from_number(0).is_none());
        assert!(SectorIndex::from_number(129).is_none());
    }

    #[test]
    fn number_is_one_based() {
        let s = SectorIndex::new(0).unwrap();
        assert_eq!(s.number(), 1);
        assert_eq!(SectorIndex::from_number(128).unwrap().index(), 127);
    }

    #[test]
    fn quadrant_boundaries() {
        let cases = [
            (0, Quadrant::Alpha, 1),
            (31, Quadrant::Alpha, 32),
            (32, Quadrant::Beta, 1),
            (64, Quadrant::Gamma, 1),
            (95, Quadrant::Gamma, 32),
            (96, Quadrant::Delta, 1),
            (127, Quadrant::Delta, 32),
        ];
        for (idx, quadrant, number) in cases {
            let s = SectorIndex::new(idx).unwrap();
            assert_eq!(s.quadrant(), quadrant, "index {}", idx);
            assert_eq!(s.quadrant_number(), number, "index {}", idx);
        }
    }

    #[test]
    fn distance_is_absolute() {
        let a = SectorIndex::new(64).unwrap();
        let b = SectorIndex::new(127).unwrap();
        assert_eq!(a.distance(b), 63);
        assert_eq!(b.distance(a), 63);
    }

    #[test]
    fn display_uses_quadrant_name() {
        assert_eq!(SectorIndex::new(33).unwrap().to_string(), "BETA 2");
    }
}
