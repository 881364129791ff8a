//! Difficulty levels and the galaxy generation table.

use std::fmt;

/// Named difficulty levels and their numeric scalar (1-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Difficulty {
    Cadet,
    Pilot,
    Commander,
    Warrior,
    ZylonLord,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Cadet,
        Difficulty::Pilot,
        Difficulty::Commander,
        Difficulty::Warrior,
        Difficulty::ZylonLord,
    ];

    pub fn scalar(&self) -> u32 {
        match self {
            Difficulty::Cadet => 1,
            Difficulty::Pilot => 2,
            Difficulty::Commander => 3,
            Difficulty::Warrior => 4,
            Difficulty::ZylonLord => 5,
        }
    }

    pub fn from_scalar(scalar: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.scalar() == scalar)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Cadet => "Cadet",
            Difficulty::Pilot => "Pilot",
            Difficulty::Commander => "Commander",
            Difficulty::Warrior => "Warrior",
            Difficulty::ZylonLord => "Zylon Lord",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generation parameters for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyConfig {
    /// Random placement attempts; duplicates and starbase hits are skipped.
    pub occupied_sector_attempts: u32,
    pub max_ships_per_sector: u32,
}

impl DifficultyConfig {
    /// Used for any level outside 1..=5.
    pub const FALLBACK: DifficultyConfig = DifficultyConfig {
        occupied_sector_attempts: 30,
        max_ships_per_sector: 3,
    };

    /// Look up the table for a raw level. Unrecognized levels degrade to
    /// [`DifficultyConfig::FALLBACK`] instead of failing.
    pub fn for_level(level: u32) -> Self {
        let (attempts, max_ships) = match level {
            1 => (12, 3),
            2 => (15, 3),
            3 => (18, 4),
            4 => (25, 5),
            5 => (40, 7),
            other => {
                log::warn!(
                    "unrecognized difficulty level {}, using fallback generation table",
                    other
                );
                return Self::FALLBACK;
            }
        };
        DifficultyConfig {
            occupied_sector_attempts: attempts,
            max_ships_per_sector: max_ships,
        }
    }
}

/// Clamp a raw difficulty scalar so it is safe to divide by.
pub fn effective_scalar(difficulty: u32) -> u32 {
    difficulty.max(1)
}
