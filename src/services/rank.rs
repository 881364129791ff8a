//! End-of-game rank and cause messages.

/// Titles from best to worst.
pub const RANKS: [&str; 13] = [
    "ZYLON HERO",
    "SPACE ACE",
    "WARRIOR",
    "CAPTAIN",
    "STAR COMMANDER",
    "COMMANDER",
    "LIEUTENANT",
    "PILOT",
    "ENSIGN",
    "NOVICE",
    "ROOKIE",
    "GARBAGE SCOW CAPTAIN",
    "GALACTIC COOK",
];

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EndCause {
    Victory,
    PlayerDestroyed,
    EnergyDepleted,
    AllStationsDestroyed,
}

impl EndCause {
    pub fn message(&self) -> &'static str {
        match self {
            EndCause::Victory => "Victory is ours. The Humons have been vanquished",
            EndCause::PlayerDestroyed => "Prototype defense ship destroyed by Humon Fire",
            EndCause::EnergyDepleted => {
                "Prototype defense ship destroyed due to GridWarp core containment failure"
            }
            EndCause::AllStationsDestroyed => "All is lost. Zylon outposts destroyed by Humon invaders",
        }
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, EndCause::Victory)
    }
}

/// Rank from the share of initially occupied sectors still occupied.
/// More enemies left means a worse rank; the two easiest levels cost one step.
pub fn calculate_rank(occupied_ratio: f64, difficulty: u32) -> &'static str {
    let clamped = if occupied_ratio.is_nan() {
        0.0
    } else {
        occupied_ratio.clamp(0.0, 1.0)
    };
    let last = RANKS.len() - 1;
    let mut index = ((clamped * RANKS.len() as f64).floor() as usize).min(last);

    if difficulty < 3 && index < last {
        index += 1;
    }

    RANKS[index]
}
