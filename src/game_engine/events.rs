use crate::models::position::SectorIndex;
use crate::services::combat::CombatEvent;
use crate::services::navigation::WarpEvent;
use crate::services::rank::EndCause;

/// Per-frame steering input, each axis in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameInput {
    /// Yaw.
    pub lateral: f64,
    /// Pitch.
    pub vertical: f64,
}

impl FrameInput {
    pub fn new(lateral: f64, vertical: f64) -> Self {
        FrameInput {
            lateral: lateral.clamp(-1.0, 1.0),
            vertical: vertical.clamp(-1.0, 1.0),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.lateral == 0.0 && self.vertical == 0.0
    }
}

/// Notifications for audio, HUD and any other outside collaborator.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum GameEvent {
    Combat(CombatEvent),
    Warp(WarpEvent),
    TorpedoFired,
    TorpedoFireFailed,
    ShipRepaired { sector: SectorIndex },
    StationsUnderSiege(Vec<SectorIndex>),
    GameOver { cause: EndCause, rank: String },
}
