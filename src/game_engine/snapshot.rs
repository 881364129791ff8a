//! Read-only scene snapshot for a renderer or for JSON output.

use glam::DVec3;

use crate::models::constants::{ShipType, ViewMode};
use crate::models::position::SectorIndex;
use crate::models::torpedo::TorpedoKind;

use super::{GameEngine, GameState};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EnemySnapshot {
    pub id: u32,
    pub ship_type: ShipType,
    pub position: DVec3,
    pub facing: DVec3,
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StationSnapshot {
    pub position: DVec3,
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TorpedoSnapshot {
    pub id: u32,
    pub kind: TorpedoKind,
    pub position: DVec3,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SceneSnapshot {
    pub frame: u64,
    pub clock: f64,
    pub sector: SectorIndex,
    pub target_sector: SectorIndex,
    pub speed: u8,
    pub energy: i32,
    pub shield_strength: i32,
    pub shields_up: bool,
    pub in_warp: bool,
    pub view_mode: ViewMode,
    pub occupied_sectors: usize,
    pub enemies: Vec<EnemySnapshot>,
    pub station: Option<StationSnapshot>,
    pub torpedoes: Vec<TorpedoSnapshot>,
    pub state: GameState,
}

impl GameEngine {
    pub fn snapshot(&self) -> SceneSnapshot {
        let ship = self.ship();
        let combat = self.combat();

        SceneSnapshot {
            frame: self.frame(),
            clock: self.clock(),
            sector: ship.current_sector(),
            target_sector: ship.target_sector(),
            speed: ship.current_speed(),
            energy: ship.energy(),
            shield_strength: ship.shield_strength(),
            shields_up: ship.shields_up(),
            in_warp: ship.is_in_warp(),
            view_mode: self.view_mode(),
            occupied_sectors: self.galaxy().current_occupied_count(),
            enemies: combat
                .enemies()
                .iter()
                .map(|e| EnemySnapshot {
                    id: e.id,
                    ship_type: e.ship_type,
                    position: e.position,
                    facing: e.facing,
                    scale: e.scale,
                })
                .collect(),
            station: combat.station().map(|s| StationSnapshot {
                position: s.position,
                angle: s.angle,
            }),
            torpedoes: combat
                .torpedoes()
                .active()
                .iter()
                .map(|t| TorpedoSnapshot {
                    id: t.id,
                    kind: t.kind,
                    position: t.position,
                })
                .collect(),
            state: self.state().clone(),
        }
    }

    /// Snapshot as a single JSON line.
    pub fn snapshot_json(&self) -> crate::models::errors::GameResult<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}
