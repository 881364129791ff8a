use crate::models::constants::ShipType;
use crate::models::torpedo::Torpedo;

/// Fire-and-forget notifications produced by one combat frame.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum CombatEvent {
    /// An enemy ship launched a torpedo.
    EnemyFired { torpedo: u32, enemy: u32 },
    /// Shields absorbed a hit.
    PlayerShieldHit { shield_strength: i32 },
    /// The last hit drove shield strength to zero. Shields stay down until repaired.
    ShieldsCollapsed,
    PlayerDestroyed,
    EnemyDestroyed { id: u32, ship_type: ShipType },
    StationDestroyed,
    /// Every enemy spawned into this sector is gone. Emitted once per population.
    SectorCleared,
}

/// Result of one `CombatCoordinator::update` call.
#[derive(Debug, Clone, Default)]
pub struct CombatFrame {
    pub player_destroyed: bool,
    pub events: Vec<CombatEvent>,
    pub expired_torpedoes: Vec<Torpedo>,
}

impl CombatFrame {
    pub fn sector_cleared(&self) -> bool {
        self.events.contains(&CombatEvent::SectorCleared)
    }

    pub fn station_destroyed(&self) -> bool {
        self.events.contains(&CombatEvent::StationDestroyed)
    }

    pub fn enemies_destroyed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, CombatEvent::EnemyDestroyed { .. }))
            .count()
    }
}
