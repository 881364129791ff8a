use crate::game_engine::{GameEngine, GameEvent};
use crate::io::OutputWriter;
use crate::models::constants::{Quadrant, GALAXY_ROWS, GALAXY_SECTORS, QUADRANT_SECTORS};
use crate::models::difficulty::Difficulty;
use crate::models::galaxy::GalaxyMap;
use crate::services::combat::CombatEvent;
use crate::services::navigation::WarpEvent;

pub struct EventPresenter;

impl EventPresenter {
    /// One line per event. Enemy launches are too frequent to print.
    pub fn show_event(frame: u64, event: &GameEvent, output: &mut dyn OutputWriter) {
        let text = match event {
            GameEvent::Combat(CombatEvent::EnemyFired { .. }) => return,
            GameEvent::Combat(combat) => Self::combat_text(combat),
            GameEvent::Warp(warp) => Self::warp_text(warp),
            GameEvent::TorpedoFired => "PHOTON TORPEDO AWAY".to_string(),
            GameEvent::TorpedoFireFailed => "TORPEDO BAYS EMPTY".to_string(),
            GameEvent::ShipRepaired { sector } => format!("REPAIRS COMPLETE AT {}", sector),
            GameEvent::StationsUnderSiege(stations) => {
                let names: Vec<String> = stations.iter().map(|s| s.to_string()).collect();
                format!("STARBASE UNDER SIEGE: {}", names.join(", "))
            }
            GameEvent::GameOver { cause, rank } => {
                format!("{}. RANK: {}", cause.message().to_uppercase(), rank)
            }
        };
        output.writeln(&format!("[{:>6}] {}", frame, text));
    }

    fn combat_text(event: &CombatEvent) -> String {
        match event {
            CombatEvent::EnemyFired { enemy, .. } => format!("ENEMY {} FIRED", enemy),
            CombatEvent::PlayerShieldHit { shield_strength } => {
                format!("SHIELDS HIT ({}% REMAINING)", (*shield_strength).max(0))
            }
            CombatEvent::ShieldsCollapsed => "SHIELDS DESTROYED".to_string(),
            CombatEvent::PlayerDestroyed => "SHIP DESTROYED".to_string(),
            CombatEvent::EnemyDestroyed { ship_type, .. } => {
                format!("{} DESTROYED", ship_type.name())
            }
            CombatEvent::StationDestroyed => "*** STARBASE DESTROYED ***".to_string(),
            CombatEvent::SectorCleared => "SECTOR CLEARED".to_string(),
        }
    }

    fn warp_text(event: &WarpEvent) -> String {
        match event {
            WarpEvent::Initiated { from, to, energy_cost } => {
                format!("WARP {} -> {} ({} ENERGY)", from, to, energy_cost)
            }
            WarpEvent::Arrived { sector, .. } => format!("ARRIVED AT {}", sector),
            WarpEvent::Populated(report) => format!(
                "SECTOR {}: {:?}, {} ENEMIES",
                report.sector, report.sector_type, report.enemies_spawned
            ),
        }
    }
}

pub struct StatusPresenter;

impl StatusPresenter {
    pub fn show_status(engine: &GameEngine, output: &mut dyn OutputWriter) {
        let ship = engine.ship();
        let difficulty = Difficulty::from_scalar(engine.difficulty())
            .map(|d| d.name())
            .unwrap_or("Unknown");
        output.writeln(&format!(
            "{}  DIFFICULTY {}  FRAME {}",
            engine.view_mode().label(),
            difficulty,
            engine.frame()
        ));
        output.writeln(&format!(
            "SECTOR {}  ENERGY {}  SHIELDS {} ({})  SPEED {}  ENEMIES {}",
            ship.current_sector(),
            ship.energy(),
            if ship.shields_up() { "UP" } else { "DOWN" },
            ship.shield_strength(),
            ship.current_speed(),
            engine.combat().enemy_count(),
        ));
        let systems = ship.systems();
        output.writeln(&format!(
            "HULL {}  SHIELD GENERATOR {}  ENGINES {}",
            systems.outer_hull.label(),
            systems.shield_integrity.label(),
            systems.engine_integrity.label(),
        ));
    }

    /// Galactic map, one line per row, with a quadrant label every
    /// quadrant's worth of rows.
    pub fn show_galactic_map(galaxy: &GalaxyMap, output: &mut dyn OutputWriter) {
        let rows_per_quadrant = GALAXY_ROWS * QUADRANT_SECTORS / GALAXY_SECTORS;
        for row in 0..GALAXY_ROWS {
            if row % rows_per_quadrant == 0 {
                let quadrant = Quadrant::ALL[row / rows_per_quadrant];
                output.writeln(quadrant.name());
            }
            output.writeln(&galaxy.render_row(row));
        }
    }
}
