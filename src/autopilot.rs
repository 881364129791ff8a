//! Scripted pilot for the headless runner.
//!
//! Issues the same commands a companion controller would: raise shields,
//! fire at anything in the sector on a fixed cadence, and warp toward the
//! nearest occupied sector once the current one is quiet.

use crate::game_engine::GameEngine;
use crate::models::constants::DamageAmount;
use crate::services::commands::CompanionCommand;
use crate::services::navigation::WarpPhase;

/// Frames between torpedo launches.
const FIRE_CADENCE: u64 = 20;

#[derive(Debug, Default)]
pub struct Autopilot {
    frames: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands to issue this frame.
    pub fn decide(&mut self, engine: &GameEngine) -> Vec<CompanionCommand> {
        self.frames += 1;
        let mut commands = Vec::new();

        if engine.is_over() || engine.warp_phase() != WarpPhase::Cruising {
            return commands;
        }

        let ship = engine.ship();
        if !ship.shields_up() && ship.systems().shield_integrity != DamageAmount::Destroyed {
            commands.push(CompanionCommand::Shields);
        }

        if engine.combat().enemy_count() > 0 {
            if self.frames % FIRE_CADENCE == 0 {
                commands.push(CompanionCommand::Fire);
            }
            return commands;
        }

        // Wait out a pending station repair before moving on.
        if engine.repair_pending() {
            return commands;
        }

        if let Some(next) = engine.galaxy().nearest_occupied(ship.current_sector()) {
            commands.push(CompanionCommand::Grid(next.index()));
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_engine::FrameInput;

    #[test]
    fn raises_shields_first() {
        let engine = GameEngine::new(3, 2);
        let mut pilot = Autopilot::new();
        assert_eq!(pilot.decide(&engine).first(), Some(&CompanionCommand::Shields));
    }

    #[test]
    fn clears_sectors_over_time() {
        let mut engine = GameEngine::new(5, 1);
        let mut pilot = Autopilot::new();
        let start = engine.galaxy().current_occupied_count();

        for _ in 0..60 * 120 {
            for command in pilot.decide(&engine) {
                engine.execute(command);
            }
            engine.tick(1.0 / 60.0, FrameInput::default());
            if engine.is_over() {
                break;
            }
        }

        assert!(engine.frame() > 0);
        assert!(engine.galaxy().current_occupied_count() <= start);
    }
}
