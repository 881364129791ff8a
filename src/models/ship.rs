use super::constants::{
    DamageAmount, INITIAL_ENERGY, INITIAL_SHIELD_STRENGTH, MAX_SPEED, SHIELDS_DOWN_DRAIN_BASE,
    SHIELDS_UP_DRAIN_BASE, STARTING_SECTOR, STARTING_TARGET_SECTOR,
};
use super::difficulty::effective_scalar;
use super::position::SectorIndex;

/// Damage state of each ship subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShipSystems {
    pub outer_hull: DamageAmount,
    pub shield_integrity: DamageAmount,
    pub engine_integrity: DamageAmount,
}

impl Default for ShipSystems {
    fn default() -> Self {
        ShipSystems {
            outer_hull: DamageAmount::Functional,
            shield_integrity: DamageAmount::Functional,
            engine_integrity: DamageAmount::Functional,
        }
    }
}

/// Result of an enemy torpedo reaching the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Shields were down: the hit is fatal.
    Destroyed,
    /// Shields took the hit and are still up.
    Absorbed,
    /// Shields took the hit and collapsed for good.
    ShieldsCollapsed,
}

/// The player's ship. Sits at the world origin; everything else moves.
#[derive(Debug, Clone)]
pub struct ShipState {
    energy: i32,
    shield_strength: i32,
    shields_up: bool,
    current_speed: u8,
    current_sector: SectorIndex,
    target_sector: SectorIndex,
    in_warp: bool,
    systems: ShipSystems,
    clock: u64,
}

impl Default for ShipState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShipState {
    pub fn new() -> Self {
        ShipState {
            energy: INITIAL_ENERGY,
            shield_strength: INITIAL_SHIELD_STRENGTH,
            shields_up: false,
            current_speed: 0,
            current_sector: SectorIndex::new(STARTING_SECTOR).unwrap_or_default(),
            target_sector: SectorIndex::new(STARTING_TARGET_SECTOR).unwrap_or_default(),
            in_warp: false,
            systems: ShipSystems::default(),
            clock: 0,
        }
    }

    // ========== Accessor Methods ==========

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn shield_strength(&self) -> i32 {
        self.shield_strength
    }

    pub fn shields_up(&self) -> bool {
        self.shields_up
    }

    pub fn current_speed(&self) -> u8 {
        self.current_speed
    }

    pub fn current_sector(&self) -> SectorIndex {
        self.current_sector
    }

    pub fn target_sector(&self) -> SectorIndex {
        self.target_sector
    }

    pub fn is_in_warp(&self) -> bool {
        self.in_warp
    }

    pub fn systems(&self) -> &ShipSystems {
        &self.systems
    }

    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn is_energy_depleted(&self) -> bool {
        self.energy <= 0
    }

    // ========== Setters ==========

    pub fn set_energy(&mut self, energy: i32) {
        self.energy = energy;
    }

    pub fn set_shield_strength(&mut self, strength: i32) {
        self.shield_strength = strength;
    }

    /// Speed is clamped to 0-9.
    pub fn set_speed(&mut self, speed: u8) {
        self.current_speed = speed.min(MAX_SPEED);
    }

    pub fn set_current_sector(&mut self, sector: SectorIndex) {
        self.current_sector = sector;
    }

    pub fn set_target_sector(&mut self, sector: SectorIndex) {
        self.target_sector = sector;
    }

    pub fn set_in_warp(&mut self, in_warp: bool) {
        self.in_warp = in_warp;
    }

    /// Raise or lower shields. Raising is refused once the shield generator
    /// is destroyed; only a station can bring it back.
    pub fn set_shields(&mut self, up: bool) -> bool {
        if up && self.systems.shield_integrity == DamageAmount::Destroyed {
            return false;
        }
        self.shields_up = up;
        true
    }

    pub fn toggle_shields(&mut self) -> bool {
        self.set_shields(!self.shields_up)
    }

    /// Spend energy, never going below zero.
    pub fn drain_energy(&mut self, amount: i32) {
        self.energy = (self.energy - amount).max(0);
    }

    // ========== Frame update ==========

    /// Per-frame energy drain. Drains one unit every `drain_rate` frames:
    /// faster with shields up, at higher difficulty and at higher speed.
    /// The rate never drops below one frame.
    pub fn advance_one_frame(&mut self, difficulty: u32) {
        self.clock += 1;
        let drain_rate = self.drain_rate(difficulty);
        if self.clock % drain_rate == 0 && self.energy > 0 {
            self.energy -= 1;
        }
    }

    pub fn drain_rate(&self, difficulty: u32) -> u64 {
        let base = if self.shields_up {
            SHIELDS_UP_DRAIN_BASE
        } else {
            SHIELDS_DOWN_DRAIN_BASE
        };
        let rate = base / effective_scalar(difficulty) as i32 - (self.current_speed / 3) as i32;
        rate.max(1) as u64
    }

    /// Full repair at a starbase.
    pub fn repair_at_station(&mut self) {
        self.systems.outer_hull = DamageAmount::Functional;
        self.systems.engine_integrity = DamageAmount::Functional;
        self.systems.shield_integrity = DamageAmount::Functional;
        self.shield_strength = INITIAL_SHIELD_STRENGTH;
        self.energy = INITIAL_ENERGY;
    }

    /// Apply an enemy torpedo hit. The caller decides what to do with a
    /// fatal outcome.
    pub fn receive_damage(&mut self, difficulty: u32) -> HitOutcome {
        if !self.shields_up {
            return HitOutcome::Destroyed;
        }

        let amount = 5 * difficulty as i32;
        if difficulty > 1 {
            self.energy -= amount;
        }
        self.shield_strength -= amount;

        if self.shield_strength <= 0 {
            self.systems.shield_integrity = DamageAmount::Destroyed;
            self.shields_up = false;
            return HitOutcome::ShieldsCollapsed;
        }
        HitOutcome::Absorbed
    }
}
