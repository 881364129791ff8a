use std::f64::consts::TAU;

pub const GALAXY_SECTORS: usize = 128;
pub const QUADRANT_SECTORS: usize = 32;
pub const NUM_QUADRANTS: usize = 4;
/// Row width used when the galaxy is laid out as an 8x16 grid.
pub const GALAXY_COLUMNS: usize = 16;
pub const GALAXY_ROWS: usize = 8;

pub const FRAME_RATE: f64 = 60.0;

pub const INITIAL_ENERGY: i32 = 10_000;
pub const INITIAL_SHIELD_STRENGTH: i32 = 100;
pub const MAX_SPEED: u8 = 9;
pub const STARTING_SECTOR: usize = 64;
pub const STARTING_TARGET_SECTOR: usize = 68;

pub const SHIELDS_UP_DRAIN_BASE: i32 = 20;
pub const SHIELDS_DOWN_DRAIN_BASE: i32 = 60;

pub const MAX_TORPEDOES: u32 = 6;
pub const TORPEDO_LIFESPAN: u32 = 140;
pub const TORPEDO_SPEED: f64 = 0.6;
pub const TORPEDO_CORRECTION_DIVIDER: f64 = 13.0;

pub const PLAYER_HIT_RADIUS: f64 = 5.0;
pub const ENEMY_HIT_RADIUS: f64 = 5.0;
pub const STATION_HIT_RADIUS: f64 = 6.0;

pub const ENEMY_INITIAL_SHIELDS: i32 = 100;
pub const FLY_IN_FRAMES: u32 = 90;
pub const MIN_FIRST_SHOT_DELAY: f64 = 30.0;
pub const MAX_FIRST_SHOT_DELAY: f64 = 340.0;
pub const MIN_SHOOT_INTERVAL: f64 = 185.0;
pub const MAX_SHOOT_INTERVAL: f64 = 800.0;

/// One full station revolution every 90 seconds.
pub const STATION_ROTATION_SPEED: f64 = TAU / 90.0;
pub const STATION_REPAIR_DELAY: f64 = 8.0;

pub const WARP_DURATION: f64 = 6.0;
pub const POST_WARP_POPULATE_DELAY: f64 = 1.0;

pub const STARBASE_ARRIVAL_SPEED: u8 = 0;
pub const ENEMY_ARRIVAL_SPEED: u8 = 2;
pub const EMPTY_ARRIVAL_SPEED: u8 = 3;

/// Degrees of steering rotation per second at full thrust.
pub const THRUST_AMOUNT: f64 = 5.0;

pub const TROOP_MOVEMENT_BASE_INTERVAL: u32 = 4800;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ShipType {
    Scout = 0,
    Fighter = 1,
    Destroyer = 2,
}

impl ShipType {
    pub const ALL: [ShipType; 3] = [ShipType::Scout, ShipType::Fighter, ShipType::Destroyer];

    pub fn name(&self) -> &'static str {
        match self {
            ShipType::Scout => "SCOUT",
            ShipType::Fighter => "FIGHTER",
            ShipType::Destroyer => "DESTROYER",
        }
    }

    /// Map a rolled tier value back to a ship type. Anything unknown is a scout.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            1 => ShipType::Fighter,
            2 => ShipType::Destroyer,
            _ => ShipType::Scout,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SectorType {
    Empty,
    Starbase,
    Enemy,
    Enemy2,
    Enemy3,
}

impl SectorType {
    pub fn is_occupied(&self) -> bool {
        matches!(self, SectorType::Enemy | SectorType::Enemy2 | SectorType::Enemy3)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SectorType::Empty => " . ",
            SectorType::Starbase => ">!<",
            SectorType::Enemy => " 1 ",
            SectorType::Enemy2 => " 2 ",
            SectorType::Enemy3 => " 3 ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Quadrant {
    Alpha,
    Beta,
    Gamma,
    Delta,
}

impl Quadrant {
    pub const ALL: [Quadrant; NUM_QUADRANTS] =
        [Quadrant::Alpha, Quadrant::Beta, Quadrant::Gamma, Quadrant::Delta];

    pub fn name(&self) -> &'static str {
        match self {
            Quadrant::Alpha => "ALPHA",
            Quadrant::Beta => "BETA",
            Quadrant::Gamma => "GAMMA",
            Quadrant::Delta => "DELTA",
        }
    }

    /// 0-based index range of the sectors in this quadrant.
    pub fn index_range(&self) -> std::ops::Range<usize> {
        let start = *self as usize * QUADRANT_SECTORS;
        start..start + QUADRANT_SECTORS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum DamageAmount {
    Functional = 0,
    Damaged = 1,
    SeverelyDamaged = 2,
    Destroyed = 3,
}

impl DamageAmount {
    pub fn label(&self) -> &'static str {
        match self {
            DamageAmount::Functional => "functional",
            DamageAmount::Damaged => "damaged",
            DamageAmount::SeverelyDamaged => "severely damaged",
            DamageAmount::Destroyed => "destroyed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum ViewMode {
    #[default]
    Fore,
    Aft,
    GalacticMap,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Fore => "FORE VIEW",
            ViewMode::Aft => "AFT VIEW",
            ViewMode::GalacticMap => "GALACTIC MAP",
        }
    }
}
