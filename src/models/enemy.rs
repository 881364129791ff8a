use glam::{DQuat, DVec3};
use rand::rngs::StdRng;
use rand::Rng;

use super::constants::{
    ShipType, ENEMY_INITIAL_SHIELDS, FLY_IN_FRAMES, FRAME_RATE, MAX_FIRST_SHOT_DELAY,
    MAX_SHOOT_INTERVAL, MIN_FIRST_SHOT_DELAY, MIN_SHOOT_INTERVAL,
};

/// Lateral maneuver state. Zig moves right, Zag moves left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ManeuverType {
    Zig,
    Zag,
    FullStop,
}

/// An in-progress maneuver: ease from `start` to `target` over `duration` frames.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Maneuver {
    start: DVec3,
    target: DVec3,
    progress: f64,
    duration: f64,
}

/// An enemy warship in the current sector.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyUnit {
    pub id: u32,
    pub ship_type: ShipType,
    pub position: DVec3,
    /// Unit vector pointing at the player.
    pub facing: DVec3,
    pub shield_strength: i32,
    /// Scale during the fly-in animation, 0.1 up to 1.0.
    pub scale: f64,
    maneuver_type: ManeuverType,
    maneuver: Option<Maneuver>,
    fly_in_frames: u32,
    fire_countdown: i32,
}

/// Ease-in-ease-out curve over `t` in [0, 1].
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

impl EnemyUnit {
    /// Spawn at a random position in front of the player.
    pub fn spawn(id: u32, ship_type: ShipType, rng: &mut StdRng) -> Self {
        let position = DVec3::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-12.0..12.0),
            rng.gen_range(-90.0..-60.0),
        );
        let fire_countdown = rng.gen_range(MIN_FIRST_SHOT_DELAY..MAX_FIRST_SHOT_DELAY).floor() as i32;
        Self::at(id, ship_type, position, fire_countdown)
    }

    /// Place a unit at a known position with a known fire countdown.
    pub fn at(id: u32, ship_type: ShipType, position: DVec3, fire_countdown: i32) -> Self {
        EnemyUnit {
            id,
            ship_type,
            position,
            facing: (-position).normalize_or_zero(),
            shield_strength: ENEMY_INITIAL_SHIELDS,
            scale: 0.1,
            maneuver_type: ManeuverType::FullStop,
            maneuver: None,
            fly_in_frames: 0,
            fire_countdown,
        }
    }

    pub fn maneuver_type(&self) -> ManeuverType {
        self.maneuver_type
    }

    pub fn fire_countdown(&self) -> i32 {
        self.fire_countdown
    }

    pub fn is_flying_in(&self) -> bool {
        self.fly_in_frames < FLY_IN_FRAMES
    }

    /// Skip the fly-in grace period.
    pub fn finish_fly_in(&mut self) {
        self.fly_in_frames = FLY_IN_FRAMES;
        self.scale = 1.0;
    }

    /// Target of the current maneuver, if one is running.
    pub fn maneuver_target(&self) -> Option<DVec3> {
        self.maneuver.map(|m| m.target)
    }

    /// Per-frame AI step. Returns true if the unit wants to fire.
    pub fn update(&mut self, rng: &mut StdRng) -> bool {
        let wants_to_fire = self.step(rng);
        self.look_at_player();
        wants_to_fire
    }

    fn step(&mut self, rng: &mut StdRng) -> bool {
        if self.is_flying_in() {
            self.fly_in_frames += 1;
            let t = (self.fly_in_frames as f64 / FLY_IN_FRAMES as f64).min(1.0);
            self.scale = if t >= 1.0 { 1.0 } else { 0.1 + 0.9 * t };
            return false;
        }

        match self.maneuver_type {
            ManeuverType::FullStop => self.start_new_maneuver(rng),
            ManeuverType::Zig | ManeuverType::Zag => self.advance_maneuver(),
        }

        if self.fire_countdown <= 0 {
            self.fire_countdown =
                rng.gen_range(MIN_SHOOT_INTERVAL..MAX_SHOOT_INTERVAL).floor() as i32;
            true
        } else {
            self.fire_countdown -= 1;
            false
        }
    }

    /// Pick a new maneuver from the current position. Advances toward the
    /// player when far, backs off when close, and zig-zags across x = 0.
    fn start_new_maneuver(&mut self, rng: &mut StdRng) {
        let seconds: f64 = rng.gen_range(1.0..4.0);
        let y_delta = rng.gen_range(-30.0..30.0);

        let z_delta = if self.position.z < -20.0 {
            rng.gen_range(5.0..10.0)
        } else {
            rng.gen_range(-25.0..-10.0)
        };

        let x_delta = if self.position.x < 0.0 {
            self.maneuver_type = ManeuverType::Zig;
            rng.gen_range(20.0..40.0)
        } else {
            self.maneuver_type = ManeuverType::Zag;
            rng.gen_range(-40.0..-20.0)
        };

        self.maneuver = Some(Maneuver {
            start: self.position,
            target: self.position + DVec3::new(x_delta, y_delta, z_delta),
            progress: 0.0,
            duration: seconds * FRAME_RATE,
        });
    }

    fn advance_maneuver(&mut self) {
        let Some(m) = self.maneuver.as_mut() else {
            self.maneuver_type = ManeuverType::FullStop;
            return;
        };

        m.progress += 1.0;
        let t = (m.progress / m.duration).min(1.0);
        self.position = m.start.lerp(m.target, ease_in_out(t));

        if t >= 1.0 {
            self.maneuver = None;
            self.maneuver_type = ManeuverType::FullStop;
        }
    }

    fn look_at_player(&mut self) {
        self.facing = (-self.position).normalize_or_zero();
    }

    /// Rotate the unit (and any maneuver in flight) about the origin.
    pub fn rotate_about_origin(&mut self, rotation: DQuat) {
        self.position = rotation * self.position;
        if let Some(m) = self.maneuver.as_mut() {
            m.start = rotation * m.start;
            m.target = rotation * m.target;
        }
        self.look_at_player();
    }
}
