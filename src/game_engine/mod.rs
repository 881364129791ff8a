//! Game state machine
//!
//! `GameEngine` is the simulation context. It owns the galaxy, the player
//! ship, the combat arena and the warp controller, advances them once per
//! `tick`, and decides when the game is over. There is no global state:
//! everything a frame touches hangs off this struct.

mod events;
mod snapshot;

pub use events::{FrameInput, GameEvent};
pub use snapshot::{EnemySnapshot, SceneSnapshot, StationSnapshot, TorpedoSnapshot};

use glam::DQuat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

use crate::models::constants::{ViewMode, STATION_REPAIR_DELAY, THRUST_AMOUNT};
use crate::models::galaxy::GalaxyMap;
use crate::models::position::SectorIndex;
use crate::models::ship::ShipState;
use crate::services::combat::CombatCoordinator;
use crate::services::commands::CompanionCommand;
use crate::services::navigation::{
    populate_sector, PopulationReport, SectorTransitionController, TransitionContext, WarpEvent,
    WarpPhase,
};
use crate::services::rank::{calculate_rank, EndCause};
use crate::services::troops::TroopMonitor;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum GameState {
    Playing,
    Over { cause: EndCause, rank: String },
}

/// A station repair waiting for its deadline.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RepairOrder {
    due_at: f64,
    sector: SectorIndex,
}

/// Core game engine that owns all simulation state
pub struct GameEngine {
    galaxy: GalaxyMap,
    ship: ShipState,
    combat: CombatCoordinator,
    warp: SectorTransitionController,
    troops: TroopMonitor,
    view_mode: ViewMode,
    difficulty: u32,
    clock: f64,
    frame: u64,
    rng: StdRng,
    paused: bool,
    state: GameState,
    pending_repair: Option<RepairOrder>,
    pending_events: Vec<GameEvent>,
}

impl GameEngine {
    /// Creates a new game with a procedurally generated galaxy
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed for every random decision in the game
    /// * `level` - Raw difficulty level; unrecognized values still generate
    ///   a galaxy from the fallback table and play at the nearest valid level
    pub fn new(seed: u64, level: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let galaxy = GalaxyMap::generate(level, &mut rng);
        Self::with_galaxy(galaxy, level, rng)
    }

    /// Start a game on an existing galaxy. The starting sector is populated
    /// immediately.
    pub fn with_galaxy(galaxy: GalaxyMap, level: u32, rng: StdRng) -> Self {
        let difficulty = level.clamp(1, 5);
        if difficulty != level {
            log::warn!("difficulty {} out of range, playing at {}", level, difficulty);
        }

        let mut engine = GameEngine {
            galaxy,
            ship: ShipState::new(),
            combat: CombatCoordinator::new(),
            warp: SectorTransitionController::new(),
            troops: TroopMonitor::new(difficulty),
            view_mode: ViewMode::Fore,
            difficulty,
            clock: 0.0,
            frame: 0,
            rng,
            paused: false,
            state: GameState::Playing,
            pending_repair: None,
            pending_events: Vec::new(),
        };

        let report = populate_sector(&mut engine.ship, &engine.galaxy, &mut engine.combat, &mut engine.rng);
        engine.on_populated(report);
        engine.pending_events.push(GameEvent::Warp(WarpEvent::Populated(report)));
        engine
    }

    // ========== Accessors ==========

    pub fn galaxy(&self) -> &GalaxyMap {
        &self.galaxy
    }

    pub fn ship(&self) -> &ShipState {
        &self.ship
    }

    /// Direct ship access for tools and tests. Ship state still changes
    /// only through its own methods.
    pub fn ship_mut(&mut self) -> &mut ShipState {
        &mut self.ship
    }

    pub fn combat(&self) -> &CombatCoordinator {
        &self.combat
    }

    pub fn troops(&self) -> &TroopMonitor {
        &self.troops
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Effective difficulty scalar (1-5).
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Simulation time in seconds.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn warp_phase(&self) -> WarpPhase {
        self.warp.phase()
    }

    /// True while a station repair is scheduled.
    pub fn repair_pending(&self) -> bool {
        self.pending_repair.is_some()
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Take the events produced by operations since the last tick.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ========== Frame update ==========

    /// Advance the simulation by one frame of `delta_seconds`.
    ///
    /// Order: warp deadlines, repair deadline, steering, ship energy,
    /// combat (skipped in warp), galaxy bookkeeping, troop monitor, end
    /// state. Does nothing once the game is over or while paused, apart
    /// from handing back queued events.
    pub fn tick(&mut self, delta_seconds: f64, input: FrameInput) -> Vec<GameEvent> {
        let mut events = self.drain_events();
        if self.is_over() || self.paused {
            return events;
        }

        self.clock += delta_seconds;
        self.frame += 1;

        self.advance_warp(&mut events);
        self.run_repair(&mut events);

        if !self.ship.is_in_warp() && !input.is_idle() {
            self.steer(input, delta_seconds);
        }

        self.ship.advance_one_frame(self.difficulty);

        let mut player_destroyed = false;
        if !self.ship.is_in_warp() {
            let frame = self
                .combat
                .update(&mut self.ship, self.difficulty, delta_seconds, &mut self.rng);
            if frame.sector_cleared() || frame.station_destroyed() {
                self.galaxy.clear_sector(self.ship.current_sector().index());
            }
            player_destroyed = frame.player_destroyed;
            events.extend(frame.events.into_iter().map(GameEvent::Combat));
        }

        if self.troops.update(&self.galaxy) && !self.troops.besieged_stations().is_empty() {
            events.push(GameEvent::StationsUnderSiege(self.troops.besieged_stations().to_vec()));
        }

        if let Some(cause) = self.end_cause(player_destroyed) {
            events.push(self.end_game(cause));
        }

        events
    }

    fn advance_warp(&mut self, events: &mut Vec<GameEvent>) {
        let ctx = TransitionContext {
            galaxy: &self.galaxy,
            ship: &mut self.ship,
            combat: &mut self.combat,
            view_mode: &mut self.view_mode,
            rng: &mut self.rng,
            difficulty: self.difficulty,
            game_over: self.state != GameState::Playing,
        };

        for event in self.warp.advance(ctx, self.clock) {
            if let WarpEvent::Populated(report) = event {
                self.on_populated(report);
            }
            events.push(GameEvent::Warp(event));
        }
    }

    fn on_populated(&mut self, report: PopulationReport) {
        self.pending_repair = report.station_spawned.then(|| RepairOrder {
            due_at: self.clock + STATION_REPAIR_DELAY,
            sector: report.sector,
        });
    }

    /// Apply a due repair if the ship is still parked at the same station.
    fn run_repair(&mut self, events: &mut Vec<GameEvent>) {
        let Some(order) = self.pending_repair else {
            return;
        };
        if self.clock < order.due_at {
            return;
        }
        self.pending_repair = None;

        if self.ship.is_in_warp()
            || self.ship.current_sector() != order.sector
            || self.combat.station().is_none()
        {
            log::debug!("Repair at {} abandoned", order.sector);
            return;
        }

        self.ship.repair_at_station();
        log::info!("Ship repaired at {}", order.sector);
        events.push(GameEvent::ShipRepaired { sector: order.sector });
    }

    fn steer(&mut self, input: FrameInput, delta_seconds: f64) {
        let step = THRUST_AMOUNT.to_radians() * delta_seconds;
        let rotation = DQuat::from_rotation_y(input.lateral * step)
            * DQuat::from_rotation_x(input.vertical * step);
        self.combat.rotate_about_origin(rotation);
    }

    fn end_cause(&self, player_destroyed: bool) -> Option<EndCause> {
        if player_destroyed {
            Some(EndCause::PlayerDestroyed)
        } else if self.ship.is_energy_depleted() {
            Some(EndCause::EnergyDepleted)
        } else if self.galaxy.starbase_count() == 0 {
            Some(EndCause::AllStationsDestroyed)
        } else if self.galaxy.current_occupied_count() == 0 {
            Some(EndCause::Victory)
        } else {
            None
        }
    }

    fn end_game(&mut self, cause: EndCause) -> GameEvent {
        let rank = calculate_rank(self.galaxy.occupied_ratio(), self.difficulty).to_string();
        log::info!("Game over: {} (rank {})", cause.message(), rank);
        self.state = GameState::Over {
            cause,
            rank: rank.clone(),
        };
        self.pending_repair = None;
        GameEvent::GameOver { cause, rank }
    }

    // ========== Player operations ==========

    /// Launch a torpedo from the current view. Refused from warp start until
    /// the new sector is populated, and at the live torpedo cap.
    pub fn fire_torpedo(&mut self) -> bool {
        if self.is_over() {
            return false;
        }

        let fired = !self.warp.is_busy()
            && self
                .combat
                .fire_zylon_torpedo(&mut self.ship, self.difficulty, self.view_mode);
        self.pending_events.push(if fired {
            GameEvent::TorpedoFired
        } else {
            GameEvent::TorpedoFireFailed
        });
        fired
    }

    /// Set speed 0-9. Ignored until an arrival has been populated.
    pub fn set_speed(&mut self, speed: u8) -> bool {
        if self.is_over() || self.warp.is_busy() {
            return false;
        }
        self.ship.set_speed(speed);
        true
    }

    /// Returns false if the shields could not be raised.
    pub fn toggle_shields(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.ship.toggle_shields()
    }

    /// Switch view. A warp always looks forward, so changes are ignored
    /// until it ends.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        if self.is_over() || self.ship.is_in_warp() {
            return false;
        }
        self.view_mode = mode;
        true
    }

    /// Pick the warp destination by 0-based index. Locked while a warp is
    /// in progress.
    pub fn set_target_sector(&mut self, index: usize) -> bool {
        match SectorIndex::new(index) {
            Some(sector) if !self.is_over() && !self.warp.is_busy() => {
                self.ship.set_target_sector(sector);
                true
            }
            Some(_) => false,
            None => {
                log::warn!("target sector {} outside the galaxy, ignored", index);
                false
            }
        }
    }

    /// Warp to the current target sector.
    pub fn initiate_warp(&mut self) -> bool {
        let ctx = TransitionContext {
            galaxy: &self.galaxy,
            ship: &mut self.ship,
            combat: &mut self.combat,
            view_mode: &mut self.view_mode,
            rng: &mut self.rng,
            difficulty: self.difficulty,
            game_over: self.state != GameState::Playing,
        };

        match self.warp.initiate_warp(ctx, self.clock) {
            Some(event) => {
                self.pending_repair = None;
                self.pending_events.push(GameEvent::Warp(event));
                true
            }
            None => false,
        }
    }

    pub fn warp_to(&mut self, index: usize) -> bool {
        self.set_target_sector(index) && self.initiate_warp()
    }

    /// Route a companion command onto the matching operation.
    pub fn execute(&mut self, command: CompanionCommand) -> bool {
        log::debug!("Companion command: {}", command);
        match command {
            CompanionCommand::Speed(speed) => self.set_speed(speed),
            CompanionCommand::Fire => self.fire_torpedo(),
            CompanionCommand::Shields => self.toggle_shields(),
            CompanionCommand::Fore => self.set_view_mode(ViewMode::Fore),
            CompanionCommand::Aft => self.set_view_mode(ViewMode::Aft),
            CompanionCommand::Grid(sector) => self.warp_to(sector),
            CompanionCommand::Abort | CompanionCommand::Attack | CompanionCommand::Tac => true,
        }
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("frame", &self.frame)
            .field("clock", &self.clock)
            .field("sector", &self.ship.current_sector())
            .field("difficulty", &self.difficulty)
            .field("galaxy", &self.galaxy)
            .field("combat", &self.combat)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::{SectorType, ShipType, GALAXY_SECTORS};
    use crate::models::sector_grid::SectorGrid;
    use crate::services::combat::CombatEvent;

    const DT: f64 = 1.0 / 60.0;

    /// Starbase at each index in `starbases`, one scout at each index in `enemies`.
    fn galaxy(starbases: &[usize], enemies: &[usize]) -> GalaxyMap {
        let mut sectors: Vec<SectorGrid> = (1..=GALAXY_SECTORS).map(SectorGrid::empty).collect();
        for &i in starbases {
            sectors[i].sector_type = SectorType::Starbase;
        }
        for &i in enemies {
            sectors[i].sector_type = SectorType::Enemy;
            sectors[i].number_of_objects = 1;
            sectors[i].enemy_types = Some(vec![ShipType::Scout]);
        }
        GalaxyMap::from_sectors(sectors)
    }

    fn engine(starbases: &[usize], enemies: &[usize], level: u32) -> GameEngine {
        GameEngine::with_galaxy(galaxy(starbases, enemies), level, StdRng::seed_from_u64(11))
    }

    fn run(engine: &mut GameEngine, frames: usize) -> Vec<GameEvent> {
        (0..frames)
            .flat_map(|_| engine.tick(DT, FrameInput::default()))
            .collect()
    }

    // ========== Start ==========

    #[test]
    fn starting_sector_is_populated() {
        let mut e = engine(&[0], &[64], 3);
        assert_eq!(e.combat().enemy_count(), 1);
        assert_eq!(e.ship().current_speed(), 2);
        let events = e.drain_events();
        assert!(matches!(events.as_slice(), [GameEvent::Warp(WarpEvent::Populated(_))]));
    }

    #[test]
    fn out_of_range_level_is_clamped() {
        assert_eq!(engine(&[0], &[5], 9).difficulty(), 5);
        assert_eq!(engine(&[0], &[5], 0).difficulty(), 1);
    }

    // ========== End states ==========

    #[test]
    fn empty_galaxy_is_immediate_victory() {
        let mut e = engine(&[0], &[], 3);
        let events = e.tick(DT, FrameInput::default());
        assert!(events.iter().any(|ev| matches!(
            ev,
            GameEvent::GameOver { cause: EndCause::Victory, rank } if rank == "ZYLON HERO"
        )));
        assert!(e.is_over());
    }

    #[test]
    fn energy_depletion_ends_game() {
        let mut e = engine(&[0], &[5], 3);
        e.ship_mut().drain_energy(20_000);
        e.tick(DT, FrameInput::default());
        assert!(matches!(
            e.state(),
            GameState::Over { cause: EndCause::EnergyDepleted, .. }
        ));
    }

    #[test]
    fn no_updates_after_game_over() {
        let mut e = engine(&[0], &[], 3);
        e.tick(DT, FrameInput::default());
        let frame = e.frame();
        assert!(e.tick(DT, FrameInput::default()).is_empty());
        assert_eq!(e.frame(), frame);
        assert!(!e.fire_torpedo());
        assert!(!e.warp_to(3));
    }

    #[test]
    fn pause_freezes_clock() {
        let mut e = engine(&[0], &[5], 3);
        e.pause();
        e.tick(DT, FrameInput::default());
        assert_eq!(e.clock(), 0.0);
        e.resume();
        e.tick(DT, FrameInput::default());
        assert!(e.clock() > 0.0);
    }

    // ========== Station ==========

    #[test]
    fn station_repairs_after_delay() {
        let mut e = engine(&[64], &[5], 3);
        e.ship_mut().drain_energy(5_000);
        let events = run(&mut e, 60 * 8 + 5);
        assert!(events
            .iter()
            .any(|ev| matches!(ev, GameEvent::ShipRepaired { sector } if sector.index() == 64)));
        assert!(e.ship().energy() > 9_900);
        assert!(!e.repair_pending());
    }

    #[test]
    fn destroying_last_station_loses_game() {
        let mut e = engine(&[64], &[5], 1);
        assert!(e.fire_torpedo());
        let events = run(&mut e, 60);
        assert!(events
            .iter()
            .any(|ev| matches!(ev, GameEvent::Combat(CombatEvent::StationDestroyed))));
        assert_eq!(e.galaxy().starbase_count(), 0);
        assert!(matches!(
            e.state(),
            GameState::Over { cause: EndCause::AllStationsDestroyed, .. }
        ));
    }

    #[test]
    fn destroyed_station_cancels_repair() {
        let mut e = engine(&[64, 0], &[5], 1);
        e.ship_mut().drain_energy(5_000);
        e.fire_torpedo();
        let events = run(&mut e, 60 * 9);
        assert!(!events.iter().any(|ev| matches!(ev, GameEvent::ShipRepaired { .. })));
        assert!(e.ship().energy() < 5_000);
    }

    // ========== Operations ==========

    #[test]
    fn view_is_forced_forward_by_warp() {
        let mut e = engine(&[0], &[68], 3);
        assert!(e.set_view_mode(ViewMode::Aft));
        assert!(e.initiate_warp());
        assert_eq!(e.view_mode(), ViewMode::Fore);
        assert!(!e.set_view_mode(ViewMode::Aft));
        assert!(!e.fire_torpedo());
    }

    #[test]
    fn commands_route_to_operations() {
        let mut e = engine(&[0], &[68], 3);
        assert!(e.execute(CompanionCommand::Speed(6)));
        assert_eq!(e.ship().current_speed(), 6);
        assert!(e.execute(CompanionCommand::Shields));
        assert!(e.ship().shields_up());
        assert!(e.execute(CompanionCommand::Aft));
        assert_eq!(e.view_mode(), ViewMode::Aft);
        assert!(e.execute(CompanionCommand::Tac));
        assert!(e.execute(CompanionCommand::Grid(68)));
        assert!(e.ship().is_in_warp());
    }

    #[test]
    fn target_locked_during_warp() {
        let mut e = engine(&[0], &[68], 3);
        assert!(e.initiate_warp());
        e.tick(1.0, FrameInput::default());

        assert!(!e.execute(CompanionCommand::Grid(5)));
        assert_eq!(e.ship().target_sector().index(), 68);

        for _ in 0..7 {
            e.tick(1.0, FrameInput::default());
        }
        assert_eq!(e.ship().current_sector().index(), 68);
        assert_eq!(e.warp_phase(), WarpPhase::Cruising);
    }

    #[test]
    fn fire_and_speed_refused_until_populated() {
        let mut e = engine(&[0], &[68], 3);
        assert!(e.initiate_warp());
        for _ in 0..6 {
            e.tick(1.0, FrameInput::default());
        }
        assert!(matches!(e.warp_phase(), WarpPhase::Arriving { .. }));

        let energy = e.ship().energy();
        let speed = e.ship().current_speed();
        assert!(!e.fire_torpedo());
        assert!(!e.set_speed(2));
        assert_eq!(e.ship().energy(), energy);
        assert_eq!(e.ship().current_speed(), speed);
        assert_eq!(e.combat().torpedoes().zylon_count(), 0);

        e.tick(1.0, FrameInput::default());
        assert_eq!(e.warp_phase(), WarpPhase::Cruising);
        assert!(e.set_speed(2));
        assert!(e.fire_torpedo());
    }

    #[test]
    fn bad_target_is_ignored() {
        let mut e = engine(&[0], &[68], 3);
        assert!(!e.set_target_sector(128));
        assert_eq!(e.ship().target_sector().index(), 68);
    }

    #[test]
    fn fire_events_are_queued() {
        let mut e = engine(&[0], &[68], 5);
        e.drain_events();
        assert!(e.fire_torpedo());
        assert!(!e.fire_torpedo());
        assert_eq!(
            e.drain_events(),
            vec![GameEvent::TorpedoFired, GameEvent::TorpedoFireFailed]
        );
    }

    #[test]
    fn steering_ignored_in_warp() {
        let mut e = engine(&[0], &[68], 3);
        e.initiate_warp();
        e.tick(DT, FrameInput::new(1.0, 1.0));
        assert!(e.combat().enemies().is_empty());
        assert!(e.ship().is_in_warp());
    }

    #[test]
    fn steering_rotates_sector_objects() {
        let mut e = engine(&[64], &[5], 3);
        let before = e.combat().station().map(|s| s.position).unwrap_or_default();
        e.tick(1.0, FrameInput::new(1.0, 0.0));
        let after = e.combat().station().map(|s| s.position).unwrap_or_default();
        assert!((before.length() - after.length()).abs() < 1e-9);
        assert!(after.x.abs() > 1.0);
    }
}
