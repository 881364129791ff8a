//! Warp transition state machine.
//!
//! Phases resolve on deadlines measured against the simulation clock, so
//! the whole sequence is deterministic under test. Every continuation
//! checks for game over before touching any state.

use rand::rngs::StdRng;
use rand::Rng;

use crate::models::constants::{
    ViewMode, GALAXY_SECTORS, MAX_SPEED, POST_WARP_POPULATE_DELAY, WARP_DURATION,
};
use crate::models::difficulty::effective_scalar;
use crate::models::galaxy::GalaxyMap;
use crate::models::position::SectorIndex;
use crate::models::ship::ShipState;
use crate::services::combat::CombatCoordinator;

use super::population::{populate_sector, PopulationReport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WarpPhase {
    Cruising,
    /// In hyperspace toward `target` until `resolves_at`.
    Warping {
        target: SectorIndex,
        resolves_at: f64,
        pre_warp_speed: u8,
    },
    /// Arrived; the sector is populated at `populate_at`.
    Arriving { populate_at: f64 },
}

/// Something the warp sequence did.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum WarpEvent {
    Initiated {
        from: SectorIndex,
        to: SectorIndex,
        energy_cost: i32,
    },
    Arrived {
        sector: SectorIndex,
        next_target: SectorIndex,
    },
    Populated(PopulationReport),
}

/// Borrowed view of everything a warp step touches.
pub struct TransitionContext<'a> {
    pub galaxy: &'a GalaxyMap,
    pub ship: &'a mut ShipState,
    pub combat: &'a mut CombatCoordinator,
    pub view_mode: &'a mut ViewMode,
    pub rng: &'a mut StdRng,
    pub difficulty: u32,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct SectorTransitionController {
    phase: WarpPhase,
}

impl Default for SectorTransitionController {
    fn default() -> Self {
        Self::new()
    }
}

/// Energy spent warping between two sectors.
pub fn warp_cost(from: SectorIndex, to: SectorIndex, difficulty: u32) -> i32 {
    (from.distance(to) as u32 * effective_scalar(difficulty)) as i32
}

impl SectorTransitionController {
    pub fn new() -> Self {
        SectorTransitionController {
            phase: WarpPhase::Cruising,
        }
    }

    pub fn phase(&self) -> WarpPhase {
        self.phase
    }

    pub fn is_warping(&self) -> bool {
        matches!(self.phase, WarpPhase::Warping { .. })
    }

    /// True from warp start until the new sector is populated.
    pub fn is_busy(&self) -> bool {
        self.phase != WarpPhase::Cruising
    }

    /// Start a warp to the ship's target sector. Returns `None` (and does
    /// nothing) when already in transit, when the game is over, or when the
    /// target is the current sector.
    pub fn initiate_warp(&mut self, ctx: TransitionContext<'_>, now: f64) -> Option<WarpEvent> {
        if self.is_busy() || ctx.game_over {
            return None;
        }

        let from = ctx.ship.current_sector();
        let to = ctx.ship.target_sector();
        if from == to {
            return None;
        }

        let pre_warp_speed = ctx.ship.current_speed();
        let energy_cost = warp_cost(from, to, ctx.difficulty);
        ctx.ship.drain_energy(energy_cost);
        ctx.ship.set_in_warp(true);
        ctx.combat.clear_sector();
        *ctx.view_mode = ViewMode::Fore;
        ctx.ship.set_speed(MAX_SPEED);

        self.phase = WarpPhase::Warping {
            target: to,
            resolves_at: now + WARP_DURATION,
            pre_warp_speed,
        };
        log::info!("Warp initiated: {} -> {} (cost {})", from, to, energy_cost);

        Some(WarpEvent::Initiated {
            from,
            to,
            energy_cost,
        })
    }

    /// Resolve every deadline that has passed by `now`. A large step can
    /// resolve arrival and population together.
    pub fn advance(&mut self, ctx: TransitionContext<'_>, now: f64) -> Vec<WarpEvent> {
        let mut events = Vec::new();

        loop {
            if ctx.game_over {
                if self.is_busy() {
                    log::debug!("Pending warp continuation dropped: game over");
                }
                return events;
            }

            match self.phase {
                WarpPhase::Warping {
                    target: sector,
                    resolves_at,
                    pre_warp_speed,
                } if now >= resolves_at => {
                    ctx.ship.set_speed(pre_warp_speed);
                    ctx.ship.set_in_warp(false);
                    ctx.ship.set_current_sector(sector);

                    let next_target =
                        SectorIndex::new(ctx.rng.gen_range(0..GALAXY_SECTORS)).unwrap_or(sector);
                    ctx.ship.set_target_sector(next_target);

                    self.phase = WarpPhase::Arriving {
                        populate_at: resolves_at + POST_WARP_POPULATE_DELAY,
                    };
                    log::info!("Warp arrived at {}; next target {}", sector, next_target);
                    events.push(WarpEvent::Arrived {
                        sector,
                        next_target,
                    });
                }
                WarpPhase::Arriving { populate_at } if now >= populate_at => {
                    self.phase = WarpPhase::Cruising;
                    let report = populate_sector(ctx.ship, ctx.galaxy, ctx.combat, ctx.rng);
                    events.push(WarpEvent::Populated(report));
                }
                _ => return events,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::{SectorType, ShipType};
    use crate::models::sector_grid::SectorGrid;
    use rand::SeedableRng;

    struct Fixture {
        galaxy: GalaxyMap,
        ship: ShipState,
        combat: CombatCoordinator,
        view: ViewMode,
        rng: StdRng,
        game_over: bool,
    }

    impl Fixture {
        fn new() -> Self {
            let mut sectors: Vec<SectorGrid> = (1..=GALAXY_SECTORS).map(SectorGrid::empty).collect();
            sectors[68].sector_type = SectorType::Enemy;
            sectors[68].number_of_objects = 1;
            sectors[68].enemy_types = Some(vec![ShipType::Scout]);
            Fixture {
                galaxy: GalaxyMap::from_sectors(sectors),
                ship: ShipState::new(),
                combat: CombatCoordinator::new(),
                view: ViewMode::Aft,
                rng: StdRng::seed_from_u64(3),
                game_over: false,
            }
        }

        fn ctx(&mut self) -> TransitionContext<'_> {
            TransitionContext {
                galaxy: &self.galaxy,
                ship: &mut self.ship,
                combat: &mut self.combat,
                view_mode: &mut self.view,
                rng: &mut self.rng,
                difficulty: 3,
                game_over: self.game_over,
            }
        }
    }

    #[test]
    fn initiate_charges_energy_and_enters_warp() {
        let mut f = Fixture::new();
        let mut warp = SectorTransitionController::new();
        f.ship.set_speed(4);

        let event = warp.initiate_warp(f.ctx(), 0.0);
        assert!(matches!(event, Some(WarpEvent::Initiated { energy_cost: 12, .. })));
        assert_eq!(f.ship.energy(), 10_000 - 12);
        assert!(f.ship.is_in_warp());
        assert_eq!(f.ship.current_speed(), 9);
        assert_eq!(f.view, ViewMode::Fore);
        assert!(warp.is_warping());
    }

    #[test]
    fn warp_to_current_sector_is_ignored() {
        let mut f = Fixture::new();
        let here = f.ship.current_sector();
        f.ship.set_target_sector(here);
        let mut warp = SectorTransitionController::new();
        assert!(warp.initiate_warp(f.ctx(), 0.0).is_none());
        assert_eq!(f.ship.energy(), 10_000);
    }

    #[test]
    fn second_initiate_is_ignored() {
        let mut f = Fixture::new();
        let mut warp = SectorTransitionController::new();
        warp.initiate_warp(f.ctx(), 0.0);
        assert!(warp.initiate_warp(f.ctx(), 1.0).is_none());
        assert_eq!(f.ship.energy(), 10_000 - 12);
    }

    #[test]
    fn arrival_then_population_on_deadlines() {
        let mut f = Fixture::new();
        let mut warp = SectorTransitionController::new();
        f.ship.set_speed(4);
        warp.initiate_warp(f.ctx(), 0.0);

        assert!(warp.advance(f.ctx(), 5.9).is_empty());

        let events = warp.advance(f.ctx(), 6.0);
        assert!(matches!(events.as_slice(), [WarpEvent::Arrived { .. }]));
        assert_eq!(f.ship.current_sector().index(), 68);
        assert!(!f.ship.is_in_warp());
        assert_eq!(f.ship.current_speed(), 4);
        assert_eq!(f.combat.enemy_count(), 0);

        assert!(warp.advance(f.ctx(), 6.5).is_empty());
        let events = warp.advance(f.ctx(), 7.0);
        assert!(matches!(events.as_slice(), [WarpEvent::Populated(r)] if r.enemies_spawned == 1));
        assert_eq!(f.combat.enemy_count(), 1);
        assert_eq!(warp.phase(), WarpPhase::Cruising);
    }

    #[test]
    fn arrival_uses_target_captured_at_initiation() {
        let mut f = Fixture::new();
        let mut warp = SectorTransitionController::new();
        warp.initiate_warp(f.ctx(), 0.0);
        f.ship.set_target_sector(SectorIndex::new(5).unwrap());

        let events = warp.advance(f.ctx(), 6.0);
        assert!(matches!(
            events.as_slice(),
            [WarpEvent::Arrived { sector, .. }] if sector.index() == 68
        ));
        assert_eq!(f.ship.current_sector().index(), 68);
    }

    #[test]
    fn large_step_resolves_both_phases() {
        let mut f = Fixture::new();
        let mut warp = SectorTransitionController::new();
        warp.initiate_warp(f.ctx(), 10.0);
        let events = warp.advance(f.ctx(), 30.0);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn game_over_blocks_continuation() {
        let mut f = Fixture::new();
        let mut warp = SectorTransitionController::new();
        warp.initiate_warp(f.ctx(), 0.0);
        f.game_over = true;
        assert!(warp.advance(f.ctx(), 10.0).is_empty());
        assert_eq!(f.ship.current_sector().index(), 64);
    }

    #[test]
    fn cost_scales_with_distance_and_difficulty() {
        let a = SectorIndex::new(64).unwrap();
        let b = SectorIndex::new(127).unwrap();
        assert_eq!(warp_cost(a, b, 3), 189);
        assert_eq!(warp_cost(b, a, 1), 63);
    }
}
