//! Simulation engine: owns the world and drives every boomerang.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use boomerang_core::commands::PlayerCommand;
use boomerang_core::components::{Boomerang, FlightState, Thrower};
use boomerang_core::config::TuningConfig;
use boomerang_core::constants::{DT, PITCH_LIMIT_DEG};
use boomerang_core::enums::{FlightMode, GamePhase, TerminationCause};
use boomerang_core::error::ThrowRejected;
use boomerang_core::events::GameEvent;
use boomerang_core::state::GameStateSnapshot;
use boomerang_core::types::{AimRotation, SimTime};
use boomerang_flight::fsm;
use boomerang_flight::trajectory::TrajectoryParams;

use crate::ids;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::round::RoundState;
use crate::systems::sweep::CollisionScene;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub tuning: TuningConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: TuningConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    round: RoundState,
    tuning: TuningConfig,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    score: ScoreState,
    /// The thrower player commands act on.
    player: Option<Entity>,
}

impl SimulationEngine {
    /// Create a new engine with the arena built and the round in `Lobby`.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let player = world_setup::setup_round(&mut world, &config.tuning);
        Self {
            world,
            time: SimTime::default(),
            round: RoundState::default(),
            tuning: config.tuning,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
            player: Some(player),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one fixed tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.tick_with_dt(DT)
    }

    /// Advance by an arbitrary delta. Negative or non-finite deltas count as 0.
    pub fn tick_with_dt(&mut self, dt: f64) -> GameStateSnapshot {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        self.process_commands();
        self.run_systems(dt);
        self.time.advance_by(dt);
        trace!(tick = self.time.tick, dt, "tick");

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, &self.round, &self.score, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.round.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Seconds left on the round clock.
    pub fn round_remaining_secs(&self) -> f64 {
        self.round.remaining_secs
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn tuning(&self) -> &TuningConfig {
        &self.tuning
    }

    /// The thrower player commands act on, if it still exists.
    pub fn player(&self) -> Option<Entity> {
        self.player.filter(|e| self.world.contains(*e))
    }

    /// Add another thrower. It aims along +x until told otherwise.
    pub fn spawn_thrower(&mut self, position: DVec3) -> Entity {
        world_setup::spawn_thrower(&mut self.world, position)
    }

    /// Remove a thrower. Boomerangs it threw keep flying; their
    /// destruction no longer notifies anyone.
    pub fn remove_thrower(&mut self, thrower: Entity) -> bool {
        if self.world.get::<&Thrower>(thrower).is_err() {
            return false;
        }
        if self.player == Some(thrower) {
            self.player = None;
        }
        self.world.despawn(thrower).is_ok()
    }

    /// Place a target directly, outside the spawner.
    pub fn spawn_target_at(&mut self, position: DVec3) -> Entity {
        world_setup::spawn_target(&mut self.world, position, &self.tuning.spawner)
    }

    /// Add static box geometry.
    pub fn spawn_wall(&mut self, center: DVec3, half_extents: DVec3) -> Entity {
        world_setup::spawn_wall(&mut self.world, center, half_extents)
    }

    /// Set a thrower's aim. Pitch is clamped like `LookUp`.
    pub fn set_aim(&mut self, thrower: Entity, aim: AimRotation) -> bool {
        let Ok(mut state) = self.world.get::<&mut Thrower>(thrower) else {
            return false;
        };
        state.aim = AimRotation::new(
            aim.yaw_deg.rem_euclid(360.0),
            aim.pitch_deg.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG),
        );
        true
    }

    /// Throw along the thrower's path. Rejections are logged, reported as
    /// a `ThrowRejected` event and otherwise have no effect.
    pub fn throw(&mut self, thrower: Entity) -> Result<Entity, ThrowRejected> {
        let result = systems::throw::request_throw(
            &mut self.world,
            thrower,
            &self.tuning.flight,
            self.round.phase,
        );
        self.record_throw(thrower, result, FlightMode::FollowingPath)
    }

    /// Throw without a path, along `direction`.
    pub fn throw_direct(
        &mut self,
        thrower: Entity,
        direction: DVec3,
    ) -> Result<Entity, ThrowRejected> {
        let result = systems::throw::request_direct_throw(
            &mut self.world,
            thrower,
            direction,
            &self.tuning.flight,
            self.round.phase,
        );
        self.record_throw(thrower, result, FlightMode::PhysicsDriven)
    }

    /// Destroy a boomerang from outside the simulation. The thrower is
    /// notified immediately. Returns `false` for anything that is not a
    /// live boomerang.
    pub fn destroy_boomerang(&mut self, boomerang: Entity) -> bool {
        if self.world.get::<&Boomerang>(boomerang).is_err() {
            return false;
        }
        let Ok(mut state) = self.world.get::<&mut FlightState>(boomerang) else {
            return false;
        };
        fsm::terminate(&mut state, TerminationCause::External);
        drop(state);

        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.score,
            &mut self.events,
        );
        true
    }

    fn record_throw(
        &mut self,
        thrower: Entity,
        result: Result<Entity, ThrowRejected>,
        mode: FlightMode,
    ) -> Result<Entity, ThrowRejected> {
        let thrower_id = ids::actor_id(thrower);
        match result {
            Ok(boomerang) => {
                self.score.throws += 1;
                let boomerang_id = ids::actor_id(boomerang);
                info!(thrower = thrower_id.0, boomerang = boomerang_id.0, ?mode, "boomerang thrown");
                self.events.push(GameEvent::BoomerangThrown {
                    thrower: thrower_id,
                    boomerang: boomerang_id,
                    mode,
                });
            }
            Err(reason) => {
                debug!(thrower = thrower_id.0, %reason, "throw rejected");
                self.events.push(GameEvent::ThrowRejected {
                    thrower: thrower_id,
                    reason,
                });
            }
        }
        result
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Turn { degrees } => {
                if let Some(aim) = self.player_aim() {
                    self.update_player_aim(AimRotation::new(aim.yaw_deg + degrees, aim.pitch_deg));
                }
            }
            PlayerCommand::LookUp { degrees } => {
                if let Some(aim) = self.player_aim() {
                    self.update_player_aim(AimRotation::new(aim.yaw_deg, aim.pitch_deg + degrees));
                }
            }
            PlayerCommand::Throw => match self.player() {
                Some(player) => {
                    let _ = self.throw(player);
                }
                None => debug!("throw ignored: no player thrower"),
            },
            PlayerCommand::ThrowDirect { direction } => match self.player() {
                Some(player) => {
                    let _ = self.throw_direct(player, direction);
                }
                None => debug!("direct throw ignored: no player thrower"),
            },
            PlayerCommand::StartRound => {
                systems::round::start(&mut self.world, &mut self.round, &self.tuning, &mut self.events);
            }
            PlayerCommand::Restart => self.restart(),
        }
    }

    fn player_aim(&self) -> Option<AimRotation> {
        let player = self.player()?;
        self.world.get::<&Thrower>(player).ok().map(|t| t.aim)
    }

    fn update_player_aim(&mut self, aim: AimRotation) {
        if !(aim.yaw_deg.is_finite() && aim.pitch_deg.is_finite()) {
            return;
        }
        if let Some(player) = self.player() {
            self.set_aim(player, aim);
        }
    }

    /// Tear the world down and start a fresh round.
    fn restart(&mut self) {
        // Despawn one by one: `World::clear` resets generations, which would
        // let old actor ids resolve to new actors.
        let entities: Vec<Entity> = self.world.query::<()>().iter().map(|(e, ())| e).collect();
        for entity in entities {
            let _ = self.world.despawn(entity);
        }
        self.despawn_buffer.clear();
        self.player = Some(world_setup::setup_round(&mut self.world, &self.tuning));
        self.score = ScoreState::default();
        self.round = RoundState::default();
        info!("world rebuilt");
        systems::round::start(&mut self.world, &mut self.round, &self.tuning, &mut self.events);
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Round clock
        systems::round::run(
            &mut self.world,
            &mut self.round,
            &self.tuning,
            &self.score,
            dt,
            &mut self.events,
        );
        if self.round.phase == GamePhase::Active {
            // 2. Target spawner
            systems::spawner::run(
                &mut self.world,
                &mut self.rng,
                &self.tuning.spawner,
                dt,
                &mut self.events,
            );
            // 3. Target lifetimes
            systems::targets::run(&mut self.world, dt, &mut self.score, &mut self.events);
        }
        // 4. Trajectory preview
        systems::preview::run(&mut self.world, &TrajectoryParams::from(&self.tuning.flight));

        let scene = CollisionScene::gather(&self.world);
        // 5. Flight (path following, settling grace, spin)
        let settled = systems::flight::run(
            &mut self.world,
            &scene,
            &self.tuning.flight,
            self.tuning.scoring.score_award,
            dt,
            &mut self.score,
            &mut self.events,
        );
        // 6. Passive physics
        systems::physics::run(
            &mut self.world,
            &scene,
            &settled,
            &self.tuning.flight,
            &self.tuning.world,
            self.tuning.scoring.score_award,
            dt,
            &mut self.score,
            &mut self.events,
        );
        // 7. Cleanup (despawn + ownership notification)
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.score,
            &mut self.events,
        );
    }
}
