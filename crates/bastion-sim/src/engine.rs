//! Simulation engine, the frame driver of the game.
//!
//! `SimulationEngine` owns the session, processes player commands, runs
//! all systems in a fixed order, and produces `GameStateSnapshot`s.
//! Completely headless, so a seed and an input script replay exactly.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bastion_core::commands::{InputSnapshot, PlayerCommand};
use bastion_core::constants::RESPAWN_DELAY_MS;
use bastion_core::enums::{GamePhase, RewardTrigger};
use bastion_core::state::GameStateSnapshot;
use bastion_core::types::SimTime;

use crate::clock::{Clock, DeferredTask, SystemClock};
use crate::session::Session;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Real time between the ship's destruction and its rebuild.
    pub respawn_delay: Duration,
    pub reward_trigger: RewardTrigger,
    /// Clock the respawn delay runs on.
    pub clock: Arc<dyn Clock>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            respawn_delay: Duration::from_millis(RESPAWN_DELAY_MS),
            reward_trigger: RewardTrigger::default(),
            clock: Arc::new(SystemClock::new()),
        }
    }
}

/// The simulation engine. Owns the session and all sim state.
pub struct SimulationEngine {
    session: Session,
    time: SimTime,
    phase: GamePhase,
    seed: u64,
    rng: ChaCha8Rng,
    input: InputSnapshot,
    command_queue: VecDeque<PlayerCommand>,
    reward_trigger: RewardTrigger,
    clock: Arc<dyn Clock>,
    respawn_delay: Duration,
    respawn: DeferredTask,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    /// The session is built immediately and waits on the title screen.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let session = world_setup::new_session(&mut rng, config.reward_trigger);
        Self {
            session,
            time: SimTime::default(),
            phase: GamePhase::default(),
            seed: config.seed,
            rng,
            input: InputSnapshot::default(),
            command_queue: VecDeque::new(),
            reward_trigger: config.reward_trigger,
            clock: config.clock,
            respawn_delay: config.respawn_delay,
            respawn: DeferredTask::default(),
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

    /// Replace the held input snapshot. Takes effect on the next tick.
    pub fn set_input(&mut self, input: InputSnapshot) {
        self.input = input;
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        // The respawn clock keeps running while paused.
        if self.respawn.poll(self.clock.now()) {
            systems::player::respawn(&mut self.session);
        }

        if self.phase == GamePhase::Active {
            self.time.advance();
            self.run_systems();
            if self.session.player_destroyed_this_tick() {
                self.respawn.schedule(self.clock.now(), self.respawn_delay);
                debug!("respawn scheduled in {:?}", self.respawn_delay);
            }
        }

        let events = std::mem::take(&mut self.session.events);
        systems::snapshot::build_snapshot(
            &self.session,
            &self.time,
            self.phase,
            self.input.turbo,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The input snapshot currently held.
    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }

    /// Whether a respawn is waiting on the clock.
    pub fn respawn_pending(&self) -> bool {
        self.respawn.is_pending()
    }

    /// Mutable session access (for tests).
    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Place an enemy at a fixed position (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        archetype: bastion_core::enums::EnemyArchetype,
        position: glam::DVec2,
    ) {
        self.session
            .enemies
            .push(world_setup::spawn_enemy(archetype, position, 0.0));
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
            PlayerCommand::StartMission => {
                if self.phase == GamePhase::Title {
                    self.session.narrate("> Ship ready for launch.");
                    self.session.narrate("> Captain, the station is in sight.");
                    self.phase = GamePhase::Active;
                    info!("session started (seed {})", self.seed);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::ResetSession => self.reset(),
            PlayerCommand::SetInput { input } => {
                self.input = input;
            }
        }
    }

    /// Throw the session away and return to the title screen.
    fn reset(&mut self) {
        if self.respawn.cancel() {
            debug!("pending respawn cancelled");
        }
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.session = world_setup::new_session(&mut self.rng, self.reward_trigger);
        self.time = SimTime::default();
        self.phase = GamePhase::Title;
        self.input = InputSnapshot::default();
        debug!("session reset");
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let tick = self.time.tick;
        // 1. Player ship
        systems::player::run(&mut self.session, &self.input, &mut self.rng, tick);
        // 2. Enemy pursuit and fire
        systems::enemy_ai::run(&mut self.session);
        // 3. Projectiles and hits
        systems::combat::run(&mut self.session, &mut self.rng);
        // 4. Effects
        systems::effects::run(&mut self.session);
        // 5. Asteroid drift, landmarks
        systems::obstacles::run(&mut self.session);
        // 6. Mission progression
        systems::mission::run(&mut self.session, &mut self.rng);
        // 7. Screen shake and camera
        systems::camera::decay_shake(&mut self.session);
        systems::camera::follow(&mut self.session);
    }
}
