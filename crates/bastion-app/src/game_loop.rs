//! Game loop thread: runs the simulation engine at a fixed rate.
//!
//! The engine is created inside this thread. Commands arrive via an
//! `mpsc` channel and each snapshot is stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use bastion_core::state::GameStateSnapshot;
use bastion_sim::SimulationEngine;

use crate::config::AppConfig;
use crate::demo;
use crate::error::AppError;
use crate::state::{AppState, GameLoopCommand};

/// Spawn the game loop thread and attach its command channel to `state`.
pub fn spawn_game_loop(config: &AppConfig, state: &AppState) -> Result<JoinHandle<()>, AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::clone(&state.latest_snapshot);
    let sim_config = config.sim_config();
    let tick_duration = config.tick_duration();
    let demo_pilot = config.demo_pilot;

    let handle = std::thread::Builder::new()
        .name("bastion-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(sim_config);
            run_game_loop(engine, cmd_rx, &latest_snapshot, tick_duration, demo_pilot);
        })
        .map_err(AppError::LoopSpawn)?;

    let mut tx = state
        .command_tx
        .lock()
        .map_err(|_| AppError::LoopDisconnected)?;
    *tx = Some(cmd_tx);
    info!("game loop running at {:?} per tick", tick_duration);
    Ok(handle)
}

/// Queue everything waiting on the channel. Returns false when the loop
/// should stop.
pub fn drain_commands(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    tick_duration: Duration,
    demo_pilot: bool,
) {
    let mut next_tick_time = Instant::now();
    let mut last_snapshot: Option<GameStateSnapshot> = None;

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            debug!("game loop stopping");
            return;
        }

        // 2. Autopilot reads the previous frame
        if demo_pilot {
            if let Some(previous) = &last_snapshot {
                engine.set_input(demo::autopilot(previous));
            }
        }

        // 3. Advance one tick (the engine handles pause semantics)
        let snapshot = engine.tick();

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        last_snapshot = Some(snapshot);

        // 5. Sleep until the next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
