//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use bastion_core::commands::PlayerCommand;
use bastion_core::state::GameStateSnapshot;

use crate::error::AppError;

/// Messages from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// The sender sits behind a `Mutex` so the state can be shared across
/// threads; the latest snapshot is shared with the game loop via `Arc`.
pub struct AppState {
    /// `None` until the game loop has been spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a game loop is attached.
    pub fn is_running(&self) -> bool {
        self.command_tx
            .lock()
            .map(|tx| tx.is_some())
            .unwrap_or(false)
    }

    /// Forward a player command to the game loop.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        let guard = self
            .command_tx
            .lock()
            .map_err(|_| AppError::LoopDisconnected)?;
        let tx = guard.as_ref().ok_or(AppError::LoopNotRunning)?;
        tx.send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::LoopDisconnected)
    }

    /// Copy of the most recent snapshot, if the loop has ticked yet.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|snapshot| snapshot.clone())
    }

    /// Ask the game loop to stop and detach from it.
    pub fn shutdown(&self) {
        let tx = match self.command_tx.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        if let Some(tx) = tx {
            // A loop that already exited has dropped its receiver.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
    }
}

/// Trailing lines of `log` written after `printed_total` lines had been seen.
///
/// `log_total` is the log's lifetime line count. A total that went
/// backwards means the session was rebuilt, so the whole window is new.
pub fn new_log_lines(printed_total: u64, log_total: u64, log: &[String]) -> &[String] {
    if log_total < printed_total {
        return log;
    }
    let fresh = usize::try_from(log_total - printed_total).unwrap_or(usize::MAX);
    &log[log.len().saturating_sub(fresh)..]
}
