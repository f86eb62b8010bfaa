//! Host-side failures. Gameplay never produces these.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to spawn game loop thread: {0}")]
    LoopSpawn(#[source] std::io::Error),
    #[error("game loop is not running")]
    LoopNotRunning,
    #[error("game loop disconnected")]
    LoopDisconnected,
    #[error("game loop thread panicked")]
    LoopPanicked,
}
