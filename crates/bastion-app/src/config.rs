//! Runtime configuration loaded from `bastion.toml`.
//!
//! Every field has a default, so a file only needs the keys it wants to
//! change. A missing default file is not an error; the compiled defaults
//! apply.

use std::path::Path;
use std::time::Duration;

use log::info;
use serde::Deserialize;

use bastion_core::constants::{RESPAWN_DELAY_MS, TICK_RATE};
use bastion_core::enums::RewardTrigger;
use bastion_sim::SimConfig;

use crate::error::AppError;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "bastion.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// RNG seed for the session.
    pub seed: u64,
    /// Ticks per second the loop aims for.
    pub tick_rate: u32,
    /// How long the host runs before shutting down. Zero or less runs forever.
    pub run_seconds: f64,
    pub respawn_delay_ms: u64,
    pub reward_trigger: RewardTrigger,
    /// Fly the ship with the built-in autopilot.
    pub demo_pilot: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            run_seconds: 30.0,
            respawn_delay_ms: RESPAWN_DELAY_MS,
            reward_trigger: RewardTrigger::default(),
            demo_pilot: true,
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file that must exist.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            Self::load(path)
        } else {
            info!("no {} found; using compiled defaults", path.display());
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.tick_rate == 0 {
            return Err(AppError::InvalidConfig("tick_rate must be positive".into()));
        }
        if !self.run_seconds.is_finite() {
            return Err(AppError::InvalidConfig("run_seconds must be finite".into()));
        }
        if self.run_seconds > 0.0 && Duration::try_from_secs_f64(self.run_seconds).is_err() {
            return Err(AppError::InvalidConfig(format!(
                "run_seconds {} is out of range",
                self.run_seconds
            )));
        }
        Ok(())
    }

    /// Wall time budget for one tick.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_rate.max(1)))
    }

    /// How long to run, or `None` to run until shut down.
    pub fn run_time(&self) -> Option<Duration> {
        if self.run_seconds > 0.0 {
            Duration::try_from_secs_f64(self.run_seconds).ok()
        } else {
            None
        }
    }

    /// Engine configuration on the wall clock.
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            respawn_delay: Duration::from_millis(self.respawn_delay_ms),
            reward_trigger: self.reward_trigger,
            ..Default::default()
        }
    }
}
