//! Events and narration emitted by the simulation.

use std::collections::VecDeque;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::LOG_CAPACITY;
use crate::enums::EnemyArchetype;

/// Discrete things that happened during a tick, for sound and effect hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An enemy was destroyed and its score awarded.
    EnemyDestroyed {
        archetype: EnemyArchetype,
        position: DVec2,
        score: u64,
    },
    /// The player's ship was destroyed.
    PlayerDestroyed { position: DVec2 },
    /// The player's ship was rebuilt.
    PlayerRespawned,
    /// A mission wave entered the field.
    WaveLaunched { phase: u32, enemies: u32 },
    /// A cleared wave paid its reward.
    WaveCleared { phase: u32, reward: u64 },
}

/// Short narration lines shown in the HUD. Oldest lines fall off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionLog {
    entries: VecDeque<String>,
    /// Lines pushed over the log's lifetime, including dropped ones.
    #[serde(default)]
    total: u64,
}

impl Default for MissionLog {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(LOG_CAPACITY + 1),
            total: 0,
        }
    }
}

impl MissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, dropping the oldest past capacity.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_back(line.into());
        self.total += 1;
        while self.entries.len() > LOG_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lines ever pushed.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}
