//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype. Stats live in the profile table in `bastion-ai`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Fast, fragile attack ship.
    Raider,
    /// Slower line ship.
    Cruiser,
    /// Rapid-firing warship.
    Marauder,
    /// Heavily armored capital ship.
    Dreadnought,
}

impl EnemyArchetype {
    pub const ALL: [EnemyArchetype; 4] = [
        EnemyArchetype::Raider,
        EnemyArchetype::Cruiser,
        EnemyArchetype::Marauder,
        EnemyArchetype::Dreadnought,
    ];
}

/// Which side fired a projectile, and therefore what it can hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    #[default]
    Friendly,
    Hostile,
}

/// Projectile type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Fast, light energy bolt.
    Phaser,
    /// Slow, heavy warhead with limited ammunition.
    Torpedo,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen: world exists but nothing advances.
    #[default]
    Title,
    Active,
    Paused,
}

/// How the Mission Director decides that a cleared wave earns its reward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardTrigger {
    /// Reward when the idle timer reads exactly 1 and a wave has been launched.
    #[default]
    ExactIdleTick,
    /// Reward once per wave on the first tick the enemy store is seen empty.
    ClearEdge,
}
