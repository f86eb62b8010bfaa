//! Archetype-specific stat profiles.
//!
//! Behaviour is shared across archetypes; only these constants differ.

use bastion_core::enums::EnemyArchetype;
use bastion_core::types::Rgb;

/// Static profile for an enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeProfile {
    /// Display name used in the log and name tags.
    pub name: &'static str,
    pub color: Rgb,
    /// Hull on spawn.
    pub max_hull: f64,
    /// Forward speed (units per tick).
    pub speed: f64,
    /// Ticks between shots.
    pub fire_interval: i32,
    /// Score awarded on destruction.
    pub score: u64,
    /// Collision radius; also the muzzle offset.
    pub radius: f64,
}

const RAIDER: ArchetypeProfile = ArchetypeProfile {
    name: "Raider",
    color: Rgb::new(153, 51, 255),
    max_hull: 40.0,
    speed: 2.5,
    fire_interval: 120,
    score: 100,
    radius: 14.0,
};

const CRUISER: ArchetypeProfile = ArchetypeProfile {
    name: "Cruiser",
    color: Rgb::new(204, 170, 0),
    max_hull: 50.0,
    speed: 2.0,
    fire_interval: 150,
    score: 80,
    radius: 16.0,
};

const MARAUDER: ArchetypeProfile = ArchetypeProfile {
    name: "Marauder",
    color: Rgb::new(0, 204, 204),
    max_hull: 60.0,
    speed: 1.8,
    fire_interval: 100,
    score: 120,
    radius: 15.0,
};

const DREADNOUGHT: ArchetypeProfile = ArchetypeProfile {
    name: "Dreadnought",
    color: Rgb::new(0, 255, 0),
    max_hull: 150.0,
    speed: 1.5,
    fire_interval: 80,
    score: 300,
    radius: 22.0,
};

/// Get the profile for a given archetype.
pub fn get_profile(archetype: EnemyArchetype) -> &'static ArchetypeProfile {
    match archetype {
        EnemyArchetype::Raider => &RAIDER,
        EnemyArchetype::Cruiser => &CRUISER,
        EnemyArchetype::Marauder => &MARAUDER,
        EnemyArchetype::Dreadnought => &DREADNOUGHT,
    }
}
