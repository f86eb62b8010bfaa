//! Entity records held in the session stores.
//!
//! These are plain data. Game logic lives in the simulation systems.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::Rgb;

/// One engine trail sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub position: DVec2,
    pub life: u32,
    pub max_life: u32,
}

/// The player's ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerShip {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Facing angle (radians).
    pub angle: f64,
    /// Speed after the last integration step (derived).
    pub speed: f64,
    pub hull: f64,
    pub shields: f64,
    pub shields_active: bool,
    pub shield_cooldown: i32,
    pub phaser_cooldown: i32,
    pub torpedo_cooldown: i32,
    pub torpedoes: u32,
    /// Recent engine samples (oldest first).
    pub engine_trail: Vec<TrailPoint>,
}

impl Default for PlayerShip {
    fn default() -> Self {
        Self {
            position: DVec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            velocity: DVec2::ZERO,
            angle: PLAYER_SPAWN_ANGLE,
            speed: 0.0,
            hull: PLAYER_MAX_HULL,
            shields: PLAYER_MAX_SHIELDS,
            shields_active: false,
            shield_cooldown: 0,
            phaser_cooldown: 0,
            torpedo_cooldown: 0,
            torpedoes: PLAYER_MAX_TORPEDOES,
            engine_trail: Vec::new(),
        }
    }
}

impl PlayerShip {
    /// A ship with zero hull is wrecked and waiting for its respawn.
    pub fn is_destroyed(&self) -> bool {
        self.hull <= 0.0
    }
}

/// A live enemy ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub archetype: EnemyArchetype,
    pub position: DVec2,
    pub angle: f64,
    pub hull: f64,
    pub fire_cooldown: i32,
}

/// A phaser bolt or torpedo in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub position: DVec2,
    /// Travel angle (radians).
    pub angle: f64,
    /// Distance travelled per tick.
    pub speed: f64,
    /// Remaining lifetime in ticks.
    pub life: u32,
    pub damage: f64,
    pub faction: Faction,
}

impl Projectile {
    pub fn is_friendly(&self) -> bool {
        self.faction == Faction::Friendly
    }
}

/// Expanding fireball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub position: DVec2,
    pub life: u32,
    pub max_life: u32,
    pub size: f64,
}

/// Drifting spark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub life: u32,
    pub max_life: u32,
    pub size: f64,
    pub color: Rgb,
}

/// Outline vertex of an asteroid, in polar form around its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlineVertex {
    pub angle: f64,
    pub radius: f64,
}

/// Indestructible drifting rock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub position: DVec2,
    pub velocity: DVec2,
    pub rotation: f64,
    pub rotation_speed: f64,
    /// Collision radius. The outline is cosmetic.
    pub radius: f64,
    pub outline: Vec<OutlineVertex>,
}

/// The space station the player defends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub position: DVec2,
    pub rotation: f64,
}

/// Cosmetic landmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wormhole {
    pub position: DVec2,
    pub radius: f64,
    pub pulse_phase: f64,
}

impl Default for Wormhole {
    fn default() -> Self {
        Self {
            position: DVec2::new(WORMHOLE_X, WORMHOLE_Y),
            radius: WORMHOLE_RADIUS,
            pulse_phase: 0.0,
        }
    }
}
