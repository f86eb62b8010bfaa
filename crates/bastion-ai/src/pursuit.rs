//! Pursuit behaviour.
//!
//! Pure functions that compute an enemy's steering, translation and fire
//! decision from its situation. No session dependency; operates on plain
//! data, so the simulation applies the result.

use glam::DVec2;

use bastion_core::constants::*;
use bastion_core::enums::EnemyArchetype;
use bastion_core::types::{bearing, heading_vector, turn_toward};

use crate::profiles::get_profile;

/// Input to the pursuit evaluation for a single enemy.
#[derive(Debug, Clone, Copy)]
pub struct PursuitContext {
    pub archetype: EnemyArchetype,
    pub position: DVec2,
    pub angle: f64,
    pub fire_cooldown: i32,
    /// Current position of the player's ship.
    pub target: DVec2,
}

/// A shot requested by the evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireOrder {
    /// Muzzle position, one hull radius ahead of the ship.
    pub origin: DVec2,
    /// Bearing to the target when the shot was taken.
    pub angle: f64,
}

/// Output from the pursuit evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuitUpdate {
    pub new_angle: f64,
    pub new_position: DVec2,
    pub new_fire_cooldown: i32,
    pub fire: Option<FireOrder>,
}

/// How an enemy translates this tick given its range to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maneuver {
    Close,
    Hold,
    BackOff,
}

/// Pick the translation band for a range.
pub fn maneuver_for_range(range: f64) -> Maneuver {
    if range > ENEMY_FAR_RANGE {
        Maneuver::Close
    } else if range < ENEMY_NEAR_RANGE {
        Maneuver::BackOff
    } else {
        Maneuver::Hold
    }
}

/// Evaluate one enemy for one tick.
pub fn evaluate(ctx: &PursuitContext) -> PursuitUpdate {
    let profile = get_profile(ctx.archetype);

    let range = ctx.position.distance(ctx.target);
    let target_angle = bearing(ctx.position, ctx.target);

    let new_angle = turn_toward(ctx.angle, target_angle, ENEMY_TURN_RATE);
    let forward = heading_vector(new_angle);

    let new_position = match maneuver_for_range(range) {
        Maneuver::Close => ctx.position + forward * profile.speed,
        Maneuver::BackOff => ctx.position - forward * profile.speed * ENEMY_RETREAT_FACTOR,
        Maneuver::Hold => ctx.position,
    };

    // Range for the fire check is taken before this tick's translation.
    let mut new_fire_cooldown = ctx.fire_cooldown.saturating_sub(1);
    let fire = if new_fire_cooldown <= 0 && range < ENEMY_FIRE_RANGE {
        new_fire_cooldown = profile.fire_interval;
        Some(FireOrder {
            origin: new_position + forward * profile.radius,
            angle: target_angle,
        })
    } else {
        None
    };

    PursuitUpdate {
        new_angle,
        new_position,
        new_fire_cooldown,
        fire,
    }
}
