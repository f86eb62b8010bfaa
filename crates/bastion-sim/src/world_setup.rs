//! Spawn factories for building a session and populating it.
//!
//! All randomness flows through the session RNG so a seed reproduces the
//! same field, the same waves and the same debris.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bastion_core::constants::*;
use bastion_core::entities::*;
use bastion_core::enums::{EnemyArchetype, RewardTrigger};
use bastion_core::events::MissionLog;
use bastion_core::types::heading_vector;

use bastion_ai::profiles::get_profile;

use crate::mission::MissionDirector;
use crate::session::Session;

/// Build a fresh session: player at the spawn point, station, wormhole
/// and a generated asteroid field. No enemies until the first wave.
pub fn new_session(rng: &mut ChaCha8Rng, reward_trigger: RewardTrigger) -> Session {
    let mut log = MissionLog::new();
    log.push("> Station in sight...");

    Session {
        player: PlayerShip::default(),
        enemies: Vec::new(),
        phasers: Vec::new(),
        torpedoes: Vec::new(),
        explosions: Vec::new(),
        particles: Vec::new(),
        asteroids: generate_asteroids(rng, ASTEROID_COUNT),
        station: Station::default(),
        wormhole: Wormhole::default(),
        camera: DVec2::ZERO,
        screen_shake: 0.0,
        score: 0,
        log,
        director: MissionDirector::new(reward_trigger),
        events: Vec::new(),
    }
}

/// Scatter `count` asteroids in a ring around the origin.
pub fn generate_asteroids(rng: &mut ChaCha8Rng, count: usize) -> Vec<Asteroid> {
    (0..count).map(|_| generate_asteroid(rng)).collect()
}

fn generate_asteroid(rng: &mut ChaCha8Rng) -> Asteroid {
    let bearing: f64 = rng.gen_range(0.0..TAU);
    let distance = ASTEROID_MIN_DIST + rng.gen_range(0.0..ASTEROID_DIST_SPREAD);
    let radius = ASTEROID_MIN_RADIUS + rng.gen_range(0.0..ASTEROID_RADIUS_SPREAD);

    let vertices = rng.gen_range(ASTEROID_MIN_VERTICES..=ASTEROID_MAX_VERTICES);
    let outline = (0..vertices)
        .map(|i| OutlineVertex {
            angle: i as f64 / vertices as f64 * TAU,
            radius: radius * rng.gen_range(0.7..1.0),
        })
        .collect();

    Asteroid {
        position: heading_vector(bearing) * distance,
        velocity: DVec2::new(
            rng.gen_range(-ASTEROID_MAX_DRIFT..ASTEROID_MAX_DRIFT),
            rng.gen_range(-ASTEROID_MAX_DRIFT..ASTEROID_MAX_DRIFT),
        ),
        rotation: rng.gen_range(0.0..TAU),
        rotation_speed: rng.gen_range(-ASTEROID_MAX_SPIN..ASTEROID_MAX_SPIN),
        radius,
        outline,
    }
}

/// Spawn `count` enemies of one archetype around `anchor` (the player).
///
/// Each lands at a random bearing, 1200 to 1700 units out, with a random
/// facing, full hull and a full fire cooldown.
pub fn spawn_enemy_group(
    enemies: &mut Vec<Enemy>,
    rng: &mut ChaCha8Rng,
    archetype: EnemyArchetype,
    count: u32,
    anchor: DVec2,
) {
    for _ in 0..count {
        let bearing: f64 = rng.gen_range(0.0..TAU);
        let distance = WAVE_SPAWN_MIN_DIST + rng.gen_range(0.0..WAVE_SPAWN_DIST_SPREAD);
        let facing: f64 = rng.gen_range(0.0..TAU);
        enemies.push(spawn_enemy(
            archetype,
            anchor + heading_vector(bearing) * distance,
            facing,
        ));
    }
}

/// A full-strength enemy at `position`.
pub fn spawn_enemy(archetype: EnemyArchetype, position: DVec2, angle: f64) -> Enemy {
    let profile = get_profile(archetype);
    Enemy {
        archetype,
        position,
        angle,
        hull: profile.max_hull,
        fire_cooldown: profile.fire_interval,
    }
}
