//! Cosmetic effects: explosions and particles.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bastion_core::constants::*;
use bastion_core::entities::{Explosion, Particle};
use bastion_core::types::{heading_vector, Rgb};

use crate::session::Session;

/// Burst `count` particles outward from `position` in random directions.
pub fn spawn_particles(
    particles: &mut Vec<Particle>,
    rng: &mut ChaCha8Rng,
    position: DVec2,
    count: usize,
    color: Rgb,
) {
    for _ in 0..count {
        let direction: f64 = rng.gen_range(0.0..TAU);
        let speed = PARTICLE_MIN_SPEED + rng.gen_range(0.0..PARTICLE_SPEED_SPREAD);
        particles.push(Particle {
            position,
            velocity: heading_vector(direction) * speed,
            life: PARTICLE_MIN_LIFE + rng.gen_range(0..PARTICLE_LIFE_SPREAD),
            max_life: PARTICLE_MAX_LIFE,
            size: PARTICLE_MIN_SIZE + rng.gen_range(0.0..PARTICLE_SIZE_SPREAD),
            color,
        });
    }
}

/// Add an explosion of the given `(life, size)`.
pub fn spawn_explosion(explosions: &mut Vec<Explosion>, position: DVec2, (life, size): (u32, f64)) {
    explosions.push(Explosion {
        position,
        life,
        max_life: life,
        size,
    });
}

/// Age explosions, integrate particles, and drop whatever has burnt out.
pub fn run(session: &mut Session) {
    session.explosions.retain_mut(|e| {
        e.life = e.life.saturating_sub(1);
        e.life > 0
    });

    session.particles.retain_mut(|p| {
        p.position += p.velocity;
        p.life = p.life.saturating_sub(1);
        p.life > 0
    });
}
