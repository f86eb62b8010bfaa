//! Combat resolver: projectile flight, hits, and enemy destruction.
//!
//! Each pass drains its projectile store and rebuilds it from the
//! survivors. A projectile stops at the first thing it hits.

use glam::DVec2;
use log::info;
use rand_chacha::ChaCha8Rng;

use bastion_core::constants::*;
use bastion_core::entities::{Enemy, Projectile};
use bastion_core::events::GameEvent;
use bastion_core::types::{heading_vector, within};

use bastion_ai::profiles::get_profile;

use crate::session::Session;
use crate::systems::effects::{spawn_explosion, spawn_particles};
use crate::systems::player::take_damage;

/// Resolve phaser bolts, then torpedoes.
pub fn run(session: &mut Session, rng: &mut ChaCha8Rng) {
    resolve_phasers(session, rng);
    resolve_torpedoes(session, rng);
}

/// Move a projectile one tick along its angle and burn one tick of life.
pub fn advance(projectile: &mut Projectile) {
    projectile.position += heading_vector(projectile.angle) * projectile.speed;
    projectile.life = projectile.life.saturating_sub(1);
}

/// Index of the enemy hit at `point`, newest enemy first.
fn find_enemy_hit(enemies: &[Enemy], point: DVec2, margin: f64) -> Option<usize> {
    enemies
        .iter()
        .rposition(|e| within(point, e.position, get_profile(e.archetype).radius + margin))
}

/// Apply damage to one enemy. Returns true when its hull is gone.
fn strike_enemy(session: &mut Session, index: usize, damage: f64) -> bool {
    match session.enemies.get_mut(index) {
        Some(enemy) => {
            enemy.hull -= damage;
            enemy.hull <= 0.0
        }
        None => false,
    }
}

fn resolve_phasers(session: &mut Session, rng: &mut ChaCha8Rng) {
    let bolts = std::mem::take(&mut session.phasers);
    let mut surviving = Vec::with_capacity(bolts.len());

    for mut bolt in bolts {
        advance(&mut bolt);

        if bolt.is_friendly() {
            let hit = find_enemy_hit(&session.enemies, bolt.position, PHASER_HIT_MARGIN);
            if let Some(index) = hit {
                let destroyed = strike_enemy(session, index, bolt.damage);
                spawn_particles(
                    &mut session.particles,
                    rng,
                    bolt.position,
                    IMPACT_PARTICLES,
                    FRIENDLY_IMPACT_COLOR,
                );
                if destroyed {
                    destroy_enemy(session, rng, index);
                }
                continue;
            }
        } else if !session.player.is_destroyed()
            && within(bolt.position, session.player.position, PLAYER_HIT_RADIUS)
        {
            take_damage(session, bolt.damage);
            spawn_particles(
                &mut session.particles,
                rng,
                bolt.position,
                IMPACT_PARTICLES,
                HOSTILE_IMPACT_COLOR,
            );
            continue;
        }

        if bolt.life > 0 {
            surviving.push(bolt);
        }
    }

    session.phasers = surviving;
}

fn resolve_torpedoes(session: &mut Session, rng: &mut ChaCha8Rng) {
    let torpedoes = std::mem::take(&mut session.torpedoes);
    let mut surviving = Vec::with_capacity(torpedoes.len());

    for mut torpedo in torpedoes {
        advance(&mut torpedo);

        if torpedo.is_friendly() {
            if let Some(index) =
                find_enemy_hit(&session.enemies, torpedo.position, TORPEDO_HIT_MARGIN)
            {
                let destroyed = strike_enemy(session, index, torpedo.damage);
                spawn_explosion(&mut session.explosions, torpedo.position, TORPEDO_BLAST);
                if destroyed {
                    destroy_enemy(session, rng, index);
                }
                continue;
            }
        }

        let hit_rock = session.asteroids.iter().any(|a| {
            within(torpedo.position, a.position, a.radius + TORPEDO_ASTEROID_MARGIN)
        });
        if hit_rock {
            spawn_explosion(&mut session.explosions, torpedo.position, TORPEDO_ROCK_BLAST);
            spawn_particles(
                &mut session.particles,
                rng,
                torpedo.position,
                ROCK_HIT_PARTICLES,
                ROCK_COLOR,
            );
            continue;
        }

        if torpedo.life > 0 {
            surviving.push(torpedo);
        }
    }

    session.torpedoes = surviving;
}

/// Remove an enemy from the field and pay out its score.
///
/// Removal is immediate, so nothing later in the tick can hit or score
/// the same enemy again.
pub fn destroy_enemy(session: &mut Session, rng: &mut ChaCha8Rng, index: usize) {
    if index >= session.enemies.len() {
        return;
    }
    let enemy = session.enemies.remove(index);
    let profile = get_profile(enemy.archetype);

    session.score += profile.score;
    spawn_explosion(
        &mut session.explosions,
        enemy.position,
        (WRECK_BLAST_LIFE, profile.radius * 2.0),
    );
    spawn_particles(
        &mut session.particles,
        rng,
        enemy.position,
        WRECK_PARTICLES,
        FRIENDLY_IMPACT_COLOR,
    );

    session.narrate(format!("> {} destroyed! +{} pts", profile.name, profile.score));
    session.emit(GameEvent::EnemyDestroyed {
        archetype: enemy.archetype,
        position: enemy.position,
        score: profile.score,
    });
    info!("{} destroyed, +{} (score {})", profile.name, profile.score, session.score);
}
