//! Player ship controller.
//!
//! Steering, thrust, shields, weapons, obstacle collisions and station
//! service, applied once per tick from the current input snapshot.
//! A wrecked ship ignores input until the respawn task rebuilds it.

use glam::DVec2;
use log::info;
use rand_chacha::ChaCha8Rng;

use bastion_core::commands::InputSnapshot;
use bastion_core::constants::*;
use bastion_core::entities::{PlayerShip, Projectile, TrailPoint};
use bastion_core::enums::{Faction, ProjectileKind};
use bastion_core::events::GameEvent;
use bastion_core::types::{bearing, heading_vector, turn_toward, within, wrap_angle};

use crate::session::Session;
use crate::systems::effects::{spawn_explosion, spawn_particles};

/// Run the player controller for one tick.
pub fn run(session: &mut Session, input: &InputSnapshot, rng: &mut ChaCha8Rng, tick: u64) {
    decay_trail(&mut session.player);

    if session.player.is_destroyed() {
        return;
    }

    integrate_motion(&mut session.player, input);
    update_shields(&mut session.player, input.shield);
    fire_weapons(session, input);
    emit_trail(&mut session.player);
    collide_with_asteroids(session, rng);

    if session.player.is_destroyed() {
        return;
    }
    station_service(session, tick);
}

/// Current speed cap for the turbo modifier state.
pub fn max_speed(turbo: bool) -> f64 {
    if turbo {
        PLAYER_TURBO_SPEED
    } else {
        PLAYER_MAX_SPEED
    }
}

/// Steering, thrust, friction, speed cap and the world boundary.
pub fn integrate_motion(ship: &mut PlayerShip, input: &InputSnapshot) {
    if input.left {
        ship.angle -= PLAYER_TURN_RATE;
    }
    if input.right {
        ship.angle += PLAYER_TURN_RATE;
    }

    if input.forward {
        ship.velocity += heading_vector(ship.angle) * PLAYER_ACCEL;
    }
    if input.reverse {
        ship.velocity -= heading_vector(ship.angle) * PLAYER_ACCEL * PLAYER_REVERSE_FACTOR;
    }

    if let Some(stick) = input.joystick {
        let magnitude = stick.length();
        if magnitude > JOYSTICK_DEADZONE {
            let target = bearing(DVec2::ZERO, stick);
            ship.angle = turn_toward(
                ship.angle,
                target,
                PLAYER_TURN_RATE * JOYSTICK_TURN_FACTOR,
            );
            ship.velocity += heading_vector(ship.angle) * PLAYER_ACCEL * magnitude;
        }
    }
    ship.angle = wrap_angle(ship.angle);

    ship.velocity *= PLAYER_FRICTION;
    let cap = max_speed(input.turbo);
    let speed = ship.velocity.length();
    if speed > cap {
        ship.velocity = ship.velocity / speed * cap;
        ship.speed = cap;
    } else {
        ship.speed = speed;
    }

    ship.position += ship.velocity;
    ship.position = ship
        .position
        .clamp(DVec2::splat(-WORLD_HALF), DVec2::splat(WORLD_HALF));
}

/// Toggle, drain and regenerate the shield.
pub fn update_shields(ship: &mut PlayerShip, toggle_held: bool) {
    if toggle_held && ship.shield_cooldown <= 0 {
        ship.shields_active = !ship.shields_active;
        ship.shield_cooldown = SHIELD_TOGGLE_COOLDOWN;
    }
    if ship.shield_cooldown > 0 {
        ship.shield_cooldown -= 1;
    }

    if ship.shields_active {
        ship.shields = (ship.shields - SHIELD_DRAIN).max(0.0);
        if ship.shields <= 0.0 {
            ship.shields_active = false;
        }
    } else {
        ship.shields = (ship.shields + SHIELD_REGEN).min(PLAYER_MAX_SHIELDS);
    }
}

fn fire_weapons(session: &mut Session, input: &InputSnapshot) {
    let ship = &mut session.player;
    let forward = heading_vector(ship.angle);

    if ship.phaser_cooldown > 0 {
        ship.phaser_cooldown -= 1;
    }
    if input.fire && ship.phaser_cooldown <= 0 {
        for side in [-1.0, 1.0] {
            session.phasers.push(Projectile {
                kind: ProjectileKind::Phaser,
                position: ship.position + forward * PHASER_MUZZLE_OFFSET,
                angle: ship.angle + side * PHASER_SPREAD,
                speed: PHASER_SPEED,
                life: PHASER_LIFE,
                damage: PHASER_DAMAGE,
                faction: Faction::Friendly,
            });
        }
        ship.phaser_cooldown = PHASER_COOLDOWN;
    }

    if ship.torpedo_cooldown > 0 {
        ship.torpedo_cooldown -= 1;
    }
    if input.torpedo && ship.torpedo_cooldown <= 0 && ship.torpedoes > 0 {
        session.torpedoes.push(Projectile {
            kind: ProjectileKind::Torpedo,
            position: ship.position + forward * TORPEDO_MUZZLE_OFFSET,
            angle: ship.angle,
            speed: TORPEDO_SPEED,
            life: TORPEDO_LIFE,
            damage: TORPEDO_DAMAGE,
            faction: Faction::Friendly,
        });
        ship.torpedoes -= 1;
        ship.torpedo_cooldown = TORPEDO_COOLDOWN;
    }
}

fn decay_trail(ship: &mut PlayerShip) {
    ship.engine_trail.retain_mut(|point| {
        point.life = point.life.saturating_sub(1);
        point.life > 0
    });
}

fn emit_trail(ship: &mut PlayerShip) {
    if ship.speed > TRAIL_MIN_SPEED {
        ship.engine_trail.push(TrailPoint {
            position: ship.position - heading_vector(ship.angle) * TRAIL_OFFSET,
            life: TRAIL_LIFE,
            max_life: TRAIL_LIFE,
        });
    }
}

fn collide_with_asteroids(session: &mut Session, rng: &mut ChaCha8Rng) {
    let ship_position = session.player.position;
    let hits: Vec<DVec2> = session
        .asteroids
        .iter()
        .filter(|a| within(ship_position, a.position, a.radius + PLAYER_COLLISION_RADIUS))
        .map(|a| a.position)
        .collect();

    for rock in hits {
        take_damage(session, ASTEROID_RAM_DAMAGE);
        spawn_particles(&mut session.particles, rng, rock, RAM_PARTICLES, ROCK_COLOR);
        if session.player.is_destroyed() {
            break;
        }

        let away = session.player.position - rock;
        let distance = away.length();
        if distance > 0.0 {
            session.player.velocity = away / distance * ASTEROID_BOUNCE_SPEED;
            session.player.speed = ASTEROID_BOUNCE_SPEED;
        }
    }
}

fn station_service(session: &mut Session, tick: u64) {
    let ship = &mut session.player;
    if !within(ship.position, session.station.position, STATION_SERVICE_RADIUS) {
        return;
    }
    ship.hull = (ship.hull + STATION_HULL_REPAIR).min(PLAYER_MAX_HULL);
    ship.shields = (ship.shields + STATION_SHIELD_RECHARGE).min(PLAYER_MAX_SHIELDS);
    if ship.torpedoes < PLAYER_MAX_TORPEDOES && tick % STATION_RESUPPLY_INTERVAL == 0 {
        ship.torpedoes += 1;
    }
}

/// Apply incoming damage to the player's ship.
///
/// An active shield with charge left absorbs most of the hit. A wreck
/// takes no further damage, so destruction happens once per life.
pub fn take_damage(session: &mut Session, amount: f64) {
    let ship = &mut session.player;
    if ship.is_destroyed() {
        return;
    }

    if ship.shields_active && ship.shields > 0.0 {
        ship.shields = (ship.shields - amount * SHIELD_ABSORB).clamp(0.0, PLAYER_MAX_SHIELDS);
        ship.hull = (ship.hull - amount * (1.0 - SHIELD_ABSORB)).clamp(0.0, PLAYER_MAX_HULL);
    } else {
        ship.hull = (ship.hull - amount).clamp(0.0, PLAYER_MAX_HULL);
    }

    session.screen_shake = (session.screen_shake + amount * SHAKE_PER_DAMAGE).min(SHAKE_MAX);

    if session.player.is_destroyed() {
        destroy_player(session);
    }
}

fn destroy_player(session: &mut Session) {
    let position = session.player.position;
    session.player.hull = 0.0;
    session.player.velocity = DVec2::ZERO;
    session.player.speed = 0.0;
    spawn_explosion(&mut session.explosions, position, PLAYER_BLAST);

    let score = session.score;
    session.narrate(format!("> SHIP DESTROYED! Final score: {score}"));
    session.emit(GameEvent::PlayerDestroyed { position });
    info!("player destroyed at ({:.0}, {:.0}), score {score}", position.x, position.y);
}

/// Rebuild the ship at the spawn point and charge the death penalty.
pub fn respawn(session: &mut Session) {
    let ship = &mut session.player;
    ship.hull = PLAYER_MAX_HULL;
    ship.shields = PLAYER_MAX_SHIELDS;
    ship.torpedoes = PLAYER_MAX_TORPEDOES;
    ship.position = DVec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
    ship.velocity = DVec2::ZERO;
    ship.speed = 0.0;

    session.score = session.score.saturating_sub(DEATH_PENALTY);
    session.narrate("> Ship rebuilt at the station...");
    session.emit(GameEvent::PlayerRespawned);
    info!("player respawned, score {}", session.score);
}
