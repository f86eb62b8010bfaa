//! Tests for the simulation engine, player controller, combat resolver,
//! mission director and respawn clock.

use std::f64::consts::FRAC_PI_4;
use std::sync::Arc;
use std::time::Duration;

use glam::DVec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bastion_core::commands::{InputSnapshot, PlayerCommand};
use bastion_core::constants::*;
use bastion_core::entities::{Asteroid, Projectile};
use bastion_core::enums::*;
use bastion_core::events::GameEvent;
use bastion_core::types::to_iso;

use crate::clock::ManualClock;
use crate::engine::{SimConfig, SimulationEngine};
use crate::session::Session;
use crate::systems::{player, snapshot};
use crate::world_setup;

// ---- Helpers ----

fn config_with_clock(seed: u64, clock: &ManualClock) -> SimConfig {
    SimConfig {
        seed,
        clock: Arc::new(clock.clone()),
        ..Default::default()
    }
}

/// Engine past the title screen, one tick in, on a manual clock.
fn active_engine() -> (SimulationEngine, ManualClock) {
    let clock = ManualClock::new();
    let mut engine = SimulationEngine::new(config_with_clock(42, &clock));
    engine.queue_command(PlayerCommand::StartMission);
    engine.tick();
    (engine, clock)
}

fn bare_session() -> Session {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut session = world_setup::new_session(&mut rng, RewardTrigger::default());
    session.asteroids.clear();
    session
}

fn bolt(position: DVec2, speed: f64, faction: Faction) -> Projectile {
    Projectile {
        kind: ProjectileKind::Phaser,
        position,
        angle: 0.0,
        speed,
        life: PHASER_LIFE,
        damage: PHASER_DAMAGE,
        faction,
    }
}

fn torpedo(position: DVec2) -> Projectile {
    Projectile {
        kind: ProjectileKind::Torpedo,
        position,
        angle: 0.0,
        speed: 0.0,
        life: TORPEDO_LIFE,
        damage: TORPEDO_DAMAGE,
        faction: Faction::Friendly,
    }
}

/// Put a hostile bolt on top of the ship so the next tick lands it.
fn arm_killing_shot(engine: &mut SimulationEngine) {
    let session = engine.session_mut();
    session.player.hull = 1.0;
    session.player.shields_active = false;
    let at = session.player.position;
    session.phasers.push(bolt(at, 0.0, Faction::Hostile));
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let script = |tick: usize| InputSnapshot {
        forward: tick % 90 < 60,
        left: tick % 200 < 20,
        fire: tick % 7 == 0,
        torpedo: tick % 120 == 0,
        ..Default::default()
    };

    let clock_a = ManualClock::new();
    let clock_b = ManualClock::new();
    let mut engine_a = SimulationEngine::new(config_with_clock(12345, &clock_a));
    let mut engine_b = SimulationEngine::new(config_with_clock(12345, &clock_b));
    engine_a.queue_command(PlayerCommand::StartMission);
    engine_b.queue_command(PlayerCommand::StartMission);

    for tick in 0..700 {
        engine_a.set_input(script(tick));
        engine_b.set_input(script(tick));
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed at tick {tick}");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    });
    assert_ne!(
        engine_a.session().asteroids,
        engine_b.session().asteroids,
        "Different seeds should generate different asteroid fields"
    );
}

// ---- Phases & commands ----

#[test]
fn test_title_screen_does_not_advance() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Title);
    assert_eq!(snap.time.tick, 0);
    assert_eq!(snap.log, vec!["> Station in sight...".to_string()]);
    assert_eq!(snap.log_total, 1);
    assert_eq!(snap.player.position, DVec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
    assert_eq!(snap.station.rotation, 0.0);
}

#[test]
fn test_start_mission_writes_launch_lines() {
    let (engine, _clock) = active_engine();
    assert_eq!(engine.phase(), GamePhase::Active);
    assert_eq!(engine.time().tick, 1);
    let log = engine.session().log.to_vec();
    assert_eq!(log.len(), 3);
    assert_eq!(log[1], "> Ship ready for launch.");
    assert_eq!(log[2], "> Captain, the station is in sight.");
}

#[test]
fn test_pause_resume() {
    let (mut engine, _clock) = active_engine();
    engine.queue_command(PlayerCommand::Pause);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Paused);
    assert_eq!(snap.time.tick, 1);
    let rotation = snap.station.rotation;

    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, 1, "paused ticks must not advance time");
    assert_eq!(engine.session().station.rotation, rotation);

    engine.queue_command(PlayerCommand::Resume);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.time.tick, 2);
}

#[test]
fn test_set_input_command_is_sticky() {
    let (mut engine, _clock) = active_engine();
    engine.queue_command(PlayerCommand::SetInput {
        input: InputSnapshot {
            forward: true,
            ..Default::default()
        },
    });
    engine.tick();
    let speed_after_one = engine.session().player.speed;
    for _ in 0..10 {
        engine.tick();
    }
    assert!(engine.input().forward);
    assert!(engine.session().player.speed > speed_after_one);
}

#[test]
fn test_reset_session_returns_to_title() {
    let (mut engine, _clock) = active_engine();
    engine.session_mut().score = 900;
    engine.session_mut().player.position = DVec2::new(1000.0, 1000.0);
    let original_field = engine.session().asteroids.clone();

    engine.queue_command(PlayerCommand::ResetSession);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Title);
    assert_eq!(snap.time.tick, 0);
    assert_eq!(snap.hud.score, 0);
    assert_eq!(snap.player.position, DVec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
    assert_eq!(snap.log.len(), 1);

    // Same seed regenerates the same field (before any drift).
    let fresh = SimulationEngine::new(SimConfig::default());
    assert_eq!(engine.session().asteroids, fresh.session().asteroids);
    assert_eq!(original_field.len(), ASTEROID_COUNT);
}

// ---- Player movement ----

#[test]
fn test_speed_caps_at_cruise_limit() {
    let (mut engine, _clock) = active_engine();
    engine.session_mut().asteroids.clear();
    let diagonal = DVec2::new(FRAC_PI_4.cos(), FRAC_PI_4.sin());
    engine.set_input(InputSnapshot {
        forward: true,
        joystick: Some(diagonal),
        ..Default::default()
    });
    for _ in 0..200 {
        let snap = engine.tick();
        assert!(snap.player.speed <= PLAYER_MAX_SPEED + 1e-9);
    }
    assert!((engine.session().player.speed - PLAYER_MAX_SPEED).abs() < 1e-9);
}

#[test]
fn test_turbo_raises_speed_cap() {
    let (mut engine, _clock) = active_engine();
    engine.session_mut().asteroids.clear();
    let diagonal = DVec2::new(FRAC_PI_4.cos(), FRAC_PI_4.sin());
    engine.set_input(InputSnapshot {
        forward: true,
        turbo: true,
        joystick: Some(diagonal),
        ..Default::default()
    });
    for _ in 0..150 {
        engine.tick();
    }
    let velocity = engine.session().player.velocity.length();
    assert!((velocity - PLAYER_TURBO_SPEED).abs() < 1e-9, "got {velocity}");
}

#[test]
fn test_keyboard_thrust_terminal_speed_below_cap() {
    let mut session = bare_session();
    let input = InputSnapshot {
        forward: true,
        ..Default::default()
    };
    for _ in 0..800 {
        player::integrate_motion(&mut session.player, &input);
    }
    // v = (v + 0.12) * 0.97 converges to 3.88.
    assert!((session.player.speed - 3.88).abs() < 1e-6);
}

#[test]
fn test_boundary_clamp() {
    let mut session = bare_session();
    session.player.position = DVec2::new(2999.0, -2999.0);
    session.player.velocity = DVec2::new(4.0, -4.0);
    player::integrate_motion(&mut session.player, &InputSnapshot::default());
    assert_eq!(session.player.position, DVec2::new(WORLD_HALF, -WORLD_HALF));

    session.player.position = DVec2::new(-5000.0, 12000.0);
    player::integrate_motion(&mut session.player, &InputSnapshot::default());
    assert_eq!(session.player.position, DVec2::new(-3000.0, 3000.0));
}

#[test]
fn test_discrete_turn_rate() {
    let mut session = bare_session();
    let start = session.player.angle;
    let input = InputSnapshot {
        right: true,
        ..Default::default()
    };
    player::integrate_motion(&mut session.player, &input);
    assert!((session.player.angle - (start + PLAYER_TURN_RATE)).abs() < 1e-12);
}

#[test]
fn test_joystick_deadzone_ignored() {
    let mut session = bare_session();
    let start = session.player.angle;
    let input = InputSnapshot {
        joystick: Some(DVec2::new(0.1, 0.05)),
        ..Default::default()
    };
    player::integrate_motion(&mut session.player, &input);
    assert!((session.player.angle - start).abs() < 1e-12);
    assert_eq!(session.player.velocity, DVec2::ZERO);
}

#[test]
fn test_joystick_turn_is_clamped() {
    let mut session = bare_session();
    // Facing +45 degrees, stick pointing -90 degrees: turn right way round, capped.
    let input = InputSnapshot {
        joystick: Some(DVec2::new(0.0, -1.0)),
        ..Default::default()
    };
    player::integrate_motion(&mut session.player, &input);
    let expected = FRAC_PI_4 - PLAYER_TURN_RATE * JOYSTICK_TURN_FACTOR;
    assert!((session.player.angle - expected).abs() < 1e-12);
    assert!(session.player.speed > 0.0);
}

#[test]
fn test_reverse_thrust_from_rest() {
    let mut session = bare_session();
    let input = InputSnapshot {
        reverse: true,
        ..Default::default()
    };
    player::integrate_motion(&mut session.player, &input);
    let heading = DVec2::new(FRAC_PI_4.cos(), FRAC_PI_4.sin());
    let expected = -heading * PLAYER_ACCEL * PLAYER_REVERSE_FACTOR * PLAYER_FRICTION;
    assert!((session.player.velocity - expected).length() < 1e-12);
    assert!((session.player.velocity.x + 0.0411536).abs() < 1e-6);
    assert!((session.player.angle - FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn test_joystick_thrust_scales_with_magnitude() {
    let mut session = bare_session();
    session.player.angle = 0.0;
    let input = InputSnapshot {
        joystick: Some(DVec2::new(0.5, 0.0)),
        ..Default::default()
    };
    player::integrate_motion(&mut session.player, &input);
    assert!((session.player.velocity.x - PLAYER_ACCEL * 0.5 * PLAYER_FRICTION).abs() < 1e-12);
    assert!(session.player.velocity.y.abs() < 1e-12);
    assert!(session.player.angle.abs() < 1e-12);
}

#[test]
fn test_engine_trail_follows_moving_ship() {
    let (mut engine, _clock) = active_engine();
    engine.set_input(InputSnapshot {
        forward: true,
        ..Default::default()
    });
    for _ in 0..60 {
        engine.tick();
    }
    let snap = engine.tick();
    assert!(!snap.player.engine_trail.is_empty());
    assert!(snap.player.engine_trail.len() <= TRAIL_LIFE as usize);
    assert!(snap.player.engine_trail.iter().all(|p| p.life > 0 && p.life <= TRAIL_LIFE));

    engine.set_input(InputSnapshot::default());
    for _ in 0..400 {
        engine.tick();
    }
    assert!(engine.session().player.engine_trail.is_empty());
}

// ---- Shields & damage ----

#[test]
fn test_shield_toggle_cooldown() {
    let mut session = bare_session();
    player::update_shields(&mut session.player, true);
    assert!(session.player.shields_active);
    assert_eq!(session.player.shield_cooldown, SHIELD_TOGGLE_COOLDOWN - 1);

    for _ in 1..20 {
        player::update_shields(&mut session.player, true);
        assert!(session.player.shields_active, "held input must not retoggle early");
    }
    player::update_shields(&mut session.player, true);
    assert!(!session.player.shields_active);
}

#[test]
fn test_shield_drain_and_auto_off() {
    let mut session = bare_session();
    session.player.shields_active = true;
    session.player.shields = 0.015;
    player::update_shields(&mut session.player, false);
    assert_eq!(session.player.shields, 0.0);
    assert!(!session.player.shields_active);

    player::update_shields(&mut session.player, false);
    assert!((session.player.shields - SHIELD_REGEN).abs() < 1e-12);
}

#[test]
fn test_damage_split_with_active_shield() {
    let mut session = bare_session();
    session.player.shields_active = true;
    session.player.shields = 50.0;
    player::take_damage(&mut session, 10.0);
    assert!((session.player.shields - 42.0).abs() < 1e-9);
    assert!((session.player.hull - 98.0).abs() < 1e-9);
}

#[test]
fn test_damage_without_shield() {
    let mut session = bare_session();
    player::take_damage(&mut session, 10.0);
    assert_eq!(session.player.hull, 90.0);
    assert_eq!(session.player.shields, PLAYER_MAX_SHIELDS);
    assert_eq!(session.screen_shake, 5.0);
}

#[test]
fn test_screen_shake_capped() {
    let mut session = bare_session();
    player::take_damage(&mut session, 40.0);
    player::take_damage(&mut session, 40.0);
    assert_eq!(session.screen_shake, SHAKE_MAX);
}

#[test]
fn test_destruction_happens_once() {
    let mut session = bare_session();
    session.score = 450;
    session.player.hull = 3.0;
    player::take_damage(&mut session, 10.0);
    assert!(session.player.is_destroyed());
    assert_eq!(session.player.hull, 0.0);
    assert_eq!(session.explosions.len(), 1);
    assert_eq!(session.explosions[0].size, PLAYER_BLAST.1);
    assert!(session.log.last().unwrap_or_default().contains("450"));

    player::take_damage(&mut session, 10.0);
    assert_eq!(session.explosions.len(), 1);
    let destroyed = session
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::PlayerDestroyed { .. }))
        .count();
    assert_eq!(destroyed, 1);
}

#[test]
fn test_wreck_ignores_input() {
    let mut session = bare_session();
    session.player.hull = 0.0;
    let before = session.player.clone();
    let input = InputSnapshot {
        forward: true,
        fire: true,
        torpedo: true,
        ..Default::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    player::run(&mut session, &input, &mut rng, 5);
    assert_eq!(session.player.position, before.position);
    assert_eq!(session.player.torpedoes, before.torpedoes);
    assert!(session.phasers.is_empty());
    assert!(session.torpedoes.is_empty());
}

// ---- Respawn clock ----

#[test]
fn test_respawn_economics() {
    let (mut engine, clock) = active_engine();
    engine.session_mut().score = 500;
    engine.session_mut().player.torpedoes = 3;
    arm_killing_shot(&mut engine);

    let snap = engine.tick();
    assert!(!snap.player.visible);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::PlayerDestroyed { .. })));
    assert!(engine.respawn_pending());

    clock.advance(Duration::from_millis(2999));
    let snap = engine.tick();
    assert!(!snap.player.visible, "respawn must not fire early");

    clock.advance(Duration::from_millis(1));
    let snap = engine.tick();
    assert!(snap.events.contains(&GameEvent::PlayerRespawned));
    let ship = &engine.session().player;
    assert_eq!(ship.hull, PLAYER_MAX_HULL);
    assert_eq!(ship.shields, PLAYER_MAX_SHIELDS);
    assert_eq!(ship.torpedoes, PLAYER_MAX_TORPEDOES);
    assert_eq!(ship.position, DVec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
    assert_eq!(ship.velocity, DVec2::ZERO);
    assert_eq!(engine.session().score, 300);
    assert!(snap.player.visible);
    assert_eq!(snap.log.last().map(String::as_str), Some("> Ship rebuilt at the station..."));
}

#[test]
fn test_respawn_penalty_floors_at_zero() {
    let (mut engine, clock) = active_engine();
    engine.session_mut().score = 50;
    arm_killing_shot(&mut engine);
    engine.tick();
    clock.advance(Duration::from_secs(3));
    engine.tick();
    assert_eq!(engine.session().score, 0);
}

#[test]
fn test_respawn_runs_while_paused() {
    let (mut engine, clock) = active_engine();
    arm_killing_shot(&mut engine);
    engine.tick();
    assert!(engine.session().player.is_destroyed());

    engine.queue_command(PlayerCommand::Pause);
    engine.tick();
    let paused_at = engine.time().tick;

    clock.advance(Duration::from_secs(3));
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Paused);
    assert_eq!(snap.time.tick, paused_at);
    assert_eq!(engine.session().player.hull, PLAYER_MAX_HULL);
    assert!(snap.player.visible);
}

#[test]
fn test_reset_cancels_pending_respawn() {
    let (mut engine, clock) = active_engine();
    engine.session_mut().score = 1000;
    arm_killing_shot(&mut engine);
    engine.tick();
    assert!(engine.respawn_pending());

    engine.queue_command(PlayerCommand::ResetSession);
    engine.tick();
    assert!(!engine.respawn_pending());

    clock.advance(Duration::from_secs(10));
    let snap = engine.tick();
    assert!(!snap.events.contains(&GameEvent::PlayerRespawned));
    assert_eq!(snap.hud.score, 0);
    assert_eq!(snap.log.len(), 1);
}

#[test]
fn test_custom_respawn_delay() {
    let clock = ManualClock::new();
    let mut engine = SimulationEngine::new(SimConfig {
        respawn_delay: Duration::from_millis(500),
        ..config_with_clock(42, &clock)
    });
    engine.queue_command(PlayerCommand::StartMission);
    engine.tick();
    arm_killing_shot(&mut engine);
    engine.tick();
    clock.advance(Duration::from_millis(500));
    engine.tick();
    assert!(!engine.session().player.is_destroyed());
}

// ---- Weapons ----

#[test]
fn test_phaser_fires_twin_bolts() {
    let (mut engine, _clock) = active_engine();
    engine.set_input(InputSnapshot {
        fire: true,
        ..Default::default()
    });
    let snap = engine.tick();
    let bolts: Vec<&Projectile> = engine.session().phasers.iter().collect();
    assert_eq!(bolts.len(), 2);
    let facing = engine.session().player.angle;
    assert!((bolts[0].angle - (facing - PHASER_SPREAD)).abs() < 1e-12);
    assert!((bolts[1].angle - (facing + PHASER_SPREAD)).abs() < 1e-12);
    assert!(bolts.iter().all(|b| b.is_friendly() && b.life == PHASER_LIFE - 1));
    assert!(!snap.hud.phaser_ready);
    assert_eq!(snap.projectiles.len(), 2);
}

#[test]
fn test_phaser_cooldown_gates_refire() {
    let (mut engine, _clock) = active_engine();
    engine.session_mut().asteroids.clear();
    engine.set_input(InputSnapshot {
        fire: true,
        ..Default::default()
    });
    for _ in 0..PHASER_COOLDOWN {
        engine.tick();
    }
    // Fired on the first held tick and again once the cooldown ran out.
    assert_eq!(engine.session().phasers.len(), 2);
    engine.tick();
    assert_eq!(engine.session().phasers.len(), 4);
}

#[test]
fn test_torpedo_consumes_ammo() {
    let (mut engine, _clock) = active_engine();
    engine.set_input(InputSnapshot {
        torpedo: true,
        ..Default::default()
    });
    let snap = engine.tick();
    assert_eq!(snap.hud.torpedoes, PLAYER_MAX_TORPEDOES - 1);
    assert_eq!(engine.session().torpedoes.len(), 1);
}

#[test]
fn test_torpedo_ammo_gating() {
    let (mut engine, _clock) = active_engine();
    engine.session_mut().player.torpedoes = 0;
    engine.set_input(InputSnapshot {
        torpedo: true,
        ..Default::default()
    });
    for _ in 0..(TORPEDO_COOLDOWN * 2) {
        engine.tick();
    }
    assert!(engine.session().torpedoes.is_empty());
    assert_eq!(engine.session().player.torpedoes, 0);
}

#[test]
fn test_projectile_lifetime() {
    let (mut engine, _clock) = active_engine();
    engine.session_mut().asteroids.clear();
    engine
        .session_mut()
        .phasers
        .push(bolt(DVec2::ZERO, PHASER_SPEED, Faction::Friendly));

    for _ in 0..(PHASER_LIFE - 1) {
        engine.tick();
    }
    assert_eq!(engine.session().phasers.len(), 1);
    assert_eq!(engine.session().phasers[0].life, 1);
    engine.tick();
    assert!(engine.session().phasers.is_empty());
}

// ---- Combat ----

#[test]
fn test_enemy_destruction_scoring() {
    let (mut engine, _clock) = active_engine();
    engine.spawn_test_enemy(EnemyArchetype::Raider, DVec2::ZERO);
    engine.session_mut().enemies[0].hull = 5.0;
    // Two bolts on the same enemy: only the first may score.
    engine
        .session_mut()
        .phasers
        .push(bolt(DVec2::ZERO, 0.0, Faction::Friendly));
    engine
        .session_mut()
        .phasers
        .push(bolt(DVec2::ZERO, 0.0, Faction::Friendly));

    let snap = engine.tick();
    assert!(snap.enemies.is_empty());
    assert_eq!(snap.hud.score, 100);
    assert_eq!(snap.explosions.len(), 1);
    assert_eq!(snap.explosions[0].size, 28.0);
    assert!(snap.particles.len() >= 10);
    assert_eq!(engine.session().phasers.len(), 1, "second bolt flies on");
    assert_eq!(snap.log.last().map(String::as_str), Some("> Raider destroyed! +100 pts"));
    let kills = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
        .count();
    assert_eq!(kills, 1);
}

#[test]
fn test_phaser_hit_damages_without_kill() {
    let (mut engine, _clock) = active_engine();
    engine.spawn_test_enemy(EnemyArchetype::Cruiser, DVec2::ZERO);
    engine
        .session_mut()
        .phasers
        .push(bolt(DVec2::ZERO, 0.0, Faction::Friendly));
    let snap = engine.tick();
    assert_eq!(snap.enemies.len(), 1);
    assert_eq!(snap.enemies[0].hull, 50.0 - PHASER_DAMAGE);
    assert_eq!(snap.particles.len(), IMPACT_PARTICLES);
    assert!(engine.session().phasers.is_empty());
}

#[test]
fn test_torpedo_hit_on_enemy() {
    let (mut engine, _clock) = active_engine();
    engine.spawn_test_enemy(EnemyArchetype::Dreadnought, DVec2::ZERO);
    engine.session_mut().torpedoes.push(torpedo(DVec2::ZERO));
    let snap = engine.tick();
    assert_eq!(snap.enemies[0].hull, 150.0 - TORPEDO_DAMAGE);
    assert_eq!(snap.explosions.len(), 1);
    assert_eq!(snap.explosions[0].size, TORPEDO_BLAST.1);
    assert!(engine.session().torpedoes.is_empty());
}

#[test]
fn test_torpedo_hits_asteroid() {
    let mut session = bare_session();
    let rock_at = DVec2::new(500.0, 500.0);
    session.asteroids.push(Asteroid {
        position: rock_at,
        velocity: DVec2::ZERO,
        rotation: 0.0,
        rotation_speed: 0.0,
        radius: 20.0,
        outline: Vec::new(),
    });
    session.torpedoes.push(torpedo(rock_at + DVec2::new(24.0, 0.0)));

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    crate::systems::combat::run(&mut session, &mut rng);
    assert!(session.torpedoes.is_empty());
    assert_eq!(session.explosions.len(), 1);
    assert_eq!(session.explosions[0].size, TORPEDO_ROCK_BLAST.1);
    assert_eq!(session.particles.len(), ROCK_HIT_PARTICLES);
}

#[test]
fn test_hostile_bolt_hits_player() {
    let mut session = bare_session();
    let at = session.player.position;
    session.phasers.push(bolt(at, 0.0, Faction::Hostile));
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    crate::systems::combat::run(&mut session, &mut rng);
    assert_eq!(session.player.hull, PLAYER_MAX_HULL - PHASER_DAMAGE);
    assert!(session.phasers.is_empty());
    assert_eq!(session.particles.len(), IMPACT_PARTICLES);
    assert_eq!(session.particles[0].color, HOSTILE_IMPACT_COLOR);
}

#[test]
fn test_hostile_bolt_passes_wreck() {
    let mut session = bare_session();
    session.player.hull = 0.0;
    let at = session.player.position;
    session.phasers.push(bolt(at, 0.0, Faction::Hostile));
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    crate::systems::combat::run(&mut session, &mut rng);
    assert_eq!(session.phasers.len(), 1);
    assert!(session.explosions.is_empty());
}

#[test]
fn test_friendly_bolt_ignores_player() {
    let mut session = bare_session();
    let at = session.player.position;
    session.phasers.push(bolt(at, 0.0, Faction::Friendly));
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    crate::systems::combat::run(&mut session, &mut rng);
    assert_eq!(session.player.hull, PLAYER_MAX_HULL);
    assert_eq!(session.phasers.len(), 1);
}

#[test]
fn test_enemy_returns_fire_in_range() {
    let (mut engine, _clock) = active_engine();
    let player = engine.session().player.position;
    engine.spawn_test_enemy(EnemyArchetype::Marauder, player + DVec2::new(300.0, 0.0));
    engine.session_mut().enemies[0].fire_cooldown = 1;
    engine.tick();
    let hostile: Vec<&Projectile> = engine
        .session()
        .phasers
        .iter()
        .filter(|p| !p.is_friendly())
        .collect();
    assert_eq!(hostile.len(), 1);
    assert_eq!(hostile[0].damage, ENEMY_BOLT_DAMAGE);
    assert_eq!(engine.session().enemies[0].fire_cooldown, 100);
}

// ---- Obstacles & station ----

#[test]
fn test_asteroid_collision_bounces_ship() {
    let mut session = bare_session();
    session.asteroids.push(Asteroid {
        position: DVec2::new(-280.0, -300.0),
        velocity: DVec2::ZERO,
        rotation: 0.0,
        rotation_speed: 0.0,
        radius: 10.0,
        outline: Vec::new(),
    });
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    player::run(&mut session, &InputSnapshot::default(), &mut rng, 1);
    assert_eq!(session.player.hull, PLAYER_MAX_HULL - ASTEROID_RAM_DAMAGE);
    assert!((session.player.velocity - DVec2::new(-ASTEROID_BOUNCE_SPEED, 0.0)).length() < 1e-9);
    assert_eq!(session.player.speed, ASTEROID_BOUNCE_SPEED);
    assert_eq!(session.particles.len(), RAM_PARTICLES);
    assert_eq!(session.particles[0].color, ROCK_COLOR);
}

#[test]
fn test_station_service() {
    let mut session = bare_session();
    session.player.position = DVec2::new(40.0, 40.0);
    session.player.hull = 50.0;
    session.player.shields = 50.0;
    session.player.torpedoes = 10;
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    player::run(&mut session, &InputSnapshot::default(), &mut rng, 59);
    assert!((session.player.hull - 50.05).abs() < 1e-9);
    let shields = 50.0 + SHIELD_REGEN + STATION_SHIELD_RECHARGE;
    assert!((session.player.shields - shields).abs() < 1e-9);
    assert_eq!(session.player.torpedoes, 10);

    player::run(&mut session, &InputSnapshot::default(), &mut rng, 60);
    assert_eq!(session.player.torpedoes, 11);
}

#[test]
fn test_station_out_of_range() {
    let mut session = bare_session();
    session.player.hull = 50.0;
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    player::run(&mut session, &InputSnapshot::default(), &mut rng, 60);
    assert_eq!(session.player.hull, 50.0);
}

#[test]
fn test_asteroid_field_layout() {
    let engine = SimulationEngine::new(SimConfig::default());
    let field = &engine.session().asteroids;
    assert_eq!(field.len(), ASTEROID_COUNT);
    for a in field {
        let dist = a.position.length();
        let ring = ASTEROID_MIN_DIST..ASTEROID_MIN_DIST + ASTEROID_DIST_SPREAD + 1e-9;
        assert!(ring.contains(&dist));
        assert!(a.radius >= ASTEROID_MIN_RADIUS && a.radius < 28.0);
        assert!((ASTEROID_MIN_VERTICES..=ASTEROID_MAX_VERTICES).contains(&a.outline.len()));
        assert!(a.outline.iter().all(|v| v.radius >= a.radius * 0.7 && v.radius <= a.radius));
        assert!(a.velocity.x.abs() <= ASTEROID_MAX_DRIFT);
        assert!(a.velocity.y.abs() <= ASTEROID_MAX_DRIFT);
    }
}

#[test]
fn test_landmarks_animate() {
    let (engine, _clock) = active_engine();
    let session = engine.session();
    assert!((session.station.rotation - STATION_SPIN).abs() < 1e-15);
    assert!((session.wormhole.pulse_phase - WORMHOLE_PULSE_RATE).abs() < 1e-15);
}

// ---- Missions ----

#[test]
fn test_wave_cadence() {
    let (mut engine, _clock) = active_engine();
    while engine.time().tick < WAVE_IDLE_TICKS as u64 {
        engine.tick();
    }
    assert!(engine.session().enemies.is_empty(), "no wave through tick 300");
    assert_eq!(engine.session().director.phase, 0);

    let snap = engine.tick();
    assert_eq!(snap.time.tick, 301);
    assert_eq!(snap.enemies.len(), 3);
    assert!(snap.enemies.iter().all(|e| e.archetype == EnemyArchetype::Raider));
    assert_eq!(snap.mission.phase, 1);
    assert_eq!(snap.mission.idle_timer, 0);
    assert_eq!(snap.mission.current.as_deref(), Some("Station Patrol"));
    assert!(snap.events.contains(&GameEvent::WaveLaunched {
        phase: 1,
        enemies: 3
    }));
    assert!(snap.log.iter().any(|l| l == "> MISSION: Station Patrol"));

    let player = engine.session().player.position;
    for enemy in &engine.session().enemies {
        let dist = enemy.position.distance(player);
        let band = WAVE_SPAWN_MIN_DIST..WAVE_SPAWN_MIN_DIST + WAVE_SPAWN_DIST_SPREAD;
        assert!(band.contains(&dist));
        assert_eq!(enemy.hull, 40.0);
        assert_eq!(enemy.fire_cooldown, 120);
    }
}

#[test]
fn test_wave_reward_paid_once() {
    let (mut engine, _clock) = active_engine();
    engine.session_mut().director.idle_timer = WAVE_IDLE_TICKS;
    engine.tick();
    assert_eq!(engine.session().enemies.len(), 3);

    engine.tick();
    assert_eq!(engine.session().director.idle_timer, 0, "held at 0 while a wave is live");

    engine.session_mut().enemies.clear();
    let snap = engine.tick();
    assert_eq!(snap.hud.score, 200);
    assert_eq!(snap.log.last().map(String::as_str), Some("> Mission accomplished! +200 pts"));
    assert!(snap.events.contains(&GameEvent::WaveCleared {
        phase: 1,
        reward: 200
    }));

    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.session().score, 200);
}

#[test]
fn test_clear_edge_reward_trigger() {
    let clock = ManualClock::new();
    let mut engine = SimulationEngine::new(SimConfig {
        reward_trigger: RewardTrigger::ClearEdge,
        ..config_with_clock(42, &clock)
    });
    engine.queue_command(PlayerCommand::StartMission);
    engine.tick();
    engine.session_mut().director.idle_timer = WAVE_IDLE_TICKS;
    engine.tick();
    engine.session_mut().enemies.clear();
    engine.tick();
    engine.tick();
    assert_eq!(engine.session().score, 200);
}

#[test]
fn test_second_wave_follows_table() {
    let (mut engine, _clock) = active_engine();
    engine.session_mut().director.idle_timer = WAVE_IDLE_TICKS;
    engine.tick();
    engine.session_mut().enemies.clear();
    engine.tick();
    engine.session_mut().director.idle_timer = WAVE_IDLE_TICKS;
    let snap = engine.tick();
    assert_eq!(snap.mission.phase, 2);
    assert_eq!(snap.enemies.len(), 4);
    assert!(snap.enemies.iter().all(|e| e.archetype == EnemyArchetype::Cruiser));
}

// ---- Camera, shake, HUD, snapshot ----

#[test]
fn test_camera_eases_toward_player() {
    let (engine, _clock) = active_engine();
    let expected = to_iso(engine.session().player.position) * CAMERA_EASE;
    assert!((engine.session().camera - expected).length() < 1e-9);
}

#[test]
fn test_shake_decays_and_snaps() {
    let (mut engine, _clock) = active_engine();
    engine.session_mut().screen_shake = 1.0;
    let snap = engine.tick();
    assert!((snap.screen_shake - 0.9).abs() < 1e-12);

    engine.session_mut().screen_shake = 0.105;
    let snap = engine.tick();
    assert_eq!(snap.screen_shake, 0.0);
}

#[test]
fn test_hud_rounding() {
    let mut session = bare_session();
    session.player.hull = 99.6;
    session.player.shields = 41.5;
    session.player.phaser_cooldown = 0;
    let hud = snapshot::build_hud(&session.player, 75);
    assert_eq!(hud.hull, 100);
    assert_eq!(hud.shields, 42);
    assert_eq!(hud.score, 75);
    assert!(hud.phaser_ready);

    session.player.hull = 0.0;
    session.player.phaser_cooldown = 3;
    let hud = snapshot::build_hud(&session.player, 0);
    assert_eq!(hud.hull, 0);
    assert!(!hud.phaser_ready);
}

#[test]
fn test_snapshot_events_are_drained() {
    let (mut engine, _clock) = active_engine();
    engine.spawn_test_enemy(EnemyArchetype::Raider, DVec2::ZERO);
    engine.session_mut().enemies[0].hull = 1.0;
    engine
        .session_mut()
        .phasers
        .push(bolt(DVec2::ZERO, 0.0, Faction::Friendly));
    let snap = engine.tick();
    assert_eq!(snap.events.len(), 1);
    let snap = engine.tick();
    assert!(snap.events.is_empty());
}

#[test]
fn test_snapshot_json_roundtrip() {
    let (mut engine, _clock) = active_engine();
    engine.spawn_test_enemy(EnemyArchetype::Dreadnought, DVec2::new(400.0, 0.0));
    let snap = engine.tick();
    let json = serde_json::to_string(&snap).unwrap();
    let back: bastion_core::state::GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.enemies[0].name, "Dreadnought");
    assert_eq!(back.enemies[0].max_hull, 150.0);
    assert_eq!(back.asteroids.len(), ASTEROID_COUNT);
}

#[test]
fn test_session_dump_roundtrip() {
    let (mut engine, _clock) = active_engine();
    engine.spawn_test_enemy(EnemyArchetype::Raider, DVec2::new(900.0, 0.0));
    engine.tick();
    let json = serde_json::to_string(engine.session()).unwrap();
    let back: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(back.enemies.len(), 1);
    assert_eq!(back.enemies[0].archetype, EnemyArchetype::Raider);
    assert_eq!(back.asteroids.len(), ASTEROID_COUNT);
    assert_eq!(back.director, engine.session().director);
    assert_eq!(back.score, engine.session().score);
}

// ---- Properties ----

fn arb_input() -> impl Strategy<Value = InputSnapshot> {
    (
        any::<[bool; 8]>(),
        proptest::option::of((-1.0f64..1.0, -1.0f64..1.0)),
    )
        .prop_map(|(b, stick)| InputSnapshot {
            left: b[0],
            right: b[1],
            forward: b[2],
            reverse: b[3],
            fire: b[4],
            torpedo: b[5],
            shield: b[6],
            turbo: b[7],
            joystick: stick.map(|(x, y)| DVec2::new(x, y).clamp_length_max(1.0)),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_speed_and_bounds_hold(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(arb_input(), 1..400),
    ) {
        let clock = ManualClock::new();
        let mut engine = SimulationEngine::new(config_with_clock(seed, &clock));
        engine.queue_command(PlayerCommand::StartMission);

        for input in inputs {
            engine.set_input(input);
            engine.tick();
            clock.advance(Duration::from_millis(16));

            let ship = &engine.session().player;
            let cap = player::max_speed(input.turbo);
            prop_assert!(ship.velocity.length() <= cap + 1e-9);
            prop_assert!((0.0..=PLAYER_MAX_HULL).contains(&ship.hull));
            prop_assert!((0.0..=PLAYER_MAX_SHIELDS).contains(&ship.shields));
            prop_assert!(ship.torpedoes <= PLAYER_MAX_TORPEDOES);
            prop_assert!(ship.position.x.abs() <= WORLD_HALF);
            prop_assert!(ship.position.y.abs() <= WORLD_HALF);
        }
    }

    #[test]
    fn prop_damage_keeps_bounds(
        hits in proptest::collection::vec((0.0f64..60.0, any::<bool>()), 1..40),
    ) {
        let mut session = bare_session();
        for (amount, shielded) in hits {
            session.player.shields_active = shielded;
            player::take_damage(&mut session, amount);
            prop_assert!((0.0..=PLAYER_MAX_HULL).contains(&session.player.hull));
            prop_assert!((0.0..=PLAYER_MAX_SHIELDS).contains(&session.player.shields));
            prop_assert!(session.screen_shake <= SHAKE_MAX);
        }
    }
}
