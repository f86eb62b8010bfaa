//! Simulation constants and tuning parameters.
//!
//! All rates are per tick. A tick is one rendered frame, so velocities,
//! cooldowns and lifetimes below are tuned in frames, not seconds.

use crate::types::Rgb;

/// Nominal frame rate the tick constants are tuned for (Hz).
pub const TICK_RATE: u32 = 60;

// --- World ---

/// Side length of the square play area in world units.
pub const WORLD_SIZE: f64 = 6000.0;

/// Half-width of the play area; the player is clamped to ±this on each axis.
pub const WORLD_HALF: f64 = WORLD_SIZE / 2.0;

/// Isometric projection angle (30 degrees).
pub const ISO_ANGLE: f64 = std::f64::consts::PI / 6.0;

/// Fraction of the remaining distance the camera closes each tick.
pub const CAMERA_EASE: f64 = 0.08;

/// Per-tick screen shake decay factor.
pub const SHAKE_DECAY: f64 = 0.9;

/// Screen shake below this snaps to zero.
pub const SHAKE_EPSILON: f64 = 0.1;

/// Maximum accumulated screen shake.
pub const SHAKE_MAX: f64 = 15.0;

/// Screen shake added per point of damage taken.
pub const SHAKE_PER_DAMAGE: f64 = 0.5;

// --- Player ship ---

pub const PLAYER_SPAWN_X: f64 = -300.0;
pub const PLAYER_SPAWN_Y: f64 = -300.0;
pub const PLAYER_SPAWN_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

pub const PLAYER_MAX_HULL: f64 = 100.0;
pub const PLAYER_MAX_SHIELDS: f64 = 100.0;
pub const PLAYER_MAX_TORPEDOES: u32 = 20;

/// Cruise speed cap (units per tick).
pub const PLAYER_MAX_SPEED: f64 = 4.0;
/// Speed cap while the turbo modifier is held.
pub const PLAYER_TURBO_SPEED: f64 = 7.0;
/// Forward thrust per tick.
pub const PLAYER_ACCEL: f64 = 0.12;
/// Reverse thrust is this fraction of forward thrust.
pub const PLAYER_REVERSE_FACTOR: f64 = 0.5;
/// Velocity multiplier applied every tick.
pub const PLAYER_FRICTION: f64 = 0.97;
/// Discrete turn rate (rad per tick).
pub const PLAYER_TURN_RATE: f64 = 0.04;
/// Joystick turn rate multiplier over the discrete rate.
pub const JOYSTICK_TURN_FACTOR: f64 = 1.5;
/// Joystick magnitudes at or below this are ignored.
pub const JOYSTICK_DEADZONE: f64 = 0.15;

/// Radius used for obstacle collisions.
pub const PLAYER_COLLISION_RADIUS: f64 = 12.0;
/// Radius used for hostile bolt hits.
pub const PLAYER_HIT_RADIUS: f64 = 15.0;

/// Ticks between shield toggles while the shield input is held.
pub const SHIELD_TOGGLE_COOLDOWN: i32 = 20;
/// Shield points lost per tick while active.
pub const SHIELD_DRAIN: f64 = 0.02;
/// Shield points regained per tick while inactive.
pub const SHIELD_REGEN: f64 = 0.01;
/// Fraction of incoming damage absorbed by an active shield.
pub const SHIELD_ABSORB: f64 = 0.8;

/// Speed above which the engine leaves a trail.
pub const TRAIL_MIN_SPEED: f64 = 0.5;
/// Distance behind the ship where trail samples are dropped.
pub const TRAIL_OFFSET: f64 = 15.0;
/// Lifetime of a trail sample in ticks.
pub const TRAIL_LIFE: u32 = 30;

/// Real-time delay between destruction and respawn (milliseconds).
pub const RESPAWN_DELAY_MS: u64 = 3000;
/// Score lost on each destruction.
pub const DEATH_PENALTY: u64 = 200;

// --- Player weapons ---

pub const PHASER_COOLDOWN: i32 = 10;
pub const PHASER_SPREAD: f64 = 0.05;
pub const PHASER_MUZZLE_OFFSET: f64 = 18.0;
pub const PHASER_SPEED: f64 = 12.0;
pub const PHASER_LIFE: u32 = 40;
pub const PHASER_DAMAGE: f64 = 8.0;

pub const TORPEDO_COOLDOWN: i32 = 30;
pub const TORPEDO_MUZZLE_OFFSET: f64 = 20.0;
pub const TORPEDO_SPEED: f64 = 6.0;
pub const TORPEDO_LIFE: u32 = 120;
pub const TORPEDO_DAMAGE: f64 = 35.0;

// --- Installation & landmarks ---

/// Radius inside which the station repairs and resupplies the player.
pub const STATION_SERVICE_RADIUS: f64 = 150.0;
pub const STATION_HULL_REPAIR: f64 = 0.05;
pub const STATION_SHIELD_RECHARGE: f64 = 0.03;
/// A torpedo is restocked on ticks that are a multiple of this.
pub const STATION_RESUPPLY_INTERVAL: u64 = 60;
pub const STATION_SPIN: f64 = 0.0005;

pub const WORMHOLE_X: f64 = 800.0;
pub const WORMHOLE_Y: f64 = 800.0;
pub const WORMHOLE_RADIUS: f64 = 60.0;
pub const WORMHOLE_PULSE_RATE: f64 = 0.02;

// --- Asteroids ---

pub const ASTEROID_COUNT: usize = 30;
pub const ASTEROID_MIN_DIST: f64 = 1500.0;
pub const ASTEROID_DIST_SPREAD: f64 = 2000.0;
pub const ASTEROID_MIN_RADIUS: f64 = 8.0;
pub const ASTEROID_RADIUS_SPREAD: f64 = 20.0;
pub const ASTEROID_MAX_DRIFT: f64 = 0.15;
pub const ASTEROID_MAX_SPIN: f64 = 0.005;
pub const ASTEROID_MIN_VERTICES: usize = 6;
pub const ASTEROID_MAX_VERTICES: usize = 9;

/// Damage taken when ramming an asteroid.
pub const ASTEROID_RAM_DAMAGE: f64 = 5.0;
/// Speed the ship is pushed away from an asteroid after a collision.
pub const ASTEROID_BOUNCE_SPEED: f64 = 3.0;

// --- Enemies ---

/// Enemy turn rate (rad per tick).
pub const ENEMY_TURN_RATE: f64 = 0.03;
/// Beyond this distance the enemy closes in.
pub const ENEMY_FAR_RANGE: f64 = 100.0;
/// Inside this distance the enemy backs off.
pub const ENEMY_NEAR_RANGE: f64 = 60.0;
/// Maximum distance at which an enemy opens fire.
pub const ENEMY_FIRE_RANGE: f64 = 500.0;
/// Backing-off speed as a fraction of archetype speed.
pub const ENEMY_RETREAT_FACTOR: f64 = 0.5;

pub const ENEMY_BOLT_SPEED: f64 = 8.0;
pub const ENEMY_BOLT_LIFE: u32 = 50;
pub const ENEMY_BOLT_DAMAGE: f64 = 5.0;

// --- Combat resolution ---

/// Extra radius added to an enemy for phaser hits.
pub const PHASER_HIT_MARGIN: f64 = 5.0;
/// Extra radius added to an enemy for torpedo hits.
pub const TORPEDO_HIT_MARGIN: f64 = 8.0;
/// Extra radius added to an asteroid for torpedo hits.
pub const TORPEDO_ASTEROID_MARGIN: f64 = 5.0;

// --- Effects ---

pub const PARTICLE_MAX_LIFE: u32 = 50;
pub const PARTICLE_MIN_LIFE: u32 = 30;
pub const PARTICLE_LIFE_SPREAD: u32 = 20;
pub const PARTICLE_MIN_SPEED: f64 = 0.5;
pub const PARTICLE_SPEED_SPREAD: f64 = 2.0;
pub const PARTICLE_MIN_SIZE: f64 = 1.0;
pub const PARTICLE_SIZE_SPREAD: f64 = 3.0;

pub const FRIENDLY_IMPACT_COLOR: Rgb = Rgb::new(255, 150, 50);
pub const HOSTILE_IMPACT_COLOR: Rgb = Rgb::new(255, 100, 100);
pub const ROCK_COLOR: Rgb = Rgb::new(150, 120, 80);

pub const IMPACT_PARTICLES: usize = 3;
pub const RAM_PARTICLES: usize = 5;
pub const ROCK_HIT_PARTICLES: usize = 8;
pub const WRECK_PARTICLES: usize = 15;

/// (life, size) of a torpedo detonating on an enemy.
pub const TORPEDO_BLAST: (u32, f64) = (30, 25.0);
/// (life, size) of a torpedo detonating on an asteroid.
pub const TORPEDO_ROCK_BLAST: (u32, f64) = (20, 15.0);
/// Lifetime of an enemy wreck explosion; size is twice the archetype radius.
pub const WRECK_BLAST_LIFE: u32 = 40;
/// (life, size) of the player ship exploding.
pub const PLAYER_BLAST: (u32, f64) = (60, 50.0);

// --- Missions ---

/// Idle ticks that must elapse before the next wave spawns.
pub const WAVE_IDLE_TICKS: u32 = 300;
/// Minimum spawn distance from the player.
pub const WAVE_SPAWN_MIN_DIST: f64 = 1200.0;
/// Spawn distance spread on top of the minimum.
pub const WAVE_SPAWN_DIST_SPREAD: f64 = 500.0;

/// Number of lines kept in the mission log.
pub const LOG_CAPACITY: usize = 6;
