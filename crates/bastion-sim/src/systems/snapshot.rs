//! Snapshot system: reads the session and builds a complete
//! `GameStateSnapshot`.
//!
//! This system is read-only: it never modifies the session.

use bastion_core::entities::PlayerShip;
use bastion_core::enums::GamePhase;
use bastion_core::events::GameEvent;
use bastion_core::state::*;
use bastion_core::types::SimTime;

use bastion_ai::profiles::get_profile;

use crate::session::Session;

/// Build a snapshot of the session.
pub fn build_snapshot(
    session: &Session,
    time: &SimTime,
    phase: GamePhase,
    turbo: bool,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        hud: build_hud(&session.player, session.score),
        log: session.log.to_vec(),
        log_total: session.log.total(),
        player: build_player(&session.player, turbo),
        enemies: build_enemies(session),
        projectiles: session
            .phasers
            .iter()
            .chain(session.torpedoes.iter())
            .cloned()
            .collect(),
        explosions: session.explosions.clone(),
        particles: session.particles.clone(),
        asteroids: session.asteroids.clone(),
        station: session.station.clone(),
        wormhole: session.wormhole.clone(),
        camera: session.camera,
        screen_shake: session.screen_shake,
        mission: MissionView {
            phase: session.director.phase,
            idle_timer: session.director.idle_timer,
            current: session.director.current().map(|m| m.name.to_string()),
        },
        events,
    }
}

/// HUD numbers: hull rounded and floored at zero, shields rounded.
pub fn build_hud(ship: &PlayerShip, score: u64) -> HudView {
    HudView {
        hull: ship.hull.round().max(0.0) as i32,
        shields: ship.shields.round() as i32,
        score,
        phaser_ready: ship.phaser_cooldown <= 0,
        torpedoes: ship.torpedoes,
    }
}

fn build_player(ship: &PlayerShip, turbo: bool) -> PlayerView {
    PlayerView {
        position: ship.position,
        angle: ship.angle,
        speed: ship.speed,
        shields_active: ship.shields_active,
        turbo,
        visible: !ship.is_destroyed(),
        engine_trail: ship.engine_trail.clone(),
    }
}

fn build_enemies(session: &Session) -> Vec<EnemyView> {
    session
        .enemies
        .iter()
        .map(|enemy| {
            let profile = get_profile(enemy.archetype);
            EnemyView {
                archetype: enemy.archetype,
                name: profile.name.to_string(),
                color: profile.color,
                position: enemy.position,
                angle: enemy.angle,
                hull: enemy.hull,
                max_hull: profile.max_hull,
                radius: profile.radius,
            }
        })
        .collect()
}
