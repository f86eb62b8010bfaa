//! Owned session state.
//!
//! Every entity store lives here and is passed explicitly to the systems.
//! A session is rebuilt from scratch on reset.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use bastion_core::entities::*;
use bastion_core::events::{GameEvent, MissionLog};

use crate::mission::MissionDirector;

/// All mutable game state for one play session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub player: PlayerShip,
    /// Live enemies. Destroyed enemies are removed immediately.
    pub enemies: Vec<Enemy>,
    /// Phaser bolts of both factions.
    pub phasers: Vec<Projectile>,
    pub torpedoes: Vec<Projectile>,
    pub explosions: Vec<Explosion>,
    pub particles: Vec<Particle>,
    pub asteroids: Vec<Asteroid>,
    pub station: Station,
    pub wormhole: Wormhole,
    /// Camera position in projected space.
    pub camera: DVec2,
    pub screen_shake: f64,
    pub score: u64,
    pub log: MissionLog,
    pub director: MissionDirector,
    /// Events raised since the last snapshot.
    pub events: Vec<GameEvent>,
}

impl Session {
    /// Append a line to the mission log.
    pub fn narrate(&mut self, line: impl Into<String>) {
        self.log.push(line);
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// True once a `PlayerDestroyed` event is pending in this tick's events.
    pub fn player_destroyed_this_tick(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::PlayerDestroyed { .. }))
    }
}
