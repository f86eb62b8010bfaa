//! Game state snapshot: the complete visible state handed to the drawing
//! layer and HUD after each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::entities::{Asteroid, Explosion, Particle, Projectile, Station, TrailPoint, Wormhole};
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Rgb, SimTime};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    /// Mission log, oldest first.
    pub log: Vec<String>,
    /// Lines ever written to the log; the difference between two snapshots
    /// is how many of `log`'s trailing lines are new.
    pub log_total: u64,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<Projectile>,
    pub explosions: Vec<Explosion>,
    pub particles: Vec<Particle>,
    pub asteroids: Vec<Asteroid>,
    pub station: Station,
    pub wormhole: Wormhole,
    /// Camera position in projected space.
    pub camera: DVec2,
    pub screen_shake: f64,
    pub mission: MissionView,
    /// Events raised during this tick.
    pub events: Vec<GameEvent>,
}

/// Numbers shown on the HUD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudView {
    /// Rounded hull, never below 0.
    pub hull: i32,
    /// Rounded shield points.
    pub shields: i32,
    pub score: u64,
    pub phaser_ready: bool,
    pub torpedoes: u32,
}

/// Player ship as seen by the drawing layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: DVec2,
    pub angle: f64,
    pub speed: f64,
    pub shields_active: bool,
    pub turbo: bool,
    /// False while the wreck waits for its respawn.
    pub visible: bool,
    pub engine_trail: Vec<TrailPoint>,
}

/// Enemy ship with its archetype presentation data resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub archetype: EnemyArchetype,
    pub name: String,
    pub color: Rgb,
    pub position: DVec2,
    pub angle: f64,
    pub hull: f64,
    pub max_hull: f64,
    pub radius: f64,
}

/// Mission progression status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionView {
    /// Number of waves launched so far.
    pub phase: u32,
    pub idle_timer: u32,
    /// Name of the most recently launched mission.
    pub current: Option<String>,
}
