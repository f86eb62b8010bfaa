//! Demo autopilot.
//!
//! Flies the ship from the previous snapshot so the headless host has
//! something to simulate: chase the nearest enemy and shoot it, or drift
//! back to the station when the field is clear.

use glam::DVec2;

use bastion_core::commands::InputSnapshot;
use bastion_core::constants::STATION_SERVICE_RADIUS;
use bastion_core::enums::EnemyArchetype;
use bastion_core::state::{EnemyView, GameStateSnapshot};

/// Open fire inside this range.
const PHASER_RANGE: f64 = 350.0;
/// Save torpedoes for heavy targets this close.
const TORPEDO_RANGE: f64 = 250.0;
/// Raise shields when anything is this close.
const THREAT_RANGE: f64 = 500.0;
/// Stop closing in at this range and just turn.
const STANDOFF_RANGE: f64 = 150.0;

/// Choose the input for the next tick.
pub fn autopilot(snapshot: &GameStateSnapshot) -> InputSnapshot {
    let ship = &snapshot.player;
    if !ship.visible {
        return InputSnapshot::default();
    }

    let nearest = nearest_enemy(ship.position, &snapshot.enemies);
    let threatened = nearest
        .map(|(_, range)| range < THREAT_RANGE)
        .unwrap_or(false);
    // Holding the shield key toggles, so only press it to change state.
    let shield = threatened != ship.shields_active;

    match nearest {
        Some((enemy, range)) => {
            let thrust = if range > STANDOFF_RANGE { 0.8 } else { 0.2 };
            let heavy = enemy.archetype == EnemyArchetype::Dreadnought;
            InputSnapshot {
                joystick: Some(steer(ship.position, enemy.position, thrust)),
                fire: range < PHASER_RANGE,
                torpedo: heavy && range < TORPEDO_RANGE,
                shield,
                ..Default::default()
            }
        }
        None => {
            let home = snapshot.station.position;
            let joystick = (ship.position.distance(home) > STATION_SERVICE_RADIUS * 0.5)
                .then(|| steer(ship.position, home, 0.5));
            InputSnapshot {
                joystick,
                shield,
                ..Default::default()
            }
        }
    }
}

fn nearest_enemy(from: DVec2, enemies: &[EnemyView]) -> Option<(&EnemyView, f64)> {
    enemies
        .iter()
        .map(|e| (e, e.position.distance(from)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Joystick deflection toward `to` with the given magnitude.
fn steer(from: DVec2, to: DVec2, magnitude: f64) -> DVec2 {
    (to - from).normalize_or_zero() * magnitude
}
