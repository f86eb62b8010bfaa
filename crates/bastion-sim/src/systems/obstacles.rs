//! Asteroid drift and landmark animation.

use bastion_core::constants::{STATION_SPIN, WORMHOLE_PULSE_RATE};

use crate::session::Session;

/// Drift and spin every asteroid, turn the station, pulse the wormhole.
pub fn run(session: &mut Session) {
    for asteroid in &mut session.asteroids {
        asteroid.position += asteroid.velocity;
        asteroid.rotation += asteroid.rotation_speed;
    }

    session.station.rotation += STATION_SPIN;
    session.wormhole.pulse_phase += WORMHOLE_PULSE_RATE;
}
