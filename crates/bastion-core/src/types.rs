//! Fundamental geometric and simulation types.
//!
//! World space is a flat plane in world units with x to the right and y
//! down the screen before projection. Angles are radians, 0 along +x,
//! increasing toward +y.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{ISO_ANGLE, TICK_RATE};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds at the nominal frame rate.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the nominal frame rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// 8-bit RGB color carried by cosmetic entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Unit vector pointing along `angle`.
#[inline]
pub fn heading_vector(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

/// Bearing from `from` to `to` in radians.
#[inline]
pub fn bearing(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Wrap an angle difference into `[-PI, PI)`.
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Shortest signed rotation that takes `current` onto `target`.
#[inline]
pub fn shortest_angle_delta(current: f64, target: f64) -> f64 {
    wrap_angle(target - current)
}

/// Rotate `current` toward `target` by at most `max_step` radians.
pub fn turn_toward(current: f64, target: f64, max_step: f64) -> f64 {
    let delta = shortest_angle_delta(current, target);
    current + delta.clamp(-max_step, max_step)
}

/// Project a world position onto the isometric view plane.
#[inline]
pub fn to_iso(p: DVec2) -> DVec2 {
    DVec2::new((p.x - p.y) * ISO_ANGLE.cos(), (p.x + p.y) * ISO_ANGLE.sin())
}

/// Convert a world position to screen pixels for a camera and viewport.
///
/// The camera position is expressed in projected (isometric) space and
/// maps to the center of the viewport.
#[inline]
pub fn world_to_screen(p: DVec2, camera: DVec2, viewport: DVec2) -> DVec2 {
    to_iso(p) - camera + viewport / 2.0
}

/// True when two circles of the given combined radius overlap strictly.
#[inline]
pub fn within(a: DVec2, b: DVec2, radius: f64) -> bool {
    a.distance(b) < radius
}
