//! Screen shake decay and camera follow.

use bastion_core::constants::{CAMERA_EASE, SHAKE_DECAY, SHAKE_EPSILON};
use bastion_core::types::to_iso;

use crate::session::Session;

pub fn decay_shake(session: &mut Session) {
    session.screen_shake *= SHAKE_DECAY;
    if session.screen_shake < SHAKE_EPSILON {
        session.screen_shake = 0.0;
    }
}

/// Ease the camera toward the player's projected position.
pub fn follow(session: &mut Session) {
    let target = to_iso(session.player.position);
    session.camera += (target - session.camera) * CAMERA_EASE;
}
