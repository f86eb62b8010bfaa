//! Player commands and the polled input snapshot.
//!
//! Commands are queued and processed at the next tick boundary. The
//! input snapshot is sticky: it stays in effect until replaced.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Abstracted control state for one tick.
///
/// The simulation does not care whether this is filled from a keyboard,
/// a touch overlay or a gamepad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub reverse: bool,
    pub fire: bool,
    pub torpedo: bool,
    pub shield: bool,
    pub turbo: bool,
    /// Virtual joystick deflection, magnitude at most 1. `None` when released.
    #[serde(default)]
    pub joystick: Option<DVec2>,
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the title screen and begin the session.
    StartMission,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Throw the session away and return to the title screen.
    ResetSession,
    /// Replace the current input snapshot.
    SetInput { input: InputSnapshot },
}
