//! Enemy AI for BASTION.
//!
//! Implements archetype stat profiles and the pursue/stand-off/fire
//! behaviour evaluated for every live enemy each tick.

pub mod profiles;
pub mod pursuit;

pub use bastion_core as core;
