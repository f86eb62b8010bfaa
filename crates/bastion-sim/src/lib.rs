//! Simulation engine for BASTION.
//!
//! Owns the session state, runs systems once per tick in a fixed order,
//! and produces `GameStateSnapshot`s for the drawing layer and HUD.

pub mod clock;
pub mod engine;
pub mod mission;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use bastion_core as core;
pub use clock::{Clock, DeferredTask, ManualClock, SystemClock};
pub use engine::{SimConfig, SimulationEngine};
pub use session::Session;

#[cfg(test)]
mod tests;
