//! BASTION headless host.
//!
//! Loads configuration, runs the simulation engine on its own thread at a
//! fixed rate, and exposes commands and the latest snapshot to the caller.

pub mod config;
pub mod demo;
pub mod error;
pub mod game_loop;
pub mod state;

pub use bastion_core as core;
