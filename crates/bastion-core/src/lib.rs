//! Core types and definitions for the BASTION simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity records, commands, input, state snapshots, the mission log,
//! geometry helpers and tuning constants. It has no dependency on any
//! rendering or runtime framework.

pub mod commands;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

pub use glam::DVec2;
