//! Systems that operate on the session each tick.
//!
//! Systems are plain functions over `&mut Session` (or `&Session` for
//! read-only). They hold no state of their own.

pub mod camera;
pub mod combat;
pub mod effects;
pub mod enemy_ai;
pub mod mission;
pub mod obstacles;
pub mod player;
pub mod snapshot;
