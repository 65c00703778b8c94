//! Per-tick systems.
//!
//! Systems are plain functions over the `GameState`. They own no state;
//! the engine calls them in a fixed order each tick.

pub mod cleanup;
pub mod collision;
pub mod fire_control;
pub mod movement;
pub mod snapshot;
pub mod ufo_spawner;
