//! Simulation engine for the invaders game.
//!
//! Owns every entity collection, runs the per-tick systems in a fixed
//! order, and produces `GameStateSnapshot`s for the presentation layer.
//! Headless and deterministic: all time arrives through `tick`, all
//! randomness comes from a seeded ChaCha stream.

pub mod engine;
pub mod entities;
pub mod formation;
pub mod level;
pub mod systems;
pub mod world_setup;

pub use engine::{GameState, InvadersEngine};
pub use invaders_core as core;
