//! Headless presentation bridge for the invaders simulation.
//!
//! Reads input intents as JSON lines on stdin, drives the engine at a fixed
//! rate, and streams one JSON snapshot per tick to stdout.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod input;

pub use invaders_core as core;
