//! Core types and definitions for the invaders simulation.
//!
//! This crate defines the vocabulary shared by the simulation and any
//! presentation layer: geometry, input intents, configuration, events,
//! state snapshots, and default tuning constants.
//! It holds no simulation logic and no global mutable state.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;
