//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    Paused,
    /// Terminal. Only an explicit restart leaves this phase.
    GameOver,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// The player's last life was taken.
    LivesExhausted,
    /// The formation reached the bottom band of the playfield.
    FormationLanded,
}

/// The closed set of entity kinds the simulation knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Bullet,
    Alien,
    Ufo,
    Barrier,
}

/// Requested horizontal movement for the player this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Left,
    #[default]
    Stay,
    Right,
}

impl MoveDirection {
    /// -1, 0 or +1.
    pub fn sign(self) -> f32 {
        match self {
            MoveDirection::Left => -1.0,
            MoveDirection::Stay => 0.0,
            MoveDirection::Right => 1.0,
        }
    }

    /// Build from an integer direction; anything outside {-1, 0, 1} is clamped by sign.
    pub fn from_sign(value: i32) -> Self {
        match value.signum() {
            -1 => MoveDirection::Left,
            1 => MoveDirection::Right,
            _ => MoveDirection::Stay,
        }
    }
}

/// Horizontal heading of the formation or a UFO.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Left,
    #[default]
    Right,
}

impl Heading {
    /// -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Heading::Left => -1.0,
            Heading::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}
