//! Input intents sent from the presentation layer to the simulation.
//!
//! One `InputIntents` value is consumed per tick. Intents that cannot be
//! honoured (firing at the bullet cap, pausing a finished game) are no-ops.

use serde::{Deserialize, Serialize};

use crate::enums::MoveDirection;

/// Everything the player asked for during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputIntents {
    pub move_direction: MoveDirection,
    pub fire: bool,
    /// Flip between `Playing` and `Paused`. Ignored after game over.
    pub toggle_pause: bool,
    /// Start over from level 1. Only honoured after game over.
    pub restart: bool,
    /// Consumed by the outer loop to exit; the simulation ignores it.
    pub quit: bool,
}

impl InputIntents {
    /// No movement, no requests.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Fold a later intent gathered in the same frame into this one.
    ///
    /// The latest movement wins, one-shot requests accumulate, and two
    /// pause toggles cancel out.
    pub fn merge(&mut self, later: InputIntents) {
        self.move_direction = later.move_direction;
        self.fire |= later.fire;
        self.toggle_pause ^= later.toggle_pause;
        self.restart |= later.restart;
        self.quit |= later.quit;
    }

    /// The part of this intent that persists into the next frame (held movement).
    pub fn held(&self) -> Self {
        Self {
            move_direction: self.move_direction,
            ..Self::default()
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}
