//! Events emitted by the simulation for sound and visual feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A fresh game was built (first tick or restart).
    GameStarted,
    PlayerFired,
    AlienFired { row: u32, col: u32 },
    AlienDestroyed { row: u32, col: u32, points: u32 },
    UfoSpawned { heading: Heading, points: u32 },
    UfoDestroyed { points: u32 },
    /// The UFO left the playfield without being hit.
    UfoEscaped,
    BarrierHit { index: usize, health: u32 },
    BarrierDestroyed { index: usize },
    PlayerHit { lives_remaining: u32 },
    /// The formation was wiped out; the next level has begun.
    LevelCleared { level: u32 },
    Paused,
    Resumed,
    GameOver { reason: GameOverReason, final_score: u32 },
}
