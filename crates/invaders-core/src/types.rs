//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking.
///
/// Only advances while the game is `Playing`; paused and game-over ticks
/// leave it untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated ticks.
    pub tick: u64,
    /// Elapsed simulated time in seconds (sum of the `elapsed` values passed to `tick`).
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick that covered `elapsed_secs` of wall-clock time.
    pub fn advance(&mut self, elapsed_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += elapsed_secs;
    }
}
