//! Kinematic step for every moving entity.

use crate::engine::GameState;
use crate::entities::Entity;

/// Advance player timers, bullets, the formation and any UFO.
///
/// Returns true if the formation reached the bottom band.
pub fn run(state: &mut GameState, elapsed_ticks: f32, elapsed_secs: f64) -> bool {
    state.player.advance(elapsed_ticks);
    state.player.cool_down(elapsed_secs);

    for bullet in &mut state.bullets {
        bullet.advance(elapsed_ticks);
    }

    if let Some(ufo) = state.ufo.as_mut() {
        ufo.advance(elapsed_ticks);
    }

    state.formation.advance(elapsed_ticks)
}
