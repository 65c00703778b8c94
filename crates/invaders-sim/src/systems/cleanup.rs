//! Cleanup system: removes bullets and UFOs that have left the playfield.

use log::{debug, trace};

use invaders_core::config::GameConfig;
use invaders_core::events::GameEvent;

use crate::engine::GameState;
use crate::entities::Entity;

pub fn run(state: &mut GameState, config: &GameConfig, events: &mut Vec<GameEvent>) {
    let (height, margin) = (config.height, config.bullet_margin);
    state.bullets.retain(|b| {
        let keep = b.in_bounds(height, margin);
        if !keep {
            trace!("{:?} left the playfield at y {:.1}", b.kind(), b.position.y);
        }
        keep
    });

    if !state
        .ufo
        .as_ref()
        .is_some_and(|ufo| ufo.has_left(config.width))
    {
        return;
    }
    if let Some(ufo) = state.ufo.take() {
        events.push(GameEvent::UfoEscaped);
        debug!("{:?} escaped heading {:?}", ufo.kind(), ufo.heading);
    }
}
