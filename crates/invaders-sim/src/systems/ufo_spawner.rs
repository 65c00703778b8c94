//! UFO spawner: at most one UFO at a time, on a randomized cooldown.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use invaders_core::config::GameConfig;
use invaders_core::enums::Heading;
use invaders_core::events::GameEvent;

use crate::engine::GameState;
use crate::entities::Ufo;
use crate::world_setup::roll_ufo_cooldown;

/// Count down the spawn cooldown and launch a UFO once it has expired and
/// none is alive. The cooldown is re-rolled immediately after a spawn.
pub fn run<R: Rng + ?Sized>(
    state: &mut GameState,
    config: &GameConfig,
    elapsed_secs: f64,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    if !config.ufo_enabled || elapsed_secs <= 0.0 {
        return;
    }

    state.ufo_spawn_cooldown_secs = (state.ufo_spawn_cooldown_secs - elapsed_secs).max(0.0);
    if state.ufo.is_some() || state.ufo_spawn_cooldown_secs > 0.0 {
        return;
    }

    let heading = if rng.gen_bool(0.5) {
        Heading::Right
    } else {
        Heading::Left
    };
    let Some(&points) = config.ufo_points.choose(rng) else {
        return;
    };

    state.ufo = Some(Ufo::entering(heading, points, config));
    state.ufo_spawn_cooldown_secs = roll_ufo_cooldown(config, rng);
    events.push(GameEvent::UfoSpawned { heading, points });
    debug!(
        "ufo spawned heading {heading:?} worth {points}; next in {:.1}s",
        state.ufo_spawn_cooldown_secs
    );
}
