//! Fire control: player shots and formation return fire.

use log::trace;
use rand::Rng;

use invaders_core::config::GameConfig;
use invaders_core::events::GameEvent;

use crate::engine::GameState;
use crate::entities::Bullet;
use crate::level::LevelProfile;

/// Fire a friendly bullet if the cooldown has expired and the cap allows it.
///
/// Returns false (and changes nothing) when either limit blocks the shot.
pub fn try_player_fire(
    state: &mut GameState,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) -> bool {
    if !state.player.can_fire() {
        return false;
    }
    if state.friendly_bullets() >= config.max_friendly_bullets {
        return false;
    }

    state
        .bullets
        .push(Bullet::friendly(state.player.muzzle(), config));
    state.player.fire_cooldown_secs = config.player_fire_cooldown_secs;
    events.push(GameEvent::PlayerFired);
    true
}

/// Count down the alien fire cooldown; on expiry a random living alien fires.
///
/// The cooldown is re-armed with the level's interval right after a shot.
/// Nothing fires on a tick that covers no time.
pub fn run_alien_fire<R: Rng + ?Sized>(
    state: &mut GameState,
    config: &GameConfig,
    elapsed_secs: f64,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    if elapsed_secs <= 0.0 {
        return;
    }
    state.alien_fire_cooldown_secs = (state.alien_fire_cooldown_secs - elapsed_secs).max(0.0);
    if state.alien_fire_cooldown_secs > 0.0 {
        return;
    }

    let Some((shooter, muzzle)) = state.formation.random_shooter(rng) else {
        return;
    };
    state.bullets.push(Bullet::enemy(muzzle, config));
    state.alien_fire_cooldown_secs =
        LevelProfile::for_level(config, state.level).alien_fire_cooldown_secs;
    events.push(GameEvent::AlienFired {
        row: shooter.row,
        col: shooter.col,
    });
    trace!("alien ({}, {}) fired", shooter.row, shooter.col);
}
