//! Factories for a new game and for each level's entity set.

use glam::Vec2;
use rand::Rng;

use invaders_core::config::GameConfig;
use invaders_core::enums::GamePhase;
use invaders_core::types::SimTime;

use crate::engine::GameState;
use crate::entities::{Barrier, Player};
use crate::formation::Formation;
use crate::level::LevelProfile;

/// Build the state for a brand-new game at level 1.
pub fn new_game<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> GameState {
    let profile = LevelProfile::for_level(config, 1);
    let mut player = Player::new(config);
    player.invulnerable_ticks = config.level_invulnerability_ticks;

    GameState {
        player,
        bullets: Vec::new(),
        formation: build_formation(config, &profile),
        ufo: None,
        barriers: build_barriers(config),
        score: 0,
        level: 1,
        phase: GamePhase::Playing,
        game_over_reason: None,
        alien_fire_cooldown_secs: profile.alien_fire_cooldown_secs,
        ufo_spawn_cooldown_secs: roll_ufo_cooldown(config, rng),
        time: SimTime::default(),
    }
}

/// Replace the per-level entities for `state.level`.
///
/// Score, lives and time carry over. Bullets and any UFO are discarded, the
/// player is re-centred with a fresh invulnerability window, and both enemy
/// cooldowns are re-armed.
pub fn start_level<R: Rng + ?Sized>(state: &mut GameState, config: &GameConfig, rng: &mut R) {
    let profile = LevelProfile::for_level(config, state.level);

    state.formation = build_formation(config, &profile);
    state.barriers = build_barriers(config);
    state.bullets.clear();
    state.ufo = None;

    state.player.position = Player::spawn_point(config);
    state.player.invulnerable_ticks = config.level_invulnerability_ticks;
    state.player.fire_cooldown_secs = 0.0;

    state.alien_fire_cooldown_secs = profile.alien_fire_cooldown_secs;
    state.ufo_spawn_cooldown_secs = roll_ufo_cooldown(config, rng);
}

pub fn build_formation(config: &GameConfig, profile: &LevelProfile) -> Formation {
    Formation::new(profile.rows, profile.cols, profile.formation_speed, config)
}

/// Evenly spaced barriers across the playfield above the player band.
pub fn build_barriers(config: &GameConfig) -> Vec<Barrier> {
    let count = config.barrier_count as usize;
    let y = config.height - config.barrier_bottom_offset;
    let spacing = config.width / (count + 1) as f32;
    (0..count)
        .map(|i| Barrier::new(i, Vec2::new(spacing * (i + 1) as f32, y), config))
        .collect()
}

/// Seconds until the next UFO may appear.
pub fn roll_ufo_cooldown<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> f64 {
    if config.ufo_spawn_max_secs > config.ufo_spawn_min_secs {
        rng.gen_range(config.ufo_spawn_min_secs..=config.ufo_spawn_max_secs)
    } else {
        config.ufo_spawn_min_secs
    }
}
