//! Collision resolution.
//!
//! Pairs are found first and applied afterwards: every bullet is matched
//! against the state as it was at the start of the pass, and a bullet that
//! has been consumed by one target is never offered to another. Order of
//! precedence is aliens, UFO, barriers, player.

use log::debug;

use invaders_core::config::GameConfig;
use invaders_core::events::GameEvent;

use crate::engine::GameState;
use crate::entities::Entity;
use crate::formation::AlienId;

/// What one collision pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    pub aliens_destroyed: u32,
    pub ufo_destroyed: bool,
    pub barrier_hits: u32,
    pub player_hits: u32,
}

pub fn run(
    state: &mut GameState,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();
    let mut consumed = vec![false; state.bullets.len()];

    resolve_aliens(state, config, &mut consumed, &mut outcome, events);
    resolve_ufo(state, &mut consumed, &mut outcome, events);
    resolve_barriers(state, &mut consumed, &mut outcome, events);
    resolve_player(state, config, &mut consumed, &mut outcome, events);

    let mut flags = consumed.into_iter();
    state
        .bullets
        .retain(|_| !flags.next().unwrap_or(false));

    outcome
}

/// Friendly bullets against living aliens. Each bullet kills at most one
/// alien and each alien dies at most once.
fn resolve_aliens(
    state: &mut GameState,
    config: &GameConfig,
    consumed: &mut [bool],
    outcome: &mut CollisionOutcome,
    events: &mut Vec<GameEvent>,
) {
    let mut kills: Vec<AlienId> = Vec::new();

    for (i, bullet) in state.bullets.iter().enumerate() {
        if !bullet.friendly || consumed[i] {
            continue;
        }
        let bullet_box = bullet.bounding_box();
        let target = state
            .formation
            .aliens()
            .filter(|alien| !kills.contains(&alien.id))
            .find(|alien| state.formation.alien_bounds(alien).intersects(&bullet_box))
            .map(|alien| alien.id);

        if let Some(id) = target {
            consumed[i] = true;
            kills.push(id);
        }
    }

    for id in kills {
        if state.formation.destroy(id).is_none() {
            continue;
        }
        state.score = state.score.saturating_add(config.alien_points);
        outcome.aliens_destroyed += 1;
        events.push(GameEvent::AlienDestroyed {
            row: id.row,
            col: id.col,
            points: config.alien_points,
        });
    }
}

/// The first remaining friendly bullet touching the UFO destroys it.
fn resolve_ufo(
    state: &mut GameState,
    consumed: &mut [bool],
    outcome: &mut CollisionOutcome,
    events: &mut Vec<GameEvent>,
) {
    let Some(ufo_box) = state.ufo.as_ref().map(|ufo| ufo.bounding_box()) else {
        return;
    };

    let hit = state
        .bullets
        .iter()
        .enumerate()
        .find(|(i, b)| b.friendly && !consumed[*i] && b.bounding_box().intersects(&ufo_box))
        .map(|(i, _)| i);

    if let Some(i) = hit {
        consumed[i] = true;
        if let Some(ufo) = state.ufo.take() {
            state.score = state.score.saturating_add(ufo.points);
            outcome.ufo_destroyed = true;
            events.push(GameEvent::UfoDestroyed { points: ufo.points });
            debug!("ufo destroyed for {} points", ufo.points);
        }
    }
}

/// Any remaining bullet, friendly or enemy, is absorbed by the first
/// barrier it touches. Destroyed barriers stop absorbing immediately.
fn resolve_barriers(
    state: &mut GameState,
    consumed: &mut [bool],
    outcome: &mut CollisionOutcome,
    events: &mut Vec<GameEvent>,
) {
    if state.barriers.is_empty() {
        return;
    }

    let boxes: Vec<_> = state.barriers.iter().map(|b| b.bounding_box()).collect();

    for (i, bullet) in state.bullets.iter().enumerate() {
        if consumed[i] {
            continue;
        }
        let bullet_box = bullet.bounding_box();
        let target = state
            .barriers
            .iter()
            .zip(&boxes)
            .position(|(barrier, bounds)| !barrier.is_destroyed() && bounds.intersects(&bullet_box));

        let Some(slot) = target else {
            continue;
        };
        consumed[i] = true;
        outcome.barrier_hits += 1;

        let barrier = &mut state.barriers[slot];
        let destroyed = barrier.absorb_hit();
        events.push(GameEvent::BarrierHit {
            index: barrier.index,
            health: barrier.health,
        });
        if destroyed {
            events.push(GameEvent::BarrierDestroyed {
                index: barrier.index,
            });
            debug!("barrier {} destroyed", barrier.index);
        }
    }

    state.barriers.retain(|b| !b.is_destroyed());
}

/// Enemy bullets against the player. A hit grants invulnerability, so at
/// most one life is lost per tick.
fn resolve_player(
    state: &mut GameState,
    config: &GameConfig,
    consumed: &mut [bool],
    outcome: &mut CollisionOutcome,
    events: &mut Vec<GameEvent>,
) {
    if state.player.is_invulnerable() || state.player.lives == 0 {
        return;
    }
    let player_box = state.player.bounding_box();

    let hit = state
        .bullets
        .iter()
        .enumerate()
        .find(|(i, b)| !b.friendly && !consumed[*i] && b.bounding_box().intersects(&player_box))
        .map(|(i, _)| i);

    if let Some(i) = hit {
        consumed[i] = true;
        state.player.lives -= 1;
        state.player.invulnerable_ticks = config.hit_invulnerability_ticks;
        outcome.player_hits += 1;
        events.push(GameEvent::PlayerHit {
            lives_remaining: state.player.lives,
        });
        debug!("player hit; {} lives remaining", state.player.lives);
    }
}
