//! Snapshot system: builds a `GameStateSnapshot` from the game state.
//!
//! Read-only; it never modifies the state.

use glam::Vec2;

use invaders_core::config::GameConfig;
use invaders_core::enums::GamePhase;
use invaders_core::events::GameEvent;
use invaders_core::state::*;

use crate::engine::GameState;
use crate::entities::{Entity, Player};
use crate::formation::Formation;

pub fn build_snapshot(
    state: &GameState,
    config: &GameConfig,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: state.time,
        phase: state.phase,
        paused: state.phase == GamePhase::Paused,
        game_over: state.phase == GamePhase::GameOver,
        game_over_reason: state.game_over_reason,
        score: state.score,
        lives: state.player.lives,
        level: state.level,
        playfield: Vec2::new(config.width, config.height),
        player: build_player(&state.player),
        bullets: state
            .bullets
            .iter()
            .map(|b| BulletView {
                position: b.position,
                bounds: b.bounding_box(),
                friendly: b.friendly,
            })
            .collect(),
        aliens: build_aliens(&state.formation),
        ufo: state.ufo.as_ref().map(|u| UfoView {
            position: u.position,
            bounds: u.bounding_box(),
            heading: u.heading,
            points: u.points,
        }),
        barriers: state
            .barriers
            .iter()
            .map(|b| BarrierView {
                index: b.index,
                position: b.position,
                bounds: b.bounding_box(),
                health: b.health,
                max_health: b.max_health,
            })
            .collect(),
        formation: FormationView {
            offset: state.formation.offset(),
            heading: state.formation.heading(),
            speed: state.formation.current_speed(),
            alive: state.formation.alive_count() as u32,
            initial: state.formation.initial_count() as u32,
        },
        events,
    }
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        position: player.position,
        bounds: player.bounding_box(),
        invulnerable_ticks: player.invulnerable_ticks,
        fire_ready: player.can_fire(),
    }
}

/// Living aliens in (row, col) order.
fn build_aliens(formation: &Formation) -> Vec<AlienView> {
    formation
        .aliens()
        .map(|alien| AlienView {
            row: alien.id.row,
            col: alien.id.col,
            position: formation.position_of(alien),
            bounds: formation.alien_bounds(alien),
        })
        .collect()
}
