//! Game state snapshot: the read-only view handed to the presentation layer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::geometry::Aabb;
use crate::types::SimTime;

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub paused: bool,
    pub game_over: bool,
    pub game_over_reason: Option<GameOverReason>,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub playfield: Vec2,
    pub player: PlayerView,
    pub bullets: Vec<BulletView>,
    pub aliens: Vec<AlienView>,
    pub ufo: Option<UfoView>,
    pub barriers: Vec<BarrierView>,
    pub formation: FormationView,
    /// Events raised during the tick that produced this snapshot.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub bounds: Aabb,
    /// Remaining invulnerability in ticks. Renderers blink the ship while > 0.
    pub invulnerable_ticks: f32,
    pub fire_ready: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Vec2,
    pub bounds: Aabb,
    pub friendly: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlienView {
    pub row: u32,
    pub col: u32,
    pub position: Vec2,
    pub bounds: Aabb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UfoView {
    pub position: Vec2,
    pub bounds: Aabb,
    pub heading: Heading,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrierView {
    pub index: usize,
    pub position: Vec2,
    pub bounds: Aabb,
    pub health: u32,
    pub max_health: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormationView {
    pub offset: Vec2,
    pub heading: Heading,
    pub speed: f32,
    pub alive: u32,
    pub initial: u32,
}

/// One drawable box, for renderers that dispatch on kind only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: EntityKind,
    pub bounds: Aabb,
}

impl GameStateSnapshot {
    /// Every live entity as a `(kind, bounds)` pair.
    ///
    /// The player is omitted once the game is over.
    pub fn sprites(&self) -> Vec<Sprite> {
        let mut sprites = Vec::with_capacity(
            1 + self.bullets.len() + self.aliens.len() + self.barriers.len() + 1,
        );
        if !self.game_over {
            sprites.push(Sprite {
                kind: EntityKind::Player,
                bounds: self.player.bounds,
            });
        }
        sprites.extend(self.barriers.iter().map(|b| Sprite {
            kind: EntityKind::Barrier,
            bounds: b.bounds,
        }));
        sprites.extend(self.aliens.iter().map(|a| Sprite {
            kind: EntityKind::Alien,
            bounds: a.bounds,
        }));
        sprites.extend(self.ufo.iter().map(|u| Sprite {
            kind: EntityKind::Ufo,
            bounds: u.bounds,
        }));
        sprites.extend(self.bullets.iter().map(|b| Sprite {
            kind: EntityKind::Bullet,
            bounds: b.bounds,
        }));
        sprites
    }

    pub fn friendly_bullet_count(&self) -> usize {
        self.bullets.iter().filter(|b| b.friendly).count()
    }

    pub fn enemy_bullet_count(&self) -> usize {
        self.bullets.iter().filter(|b| !b.friendly).count()
    }
}
