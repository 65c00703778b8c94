//! Entity records for everything that is not part of the formation.
//!
//! Each entity mutates only itself in `advance`. Removal is always decided
//! by the owning collection, never by the entity.

use glam::Vec2;

use invaders_core::config::GameConfig;
use invaders_core::enums::{EntityKind, Heading, MoveDirection};
use invaders_core::geometry::Aabb;

/// Shared capability of the free-moving entity kinds.
pub trait Entity {
    fn kind(&self) -> EntityKind;
    /// Move forward by `elapsed_ticks` nominal ticks.
    fn advance(&mut self, elapsed_ticks: f32);
    fn bounding_box(&self) -> Aabb;
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// Horizontal limit of the playfield.
    pub field_width: f32,
    pub lives: u32,
    /// Remaining invulnerability in ticks. Damage is ignored while > 0.
    pub invulnerable_ticks: f32,
    /// Seconds until the next shot is allowed.
    pub fire_cooldown_secs: f64,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            position: Self::spawn_point(config),
            size: Vec2::new(config.player_width, config.player_height),
            speed: config.player_speed,
            field_width: config.width,
            lives: config.initial_lives,
            invulnerable_ticks: 0.0,
            fire_cooldown_secs: 0.0,
        }
    }

    /// Centre of the bottom band.
    pub fn spawn_point(config: &GameConfig) -> Vec2 {
        Vec2::new(config.width * 0.5, config.height - config.player_bottom_offset)
    }

    /// Apply horizontal movement, keeping the whole ship inside `[0, W]`.
    pub fn steer(&mut self, direction: MoveDirection, elapsed_ticks: f32) {
        let half = self.size.x * 0.5;
        let x = self.position.x + direction.sign() * self.speed * elapsed_ticks;
        self.position.x = x.clamp(half, self.field_width - half);
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ticks > 0.0
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown_secs <= 0.0
    }

    /// Where a fresh friendly bullet starts: just above the ship's nose.
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y - self.size.y * 0.5)
    }

    /// Count down the shot cooldown.
    pub fn cool_down(&mut self, elapsed_secs: f64) {
        self.fire_cooldown_secs = (self.fire_cooldown_secs - elapsed_secs).max(0.0);
    }
}

impl Entity for Player {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn advance(&mut self, elapsed_ticks: f32) {
        if self.invulnerable_ticks > 0.0 {
            self.invulnerable_ticks = (self.invulnerable_ticks - elapsed_ticks).max(0.0);
        }
    }

    fn bounding_box(&self) -> Aabb {
        Aabb::from_center(self.position, self.size)
    }
}

#[derive(Debug, Clone)]
pub struct Bullet {
    pub position: Vec2,
    /// Signed vertical speed per tick: negative travels up.
    pub velocity_y: f32,
    pub friendly: bool,
    pub radius: f32,
}

impl Bullet {
    /// An upward bullet fired by the player.
    pub fn friendly(position: Vec2, config: &GameConfig) -> Self {
        Self {
            position,
            velocity_y: -config.friendly_bullet_speed,
            friendly: true,
            radius: config.bullet_radius,
        }
    }

    /// A downward bullet fired by an alien.
    pub fn enemy(position: Vec2, config: &GameConfig) -> Self {
        Self {
            position,
            velocity_y: config.enemy_bullet_speed,
            friendly: false,
            radius: config.bullet_radius,
        }
    }

    /// Still within `[-margin, height + margin]` vertically.
    pub fn in_bounds(&self, height: f32, margin: f32) -> bool {
        self.position.y >= -margin && self.position.y <= height + margin
    }
}

impl Entity for Bullet {
    fn kind(&self) -> EntityKind {
        EntityKind::Bullet
    }

    fn advance(&mut self, elapsed_ticks: f32) {
        self.position.y += self.velocity_y * elapsed_ticks;
    }

    fn bounding_box(&self) -> Aabb {
        Aabb::from_center(self.position, Vec2::splat(self.radius * 2.0))
    }
}

/// Bonus saucer crossing the top of the playfield.
#[derive(Debug, Clone)]
pub struct Ufo {
    pub position: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub heading: Heading,
    pub points: u32,
}

impl Ufo {
    /// Place a UFO just outside the edge it enters from.
    pub fn entering(heading: Heading, points: u32, config: &GameConfig) -> Self {
        let half = config.ufo_width * 0.5;
        let x = match heading {
            Heading::Right => -half,
            Heading::Left => config.width + half,
        };
        Self {
            position: Vec2::new(x, config.ufo_y),
            size: Vec2::new(config.ufo_width, config.ufo_height),
            speed: config.ufo_speed,
            heading,
            points,
        }
    }

    /// True once the UFO has fully crossed the far edge.
    pub fn has_left(&self, field_width: f32) -> bool {
        let half = self.size.x * 0.5;
        match self.heading {
            Heading::Right => self.position.x - half > field_width,
            Heading::Left => self.position.x + half < 0.0,
        }
    }
}

impl Entity for Ufo {
    fn kind(&self) -> EntityKind {
        EntityKind::Ufo
    }

    fn advance(&mut self, elapsed_ticks: f32) {
        self.position.x += self.heading.sign() * self.speed * elapsed_ticks;
    }

    fn bounding_box(&self) -> Aabb {
        Aabb::from_center(self.position, self.size)
    }
}

/// Static cover that absorbs any bullet touching it.
#[derive(Debug, Clone)]
pub struct Barrier {
    /// Slot in the barrier row, stable while the level lasts.
    pub index: usize,
    pub position: Vec2,
    pub size: Vec2,
    pub health: u32,
    pub max_health: u32,
}

impl Barrier {
    pub fn new(index: usize, position: Vec2, config: &GameConfig) -> Self {
        Self {
            index,
            position,
            size: Vec2::new(config.barrier_width, config.barrier_height),
            health: config.barrier_health,
            max_health: config.barrier_health,
        }
    }

    /// Take one point of damage. Returns true if this destroyed the barrier.
    pub fn absorb_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }
}

impl Entity for Barrier {
    fn kind(&self) -> EntityKind {
        EntityKind::Barrier
    }

    /// Barriers never move.
    fn advance(&mut self, _elapsed_ticks: f32) {}

    fn bounding_box(&self) -> Aabb {
        Aabb::from_center(self.position, self.size)
    }
}
