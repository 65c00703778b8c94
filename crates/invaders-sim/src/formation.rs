//! Formation controller: the grid of aliens moving as one rigid body.
//!
//! Aliens never move on their own. Each keeps a fixed base position and the
//! formation applies a shared offset. Wall contact flips the heading and
//! drops the whole grid by one step.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::seq::IteratorRandom;
use rand::Rng;

use invaders_core::config::GameConfig;
use invaders_core::enums::Heading;
use invaders_core::geometry::Aabb;

/// Grid coordinates, stable for the lifetime of a formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlienId {
    pub row: u32,
    pub col: u32,
}

#[derive(Debug, Clone)]
pub struct Alien {
    pub id: AlienId,
    /// Centre position before the formation offset is applied.
    pub base: Vec2,
}

#[derive(Debug, Clone)]
pub struct Formation {
    /// Only living aliens are kept; a destroyed alien is removed.
    aliens: BTreeMap<AlienId, Alien>,
    initial_count: usize,
    offset: Vec2,
    heading: Heading,
    base_speed: f32,
    speed_up: f32,
    drop: f32,
    alien_size: Vec2,
    field: Vec2,
    bottom_margin: f32,
}

impl Formation {
    /// Lay out a `rows` x `cols` grid centred horizontally under `formation_top`.
    pub fn new(rows: u32, cols: u32, base_speed: f32, config: &GameConfig) -> Self {
        let span = cols.saturating_sub(1) as f32 * config.alien_x_gap;
        let start_x = (config.width - span) * 0.5;

        let mut aliens = BTreeMap::new();
        for row in 0..rows {
            for col in 0..cols {
                let id = AlienId { row, col };
                let base = Vec2::new(
                    start_x + col as f32 * config.alien_x_gap,
                    config.formation_top + row as f32 * config.alien_y_gap,
                );
                aliens.insert(id, Alien { id, base });
            }
        }

        Self {
            initial_count: aliens.len(),
            aliens,
            offset: Vec2::ZERO,
            heading: Heading::Right,
            base_speed,
            speed_up: config.formation_speed_up,
            drop: config.formation_drop,
            alien_size: Vec2::new(config.alien_width, config.alien_height),
            field: Vec2::new(config.width, config.height),
            bottom_margin: config.formation_bottom_margin,
        }
    }

    pub fn alive_count(&self) -> usize {
        self.aliens.len()
    }

    pub fn initial_count(&self) -> usize {
        self.initial_count
    }

    pub fn is_cleared(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Speed grows with the fraction of aliens destroyed.
    pub fn current_speed(&self) -> f32 {
        let initial = self.initial_count.max(1) as f32;
        let destroyed_fraction = 1.0 - self.aliens.len() as f32 / initial;
        self.base_speed * (1.0 + self.speed_up * destroyed_fraction)
    }

    /// Living aliens in (row, col) order.
    pub fn aliens(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.values()
    }

    pub fn get(&self, id: AlienId) -> Option<&Alien> {
        self.aliens.get(&id)
    }

    pub fn position_of(&self, alien: &Alien) -> Vec2 {
        alien.base + self.offset
    }

    pub fn alien_bounds(&self, alien: &Alien) -> Aabb {
        Aabb::from_center(self.position_of(alien), self.alien_size)
    }

    /// Union of all living aliens' boxes.
    pub fn bounds(&self) -> Option<Aabb> {
        self.aliens
            .values()
            .map(|alien| self.alien_bounds(alien))
            .reduce(|acc, b| Aabb::new(acc.min.min(b.min), acc.max.max(b.max)))
    }

    /// Remove a living alien. Returns it if it was still alive.
    pub fn destroy(&mut self, id: AlienId) -> Option<Alien> {
        self.aliens.remove(&id)
    }

    /// Advance the grid and report whether it has reached the bottom band.
    ///
    /// Wall contact is only checked on the side the formation is moving
    /// towards, and any overshoot is pulled back inside the playfield, so
    /// one contact produces exactly one flip and one drop.
    pub fn advance(&mut self, elapsed_ticks: f32) -> bool {
        if self.aliens.is_empty() {
            return false;
        }

        if elapsed_ticks > 0.0 {
            self.offset.x += self.heading.sign() * self.current_speed() * elapsed_ticks;

            if let Some(extent) = self.bounds() {
                let overshoot = match self.heading {
                    Heading::Right if extent.max.x >= self.field.x => {
                        Some(extent.max.x - self.field.x)
                    }
                    Heading::Left if extent.min.x <= 0.0 => Some(extent.min.x),
                    _ => None,
                };
                if let Some(overshoot) = overshoot {
                    self.offset.x -= overshoot;
                    self.offset.y += self.drop;
                    self.heading = self.heading.reversed();
                }
            }
        }

        debug_assert!(self.offset.is_finite(), "formation offset diverged");
        self.reached_bottom()
    }

    /// Any living alien's bottom edge at or below `height - bottom_margin`.
    pub fn reached_bottom(&self) -> bool {
        let limit = self.field.y - self.bottom_margin;
        self.aliens
            .values()
            .any(|alien| self.alien_bounds(alien).max.y >= limit)
    }

    /// Pick a living alien uniformly at random as the next shooter.
    ///
    /// Returns its id and the point under its bottom edge where the bullet starts.
    pub fn random_shooter<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(AlienId, Vec2)> {
        let alien = self.aliens.values().choose(rng)?;
        let position = self.position_of(alien);
        Some((
            alien.id,
            Vec2::new(position.x, position.y + self.alien_size.y * 0.5),
        ))
    }

    /// Move the whole grid; used by tests to stage edge and bottom cases.
    #[cfg(test)]
    pub fn shift(&mut self, delta: Vec2) {
        self.offset += delta;
    }
}
