//! Game configuration.
//!
//! Every tunable the simulation reads lives here and is passed into the
//! engine explicitly. All fields have defaults, so a TOML file only needs
//! the values it changes.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. Same seed + same inputs = same game.
    pub seed: u64,
    /// Converts elapsed seconds into elapsed ticks for movement.
    pub tick_rate: f64,

    pub width: f32,
    pub height: f32,

    pub initial_lives: u32,
    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_bottom_offset: f32,
    pub player_fire_cooldown_secs: f64,
    pub max_friendly_bullets: usize,
    pub hit_invulnerability_ticks: f32,
    pub level_invulnerability_ticks: f32,

    pub friendly_bullet_speed: f32,
    pub enemy_bullet_speed: f32,
    pub bullet_radius: f32,
    pub bullet_margin: f32,

    pub formation_rows: u32,
    pub formation_cols: u32,
    pub formation_max_rows: u32,
    pub alien_width: f32,
    pub alien_height: f32,
    pub alien_x_gap: f32,
    pub alien_y_gap: f32,
    pub formation_top: f32,
    pub formation_speed: f32,
    pub formation_speed_per_level: f32,
    pub formation_speed_up: f32,
    pub formation_drop: f32,
    pub formation_bottom_margin: f32,
    pub alien_points: u32,

    pub alien_fire_cooldown_secs: f64,
    pub alien_fire_cooldown_decay: f64,
    pub alien_fire_cooldown_min_secs: f64,

    pub ufo_enabled: bool,
    pub ufo_speed: f32,
    pub ufo_width: f32,
    pub ufo_height: f32,
    pub ufo_y: f32,
    pub ufo_spawn_min_secs: f64,
    pub ufo_spawn_max_secs: f64,
    pub ufo_points: Vec<u32>,

    /// 0 disables barriers.
    pub barrier_count: u32,
    pub barrier_width: f32,
    pub barrier_height: f32,
    pub barrier_bottom_offset: f32,
    pub barrier_health: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            initial_lives: PLAYER_LIVES,
            player_speed: PLAYER_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,
            player_fire_cooldown_secs: PLAYER_FIRE_COOLDOWN_SECS,
            max_friendly_bullets: MAX_FRIENDLY_BULLETS,
            hit_invulnerability_ticks: HIT_INVULNERABILITY_TICKS,
            level_invulnerability_ticks: LEVEL_INVULNERABILITY_TICKS,
            friendly_bullet_speed: FRIENDLY_BULLET_SPEED,
            enemy_bullet_speed: ENEMY_BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            bullet_margin: BULLET_MARGIN,
            formation_rows: FORMATION_ROWS,
            formation_cols: FORMATION_COLS,
            formation_max_rows: FORMATION_MAX_ROWS,
            alien_width: ALIEN_WIDTH,
            alien_height: ALIEN_HEIGHT,
            alien_x_gap: ALIEN_X_GAP,
            alien_y_gap: ALIEN_Y_GAP,
            formation_top: FORMATION_TOP,
            formation_speed: FORMATION_SPEED,
            formation_speed_per_level: FORMATION_SPEED_PER_LEVEL,
            formation_speed_up: FORMATION_SPEED_UP,
            formation_drop: FORMATION_DROP,
            formation_bottom_margin: FORMATION_BOTTOM_MARGIN,
            alien_points: ALIEN_POINTS,
            alien_fire_cooldown_secs: ALIEN_FIRE_COOLDOWN_SECS,
            alien_fire_cooldown_decay: ALIEN_FIRE_COOLDOWN_DECAY,
            alien_fire_cooldown_min_secs: ALIEN_FIRE_COOLDOWN_MIN_SECS,
            ufo_enabled: true,
            ufo_speed: UFO_SPEED,
            ufo_width: UFO_WIDTH,
            ufo_height: UFO_HEIGHT,
            ufo_y: UFO_Y,
            ufo_spawn_min_secs: UFO_SPAWN_MIN_SECS,
            ufo_spawn_max_secs: UFO_SPAWN_MAX_SECS,
            ufo_points: UFO_POINTS.to_vec(),
            barrier_count: BARRIER_COUNT,
            barrier_width: BARRIER_WIDTH,
            barrier_height: BARRIER_HEIGHT,
            barrier_bottom_offset: BARRIER_BOTTOM_OFFSET,
            barrier_health: BARRIER_HEALTH,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn at_least_one(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(ConfigError::Zero { field })
    }
}

impl GameConfig {
    /// Check every field. The first violation found is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("tick_rate", self.tick_rate)?;
        positive("width", self.width as f64)?;
        positive("height", self.height as f64)?;

        at_least_one("initial_lives", self.initial_lives as u64)?;
        positive("player_speed", self.player_speed as f64)?;
        positive("player_width", self.player_width as f64)?;
        positive("player_height", self.player_height as f64)?;
        positive("player_bottom_offset", self.player_bottom_offset as f64)?;
        non_negative("player_fire_cooldown_secs", self.player_fire_cooldown_secs)?;
        at_least_one("max_friendly_bullets", self.max_friendly_bullets as u64)?;
        non_negative("hit_invulnerability_ticks", self.hit_invulnerability_ticks as f64)?;
        non_negative(
            "level_invulnerability_ticks",
            self.level_invulnerability_ticks as f64,
        )?;

        positive("friendly_bullet_speed", self.friendly_bullet_speed as f64)?;
        positive("enemy_bullet_speed", self.enemy_bullet_speed as f64)?;
        positive("bullet_radius", self.bullet_radius as f64)?;
        non_negative("bullet_margin", self.bullet_margin as f64)?;

        at_least_one("formation_rows", self.formation_rows as u64)?;
        at_least_one("formation_cols", self.formation_cols as u64)?;
        if self.formation_max_rows < self.formation_rows {
            return Err(ConfigError::RowCap {
                rows: self.formation_rows,
                max: self.formation_max_rows,
            });
        }
        positive("alien_width", self.alien_width as f64)?;
        positive("alien_height", self.alien_height as f64)?;
        positive("alien_x_gap", self.alien_x_gap as f64)?;
        positive("alien_y_gap", self.alien_y_gap as f64)?;
        positive("formation_speed", self.formation_speed as f64)?;
        non_negative(
            "formation_speed_per_level",
            self.formation_speed_per_level as f64,
        )?;
        non_negative("formation_speed_up", self.formation_speed_up as f64)?;
        non_negative("formation_drop", self.formation_drop as f64)?;
        non_negative("formation_top", self.formation_top as f64)?;
        non_negative(
            "formation_bottom_margin",
            self.formation_bottom_margin as f64,
        )?;

        let needed = self.formation_span();
        if needed >= self.width {
            return Err(ConfigError::FormationTooWide {
                needed,
                width: self.width,
            });
        }
        let tallest = self.formation_top
            + (self.formation_max_rows - 1) as f32 * self.alien_y_gap
            + self.alien_height * 0.5;
        if tallest >= self.height - self.formation_bottom_margin {
            return Err(ConfigError::OutsidePlayfield {
                what: "formation",
                height: self.height,
            });
        }
        let player_half = self.player_height * 0.5;
        if self.player_bottom_offset < player_half
            || self.player_bottom_offset + player_half > self.height
        {
            return Err(ConfigError::OutsidePlayfield {
                what: "player band",
                height: self.height,
            });
        }

        positive("alien_fire_cooldown_secs", self.alien_fire_cooldown_secs)?;
        let decay = self.alien_fire_cooldown_decay;
        if !(decay > 0.0 && decay <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "alien_fire_cooldown_decay",
                value: decay,
                min: 0.0,
                max: 1.0,
            });
        }
        positive(
            "alien_fire_cooldown_min_secs",
            self.alien_fire_cooldown_min_secs,
        )?;
        if self.alien_fire_cooldown_min_secs > self.alien_fire_cooldown_secs {
            return Err(ConfigError::OutOfRange {
                field: "alien_fire_cooldown_min_secs",
                value: self.alien_fire_cooldown_min_secs,
                min: 0.0,
                max: self.alien_fire_cooldown_secs,
            });
        }

        if self.ufo_enabled {
            positive("ufo_speed", self.ufo_speed as f64)?;
            positive("ufo_width", self.ufo_width as f64)?;
            positive("ufo_height", self.ufo_height as f64)?;
            non_negative("ufo_y", self.ufo_y as f64)?;
            non_negative("ufo_spawn_min_secs", self.ufo_spawn_min_secs)?;
            non_negative("ufo_spawn_max_secs", self.ufo_spawn_max_secs)?;
            if self.ufo_spawn_min_secs > self.ufo_spawn_max_secs {
                return Err(ConfigError::InvertedUfoWindow {
                    min: self.ufo_spawn_min_secs,
                    max: self.ufo_spawn_max_secs,
                });
            }
            if self.ufo_points.is_empty() {
                return Err(ConfigError::NoUfoPoints);
            }
        }

        if self.barrier_count > 0 {
            positive("barrier_width", self.barrier_width as f64)?;
            positive("barrier_height", self.barrier_height as f64)?;
            at_least_one("barrier_health", self.barrier_health as u64)?;
            if self.barrier_bottom_offset <= 0.0 || self.barrier_bottom_offset >= self.height {
                return Err(ConfigError::OutsidePlayfield {
                    what: "barrier row",
                    height: self.height,
                });
            }
        }

        Ok(())
    }

    /// Horizontal extent of a full formation row, edge to edge.
    pub fn formation_span(&self) -> f32 {
        (self.formation_cols.saturating_sub(1)) as f32 * self.alien_x_gap + self.alien_width
    }

    /// Convert elapsed seconds into elapsed (fractional) ticks.
    pub fn ticks_for(&self, elapsed_secs: f64) -> f32 {
        (elapsed_secs * self.tick_rate) as f32
    }
}
