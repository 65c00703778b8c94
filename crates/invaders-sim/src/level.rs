//! Per-level difficulty profile.
//!
//! Higher levels bring more alien rows (up to a cap), a faster formation, and
//! a shorter enemy fire cooldown.

use invaders_core::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProfile {
    pub level: u32,
    pub rows: u32,
    pub cols: u32,
    /// Formation base speed (pixels per tick) before thinning speed-up.
    pub formation_speed: f32,
    pub alien_fire_cooldown_secs: f64,
}

impl LevelProfile {
    /// Profile for `level` (1-based; 0 is treated as 1).
    pub fn for_level(config: &GameConfig, level: u32) -> Self {
        let steps = level.max(1) - 1;
        let rows = config
            .formation_rows
            .saturating_add(steps / 2)
            .min(config.formation_max_rows);
        let formation_speed =
            config.formation_speed * (1.0 + config.formation_speed_per_level * steps as f32);
        let decay = config
            .alien_fire_cooldown_decay
            .powi(steps.min(i32::MAX as u32) as i32);
        let alien_fire_cooldown_secs =
            (config.alien_fire_cooldown_secs * decay).max(config.alien_fire_cooldown_min_secs);

        Self {
            level: level.max(1),
            rows,
            cols: config.formation_cols,
            formation_speed,
            alien_fire_cooldown_secs,
        }
    }

    pub fn alien_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}
