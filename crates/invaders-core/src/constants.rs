//! Default tuning parameters.
//!
//! These seed `GameConfig::default()`. Distances are playfield pixels,
//! speeds are pixels per nominal tick, cooldowns are seconds.

/// Nominal simulation tick rate (Hz).
pub const TICK_RATE: f64 = 60.0;

/// Longest elapsed time a single tick may cover (seconds).
pub const MAX_TICK_SECS: f64 = 0.25;

// --- Playfield ---

pub const PLAYFIELD_WIDTH: f32 = 800.0;
pub const PLAYFIELD_HEIGHT: f32 = 600.0;

// --- Player ---

pub const PLAYER_LIVES: u32 = 3;
pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 36.0;
/// Distance from the bottom of the playfield to the player's centre.
pub const PLAYER_BOTTOM_OFFSET: f32 = 60.0;
pub const PLAYER_FIRE_COOLDOWN_SECS: f64 = 0.3;
/// Concurrent friendly bullets allowed on screen.
pub const MAX_FRIENDLY_BULLETS: usize = 3;
/// Invulnerability granted after losing a life.
pub const HIT_INVULNERABILITY_TICKS: f32 = 120.0;
/// Invulnerability granted at the start of every level.
pub const LEVEL_INVULNERABILITY_TICKS: f32 = 60.0;

// --- Bullets ---

pub const FRIENDLY_BULLET_SPEED: f32 = 8.0;
pub const ENEMY_BULLET_SPEED: f32 = 5.0;
pub const BULLET_RADIUS: f32 = 4.0;
/// How far past the top/bottom edge a bullet may travel before removal.
pub const BULLET_MARGIN: f32 = 10.0;

// --- Formation ---

pub const FORMATION_ROWS: u32 = 4;
pub const FORMATION_COLS: u32 = 10;
pub const FORMATION_MAX_ROWS: u32 = 6;
pub const ALIEN_WIDTH: f32 = 36.0;
pub const ALIEN_HEIGHT: f32 = 24.0;
pub const ALIEN_X_GAP: f32 = 60.0;
pub const ALIEN_Y_GAP: f32 = 45.0;
/// Centre y of the first alien row.
pub const FORMATION_TOP: f32 = 80.0;
pub const FORMATION_SPEED: f32 = 0.5;
/// Fractional increase of the base formation speed per level.
pub const FORMATION_SPEED_PER_LEVEL: f32 = 0.15;
/// Extra speed fraction reached when only one alien is left.
pub const FORMATION_SPEED_UP: f32 = 0.5;
pub const FORMATION_DROP: f32 = 20.0;
/// Aliens reaching `height - FORMATION_BOTTOM_MARGIN` end the game.
pub const FORMATION_BOTTOM_MARGIN: f32 = 100.0;
pub const ALIEN_POINTS: u32 = 10;

// --- Enemy fire ---

pub const ALIEN_FIRE_COOLDOWN_SECS: f64 = 1.0;
/// Multiplier applied to the fire cooldown per level.
pub const ALIEN_FIRE_COOLDOWN_DECAY: f64 = 0.85;
pub const ALIEN_FIRE_COOLDOWN_MIN_SECS: f64 = 0.25;

// --- UFO ---

pub const UFO_SPEED: f32 = 2.0;
pub const UFO_WIDTH: f32 = 48.0;
pub const UFO_HEIGHT: f32 = 20.0;
pub const UFO_Y: f32 = 40.0;
pub const UFO_SPAWN_MIN_SECS: f64 = 15.0;
pub const UFO_SPAWN_MAX_SECS: f64 = 30.0;
pub const UFO_POINTS: [u32; 4] = [50, 100, 150, 300];

// --- Barriers ---

pub const BARRIER_COUNT: u32 = 4;
pub const BARRIER_WIDTH: f32 = 60.0;
pub const BARRIER_HEIGHT: f32 = 30.0;
/// Distance from the bottom of the playfield to the barriers' centre.
pub const BARRIER_BOTTOM_OFFSET: f32 = 150.0;
pub const BARRIER_HEALTH: u32 = 5;
