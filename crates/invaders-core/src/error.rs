//! Configuration errors reported by `GameConfig::validate`.

/// A rejected configuration. Values are never clamped silently.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be a non-negative finite number, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must lie in ({min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must be at least 1")]
    Zero { field: &'static str },
    #[error("formation_max_rows ({max}) is smaller than formation_rows ({rows})")]
    RowCap { rows: u32, max: u32 },
    #[error("formation is {needed} wide but the playfield is only {width}")]
    FormationTooWide { needed: f32, width: f32 },
    #[error("{what} does not fit inside the playfield height {height}")]
    OutsidePlayfield { what: &'static str, height: f32 },
    #[error("ufo spawn window is inverted: min {min}s > max {max}s")]
    InvertedUfoWindow { min: f64, max: f64 },
    #[error("ufo_points must list at least one value")]
    NoUfoPoints,
}
