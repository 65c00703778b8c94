//! Config file loading.
//!
//! A config file is TOML holding any subset of `GameConfig` fields; missing
//! fields keep their defaults.

use std::fs;
use std::path::Path;

use log::info;

use invaders_core::config::GameConfig;

use crate::error::AppError;

/// Load and validate the config at `path`, or the defaults when `None`.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig, AppError> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = fs::read_to_string(path)?;
    let config = parse_config(&text)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(text: &str) -> Result<GameConfig, AppError> {
    let config: GameConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_core::error::ConfigError;

    #[test]
    fn test_no_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = parse_config(
            r#"
            seed = 7
            initial_lives = 5
            ufo_enabled = false
            ufo_points = [10, 20]
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.initial_lives, 5);
        assert!(!config.ufo_enabled);
        assert_eq!(config.ufo_points, vec![10, 20]);
        assert_eq!(config.width, GameConfig::default().width);
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = parse_config("seed = \"not a number\"").unwrap_err();
        assert!(matches!(err, AppError::Toml(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = parse_config("initial_lives = 0").unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::Zero {
                field: "initial_lives"
            })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("invaders-config-{}.toml", std::process::id()));
        fs::write(&path, "formation_rows = 3\nbarrier_count = 0\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.formation_rows, 3);
        assert_eq!(config.barrier_count, 0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/invaders.toml"))).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
