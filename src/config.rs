use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::ui::palette;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

/// Board shape. The engine accepts any positive dimensions; these are the
/// classic Connect Four defaults.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Default display colors, by palette name. The setup screen starts from
/// these; they never reach the engine.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: String,
    pub two: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: "red".to_string(),
            two: "yellow".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }

        let one = palette::find(&self.players.one).ok_or_else(|| {
            ConfigError::Validation(format!(
                "players.one: unknown color '{}' (expected one of: {})",
                self.players.one,
                palette::names().join(", ")
            ))
        })?;
        let two = palette::find(&self.players.two).ok_or_else(|| {
            ConfigError::Validation(format!(
                "players.two: unknown color '{}' (expected one of: {})",
                self.players.two,
                palette::names().join(", ")
            ))
        })?;
        if one.name == two.name {
            return Err(ConfigError::Validation(
                "players.one and players.two must use different colors".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert_eq!(config.board.width, 7);
        assert_eq!(config.board.height, 6);
        assert_eq!(config.players.one, "red");
        assert_eq!(config.players.two, "yellow");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str("[board]\nwidth = 9\n").unwrap();
        assert_eq!(config.board.width, 9);
        assert_eq!(config.board.height, 6);
        assert_eq!(config.players.one, "red");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut config = AppConfig::default();
        config.board.width = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("board.width"));

        let mut config = AppConfig::default();
        config.board.height = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("board.height"));
    }

    #[test]
    fn test_unknown_color_rejected() {
        let mut config = AppConfig::default();
        config.players.one = "chartreuse".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("players.one"));
        assert!(err.to_string().contains("chartreuse"));
    }

    #[test]
    fn test_duplicate_colors_rejected() {
        let mut config = AppConfig::default();
        config.players.two = "RED".to_string(); // lookup is case-insensitive
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("different colors"));
    }

    #[test]
    fn test_non_integer_dimension_fails_to_parse() {
        let result: Result<AppConfig, _> = toml::from_str("[board]\nwidth = 6.5\n");
        assert!(result.is_err());
    }
}
