//! Game configuration loaded from TOML.

use crate::board::Board;
use crate::types::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a new game.
///
/// ```toml
/// first_turn = "White"
/// layout = '''
/// ....................
/// ..B.B.BBBBBBBB.B.B..
/// ...
/// '''
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player who makes the first move.
    #[serde(default = "default_first_turn")]
    first_turn: Player,

    /// Starting position as a 20-row diagram (`.`, `B`, `W`).
    /// The standard opening when absent.
    #[serde(default)]
    layout: Option<String>,
}

#[instrument]
fn default_first_turn() -> Player {
    Player::Black
}

impl GameConfig {
    /// Standard opening, Black to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            first_turn: default_first_turn(),
            layout: None,
        }
    }

    /// Sets the player who moves first.
    pub fn with_first_turn(mut self, first_turn: Player) -> Self {
        self.first_turn = first_turn;
        self
    }

    /// Sets a custom starting layout diagram.
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        // Surface layout errors at load time rather than at game start.
        config.board()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            first_turn = %config.first_turn,
            custom_layout = config.layout.is_some(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Builds the starting board described by this configuration.
    #[instrument(skip(self))]
    pub fn board(&self) -> Result<Board, ConfigError> {
        match &self.layout {
            None => Ok(Board::standard()),
            Some(diagram) => Board::from_diagram(diagram)
                .map_err(|e| ConfigError::new(format!("Invalid layout: {}", e))),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_standard() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::new());
        assert_eq!(*config.first_turn(), Player::Black);
        assert_eq!(config.board().unwrap(), Board::standard());
    }

    #[test]
    fn test_first_turn() {
        let config = GameConfig::from_toml_str("first_turn = \"White\"").unwrap();
        assert_eq!(*config.first_turn(), Player::White);
    }

    #[test]
    fn test_bad_player_rejected() {
        let err = GameConfig::from_toml_str("first_turn = \"Red\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_bad_layout_rejected() {
        let err = GameConfig::from_toml_str("layout = \"..B..\"").unwrap_err();
        assert!(err.message.contains("Invalid layout"), "{}", err);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new().with_first_turn(Player::White);
        assert_eq!(*config.first_turn(), Player::White);
        assert!(config.layout().is_none());
    }
}
