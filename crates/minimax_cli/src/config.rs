//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use minimax_board::Player;
use minimax_engine::SearchMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a human-vs-engine game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark played by the human.
    #[serde(default = "default_human")]
    human: Player,

    /// Whether the human makes the first move.
    #[serde(default = "default_human_first")]
    human_first: bool,

    /// How the engine searches.
    #[serde(default)]
    mode: SearchMode,
}

fn default_human() -> Player {
    Player::X
}

fn default_human_first() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            human_first: default_human_first(),
            mode: SearchMode::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human, mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces settings with any values given on the command line.
    pub fn with_overrides(
        mut self,
        human: Option<Player>,
        engine_first: bool,
        mode: Option<SearchMode>,
    ) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        if engine_first {
            self.human_first = false;
        }
        if let Some(mode) = mode {
            self.mode = mode;
        }
        self
    }

    /// Mark played by the engine.
    pub fn engine(&self) -> Player {
        self.human.opponent()
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
