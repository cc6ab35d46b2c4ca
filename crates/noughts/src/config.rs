//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::{Opponent, Session};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// Every field is optional in the file; missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name of the X player.
    #[serde(default = "default_player_a")]
    player_a: String,

    /// Name of the O player. When unset it follows the opponent, see
    /// [`GameConfig::player_b`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[getter(skip)]
    player_b: Option<String>,

    /// Who plays O.
    #[serde(default)]
    opponent: Opponent,

    /// Ply cap for the optimal opponent; unset searches the full tree.
    #[serde(default)]
    search_depth: Option<u8>,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_player_a() -> String {
    "Player 1".to_string()
}

fn default_log_filter() -> String {
    "warn,noughts=info,noughts_engine=info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_a: default_player_a(),
            player_b: None,
            opponent: Opponent::default(),
            search_depth: None,
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Name of the O player: the configured name, or a default that
    /// matches who sits in seat B.
    pub fn player_b(&self) -> &str {
        match (&self.player_b, self.opponent) {
            (Some(name), _) => name.as_str(),
            (None, Opponent::Human) => "Player 2",
            (None, Opponent::Random | Opponent::Optimal) => "Computer",
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(opponent = %config.opponent, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        opponent: Option<Opponent>,
        player_a: Option<String>,
        player_b: Option<String>,
        search_depth: Option<u8>,
    ) -> Self {
        if let Some(opponent) = opponent {
            self.opponent = opponent;
        }
        if let Some(name) = player_a {
            self.player_a = name;
        }
        if player_b.is_some() {
            self.player_b = player_b;
        }
        if search_depth.is_some() {
            self.search_depth = search_depth;
        }
        self
    }

    /// Builds a session from these settings.
    pub fn session(&self) -> Session {
        Session::new(
            self.player_a.clone(),
            self.player_b(),
            self.opponent,
            self.search_depth,
        )
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
