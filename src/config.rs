use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Dimensions, GameEngine, Player, Seat, DEFAULT_COLS, DEFAULT_ROWS};

/// Largest accepted board height or width.
pub const MAX_BOARD_SIDE: usize = 64;

/// Board size for new games.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_ROWS,
            width: DEFAULT_COLS,
        }
    }
}

impl BoardConfig {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.height, self.width)
    }
}

/// Display data for one player. Colors are names ("red") or "#rrggbb".
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: String,
}

impl PlayerConfig {
    pub fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.color.clone())
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first: PlayerConfig,
    pub second: PlayerConfig,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first: PlayerConfig {
                name: Seat::First.name().to_string(),
                color: "red".to_string(),
            },
            second: PlayerConfig {
                name: Seat::Second.name().to_string(),
                color: "yellow".to_string(),
            },
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self.board.height > MAX_BOARD_SIDE {
            return Err(ConfigError::Validation(format!(
                "board.height must be <= {MAX_BOARD_SIDE}"
            )));
        }
        if self.board.width > MAX_BOARD_SIDE {
            return Err(ConfigError::Validation(format!(
                "board.width must be <= {MAX_BOARD_SIDE}"
            )));
        }

        for (key, player) in [
            ("players.first", &self.players.first),
            ("players.second", &self.players.second),
        ] {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{key}.name must not be empty"
                )));
            }
            if player.color.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{key}.color must not be empty"
                )));
            }
        }

        if self
            .players
            .first
            .color
            .trim()
            .eq_ignore_ascii_case(self.players.second.color.trim())
        {
            return Err(ConfigError::Validation(
                "players.first.color and players.second.color must differ".into(),
            ));
        }

        Ok(())
    }

    /// Build a fresh game from this configuration.
    pub fn build_engine(&self) -> GameEngine {
        GameEngine::new(
            self.players.first.to_player(),
            self.players.second.to_player(),
            self.board.dimensions(),
        )
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
