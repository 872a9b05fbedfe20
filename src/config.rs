use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{validate_dimensions, Game};

/// Read by the binary when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "connect_n.toml";

pub const DEFAULT_ROWS: isize = 6;
pub const DEFAULT_COLUMNS: isize = 7;
pub const DEFAULT_CONNECT: isize = 4;

/// Board configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: isize,
    pub columns: isize,
    /// Markers in a row needed to win
    pub n: isize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            n: DEFAULT_CONNECT,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
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
        validate_dimensions(self.rows, self.columns, self.n)?;
        Ok(())
    }

    /// Build a fresh game from this configuration.
    pub fn new_game(&self) -> Result<Game, ConfigError> {
        Ok(Game::new(self.rows, self.columns, self.n)?)
    }
}
