//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strictly_memory::{GridSize, Season, SelectionPolicy, SessionSettings};
use tracing::{debug, info, instrument};

/// Configuration for a memory game.
///
/// Every key is optional in the file; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_", strip_option)]
pub struct GameConfig {
    /// Grid size: the board shows `grid_size × 4` tiles.
    grid_size: GridSize,

    /// Milliseconds both tiles of an attempt stay visible.
    reveal_delay_ms: u64,

    /// Tiles per row when rendering.
    #[setters(skip)]
    columns: usize,

    /// JSON icon catalog; the bundled catalog is used when unset.
    icons_path: Option<PathBuf>,

    /// Season override; today's season is used when unset.
    season: Option<Season>,

    /// Seed for a reproducible deal.
    seed: Option<u64>,

    /// Handling of clicks while a pair is resolving.
    selection_policy: SelectionPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::DEFAULT,
            reveal_delay_ms: 600,
            columns: 4,
            icons_path: None,
            season: None,
            seed: None,
            selection_policy: SelectionPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(grid_size = %config.grid_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.columns == 0 {
            return Err(ConfigError::new("columns must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Season to deal from: the override, or today's.
    pub fn resolved_season(&self) -> Season {
        self.season.unwrap_or_else(Season::current)
    }

    /// Engine settings derived from this configuration.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings::default()
            .with_reveal_delay(Duration::from_millis(self.reveal_delay_ms))
            .with_selection_policy(self.selection_policy)
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
