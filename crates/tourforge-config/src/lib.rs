//! Configuration system for TourForge.
//!
//! Load tour construction settings from TOML or YAML files to control
//! assertion level, eager or lazy construction and output orientation
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use tourforge_config::{ConstructionMode, EnvironmentMode, TourConfig};
//!
//! let config = TourConfig::from_toml_str(r#"
//!     environment_mode = "full_assert"
//!     construction = "eager"
//!
//!     [board]
//!     rows = 8
//!     cols = 8
//! "#).unwrap();
//!
//! assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
//! assert_eq!(config.construction, ConstructionMode::Eager);
//! assert_eq!(config.board.unwrap().rows, 8);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use tourforge_config::TourConfig;
//!
//! let config = TourConfig::load("tour.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tourforge_core::TourForgeError;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<ConfigError> for TourForgeError {
    fn from(err: ConfigError) -> Self {
        TourForgeError::Config(err.to_string())
    }
}

/// Main tour construction configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TourConfig {
    /// Assertion level applied while building.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// When the tour is built relative to instance construction.
    #[serde(default)]
    pub construction: ConstructionMode,

    /// Which cell the materialized sequence starts from.
    #[serde(default)]
    pub start_cell: StartCell,

    /// Build sibling quadrants on the rayon pool.
    #[serde(default)]
    pub parallel: bool,

    /// Board to build, for binaries that take their board from a file.
    #[serde(default)]
    pub board: Option<BoardConfig>,
}

impl TourConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the assertion level.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets eager or lazy construction.
    pub fn with_construction(mut self, construction: ConstructionMode) -> Self {
        self.construction = construction;
        self
    }

    /// Sets the first cell of the materialized sequence.
    pub fn with_start_cell(mut self, start_cell: StartCell) -> Self {
        self.start_cell = start_cell;
        self
    }

    /// Enables or disables parallel quadrant construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the board to build.
    pub fn with_board(mut self, rows: i64, cols: i64) -> Self {
        self.board = Some(BoardConfig { rows, cols });
        self
    }
}

/// Environment mode controlling how much of the construction is re-checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// No validation beyond what construction needs.
    NoAssert,

    /// Validate the finished tour once.
    #[default]
    FastAssert,

    /// Validate every merged quadrant cycle as well as the finished tour.
    FullAssert,
}

impl EnvironmentMode {
    /// Returns `true` if the finished tour is validated.
    pub fn asserts_result(&self) -> bool {
        !matches!(self, EnvironmentMode::NoAssert)
    }

    /// Returns `true` if every intermediate merge is validated.
    pub fn asserts_merges(&self) -> bool {
        matches!(self, EnvironmentMode::FullAssert)
    }
}

/// When an algorithm instance builds its tour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionMode {
    /// Build on the first tour request.
    #[default]
    Lazy,

    /// Build while constructing the instance.
    Eager,
}

/// First cell of a materialized tour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartCell {
    /// Start at the top-left cell `(0, 0)`.
    #[default]
    Origin,

    /// Keep the rotation produced by the last splice.
    FirstVisited,
}

/// Board dimensions as given by the user.
///
/// Signed so that non-positive input reaches the validity checker and is
/// reported as an unsupported configuration rather than a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BoardConfig {
    pub rows: i64,
    pub cols: i64,
}
