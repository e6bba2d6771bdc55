//! Configuration file loading for the terminal driver.
//!
//! Settings live in a TOML file (`fairy.toml` by default). Every field is
//! optional and a missing file yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How pieces are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyphs {
    /// Unicode chess symbols, with letters for the fairy pieces.
    #[default]
    Unicode,
    /// Placement letters only (`K`, `q`, `F`, ...).
    Ascii,
}

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Piece glyph style. Defaults to unicode.
    #[serde(default)]
    pub glyphs: Glyphs,
    /// Draw file and rank labels around the board. Defaults to true.
    #[serde(default = "default_show_coordinates")]
    pub show_coordinates: bool,
    /// `tracing` filter directive. Defaults to "info".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_show_coordinates() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::default(),
            show_coordinates: default_show_coordinates(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration at `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `fairy.toml` in the current
    /// working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("fairy.toml")
    }
}
