//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `~/.cabal-manifest/config.toml` - User-wide defaults
//! - Project: `.cabal-manifest/config.toml` - Overrides for the current directory
//!
//! Project config takes precedence over global config, and command-line
//! flags take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ops::render::OutputFormat;
use crate::parser::{DuplicateStanzaPolicy, ParseOptions};

/// Name of the per-user and per-project configuration directory.
pub const CONFIG_DIR: &str = ".cabal-manifest";

/// Name of the configuration file inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Tool configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Parser settings
    pub parse: ParseConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// Parser-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParseConfig {
    /// How repeated stanza names are handled (reject, overwrite)
    pub duplicate_stanzas: Option<DuplicateStanzaPolicy>,

    /// Bytes requested per read from the manifest stream
    pub read_buffer_size: Option<usize>,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default format of `parse` (summary, json, debug)
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.parse.duplicate_stanzas.is_some() {
            self.parse.duplicate_stanzas = other.parse.duplicate_stanzas;
        }
        if other.parse.read_buffer_size.is_some() {
            self.parse.read_buffer_size = other.parse.read_buffer_size;
        }

        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
    }

    /// Parser options with unset values falling back to defaults.
    pub fn parse_options(&self) -> ParseOptions {
        let defaults = ParseOptions::default();
        ParseOptions {
            duplicate_stanzas: self
                .parse
                .duplicate_stanzas
                .unwrap_or(defaults.duplicate_stanzas),
            read_buffer_size: self
                .parse
                .read_buffer_size
                .filter(|&size| size > 0)
                .unwrap_or(defaults.read_buffer_size),
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.cabal-manifest/config.toml)
/// 2. Global config (~/.cabal-manifest/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        config.merge(Config::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global config directory (~/.cabal-manifest).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(CONFIG_DIR))
}

/// Get the global config path (~/.cabal-manifest/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Get the project config path (.cabal-manifest/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}
