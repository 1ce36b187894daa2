//! Configuration structures and loading logic.

use crate::config::ordering::PathOrdering;
use crate::error::{Error, Result};
use crate::fs::default_data_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "task_paths.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Filesystem locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root data directory. Defaults to `data` beside the crate sources.
    #[serde(default)]
    pub data_directory: Option<PathBuf>,
}

/// Discovery options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Ordering applied to directory listings (sorted, filesystem).
    #[serde(default)]
    pub ordering: PathOrdering,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Get the effective, absolute data directory.
    ///
    /// Relative overrides resolve against the working directory, which must be
    /// readable.
    pub fn data_directory(&self) -> Result<PathBuf> {
        match &self.paths.data_directory {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => Ok(std::env::current_dir()?.join(dir)),
            None => Ok(default_data_dir()),
        }
    }
}
