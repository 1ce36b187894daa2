//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use std::path::Path;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(dir) = &config.paths.data_directory {
        validate_data_directory(dir)?;
    }

    Ok(())
}

/// Validate a data directory override.
pub fn validate_data_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "data_directory".to_string(),
            message: "Data directory must not be empty".to_string(),
        });
    }

    if dir.exists() && !dir.is_dir() {
        return Err(Error::ConfigValidation {
            field: "data_directory".to_string(),
            message: format!("'{}' exists but is not a directory", dir.display()),
        });
    }

    Ok(())
}
