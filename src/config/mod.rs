//! Configuration module for task-paths.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Path ordering policy
//! - Configuration validation

pub mod loader;
pub mod ordering;
pub mod validation;

pub use loader::{Config, OptionsConfig, PathsConfig};
pub use ordering::PathOrdering;
pub use validation::validate_config;
