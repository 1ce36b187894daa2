//! Filesystem module.
//!
//! Provides:
//! - Data directory location and the fixed participant layout
//! - Directory listing helpers

pub mod listing;
pub mod paths;

pub use listing::list_subdirectories;
pub use paths::{
    default_data_dir, signal_data_dir, DATA_DIR_NAME, RECORDINGS_DIR_NAME, SIGNAL_DATA_SUBPATH,
};
