//! Data directory location and participant layout.
//!
//! The tree consumed by this crate looks like:
//!
//! ```text
//! data/
//! └── <participant>/
//!     └── csv/
//!         └── Recordings_Signal_Data/
//!             └── <recording-folder>/   # e.g. P1-water_task
//!                 └── *.csv
//! ```

use std::path::{Path, PathBuf};

/// Name of the root data directory.
pub const DATA_DIR_NAME: &str = "data";

/// Path components between a participant directory and its recordings.
pub const SIGNAL_DATA_SUBPATH: [&str; 2] = ["csv", RECORDINGS_DIR_NAME];

/// Directory holding one sub-folder per recording session.
pub const RECORDINGS_DIR_NAME: &str = "Recordings_Signal_Data";

#[cfg(test)]
thread_local! {
    static DATA_DIR_OVERRIDE: std::cell::RefCell<Option<PathBuf>> =
        const { std::cell::RefCell::new(None) };
}

/// Get the default data directory: `data` beside the crate's sources.
///
/// Recomputed on each call; nothing is cached.
pub fn default_data_dir() -> PathBuf {
    data_dir_override()
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(DATA_DIR_NAME))
}

#[cfg(not(test))]
fn data_dir_override() -> Option<PathBuf> {
    None
}

#[cfg(test)]
fn data_dir_override() -> Option<PathBuf> {
    DATA_DIR_OVERRIDE.with(|dir| dir.borrow().clone())
}

/// Point `default_data_dir` somewhere else for the current test thread.
#[cfg(test)]
pub(crate) fn set_data_dir_override(dir: Option<PathBuf>) {
    DATA_DIR_OVERRIDE.with(|current| *current.borrow_mut() = dir);
}

/// Get the recordings directory of a participant.
pub fn signal_data_dir(participant: &Path) -> PathBuf {
    SIGNAL_DATA_SUBPATH
        .iter()
        .fold(participant.to_path_buf(), |path, part| path.join(part))
}
