//! Recording folder enumeration.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::PathOrdering;
use crate::error::{Error, Result};
use crate::fs::{list_subdirectories, signal_data_dir};

/// Find every recording folder under every participant in `data_dir`.
///
/// Participants are the immediate sub-directories of `data_dir`. A participant
/// without a `csv/Recordings_Signal_Data` entry contributes nothing. A
/// missing `data_dir` is an error, as is a recordings entry that exists but
/// cannot be listed.
pub fn find_recording_folders(data_dir: &Path, ordering: PathOrdering) -> Result<Vec<PathBuf>> {
    let participants = list_subdirectories(data_dir, ordering).map_err(|e| match e {
        Error::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            Error::DataDirNotFound(data_dir.to_path_buf())
        }
        other => other,
    })?;

    let mut recording_folders = Vec::new();

    for participant in &participants {
        let signal_dir = signal_data_dir(participant);
        if !signal_dir.exists() {
            debug!(participant = %participant.display(), "no recordings directory, skipping");
            continue;
        }

        let folders = list_subdirectories(&signal_dir, ordering)?;
        debug!(
            participant = %participant.display(),
            count = folders.len(),
            "found recording folders"
        );
        recording_folders.extend(folders);
    }

    Ok(recording_folders)
}
