//! Fixture builder for data trees in temporary directories.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::fs::paths::set_data_dir_override;
use crate::fs::signal_data_dir;

pub(crate) struct DataTree {
    temp: TempDir,
}

impl DataTree {
    pub(crate) fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    pub(crate) fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Make this tree the default data directory until the guard drops.
    pub(crate) fn as_default_data_dir(&self) -> DefaultDataDirGuard {
        set_data_dir_override(Some(self.root().to_path_buf()));
        DefaultDataDirGuard
    }

    /// Create a bare participant directory.
    pub(crate) fn participant(&self, participant: &str) -> PathBuf {
        let path = self.root().join(participant);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub(crate) fn recording_path(&self, participant: &str, folder: &str) -> PathBuf {
        signal_data_dir(&self.root().join(participant)).join(folder)
    }

    /// Create a recording folder, including its parents.
    pub(crate) fn recording(&self, participant: &str, folder: &str) -> PathBuf {
        let path = self.recording_path(participant, folder);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Create an empty file inside a recording folder.
    pub(crate) fn csv(&self, participant: &str, folder: &str, name: &str) -> PathBuf {
        let path = self.recording(participant, folder).join(name);
        fs::write(&path, "timestamp,value\n").unwrap();
        path
    }

    /// Create a file at a path relative to the root.
    pub(crate) fn file(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "").unwrap();
        path
    }
}

pub(crate) struct DefaultDataDirGuard;

impl Drop for DefaultDataDirGuard {
    fn drop(&mut self) {
        set_data_dir_override(None);
    }
}
