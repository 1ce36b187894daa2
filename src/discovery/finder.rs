//! Stateless task path finder.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{Config, PathOrdering};
use crate::discovery::{collect_csv_files, filter_by_suffix, find_recording_folders};
use crate::error::Result;
use crate::fs::default_data_dir;
use crate::output::TaskReport;
use crate::task::Task;

/// Locates task CSV files under a data directory.
///
/// Holds only the directory and ordering policy; every query walks the tree
/// again, so results always reflect the current filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPathFinder {
    data_dir: PathBuf,
    ordering: PathOrdering,
}

impl TaskPathFinder {
    /// Create a finder over `data_dir` with the default ordering.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ordering: PathOrdering::default(),
        }
    }

    /// Create a finder over the default `data` directory.
    pub fn from_default_location() -> Self {
        Self::new(default_data_dir())
    }

    /// Create a finder from a loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.data_directory()?).with_ordering(config.options.ordering))
    }

    /// Set the ordering policy.
    pub fn with_ordering(mut self, ordering: PathOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn ordering(&self) -> PathOrdering {
        self.ordering
    }

    /// All recording folders across all participants.
    pub fn recording_folders(&self) -> Result<Vec<PathBuf>> {
        find_recording_folders(&self.data_dir, self.ordering)
    }

    /// CSV paths inside every recording folder ending with `suffix`.
    pub fn paths_for_suffix(&self, suffix: &str) -> Result<Vec<PathBuf>> {
        let folders = filter_by_suffix(self.recording_folders()?, suffix);
        debug!(suffix, folders = folders.len(), "matched recording folders");
        collect_csv_files(&folders)
    }

    /// CSV paths for one task category.
    pub fn task_paths(&self, task: Task) -> Result<Vec<PathBuf>> {
        self.paths_for_suffix(task.suffix())
    }

    /// CSV paths for every task category.
    pub fn report(&self) -> Result<TaskReport> {
        let mut report = TaskReport::default();
        for task in Task::ALL {
            report.insert(task, self.task_paths(task)?);
        }
        Ok(report)
    }
}
