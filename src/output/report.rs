//! Per-task path report.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::task::Task;

/// CSV paths found for each task category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskReport {
    tasks: BTreeMap<Task, Vec<PathBuf>>,
}

impl TaskReport {
    pub fn insert(&mut self, task: Task, paths: Vec<PathBuf>) {
        self.tasks.insert(task, paths);
    }

    /// Paths for `task`, empty if none were recorded.
    pub fn paths(&self, task: Task) -> &[PathBuf] {
        self.tasks.get(&task).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, task: Task) -> usize {
        self.paths(task).len()
    }

    pub fn total(&self) -> usize {
        self.tasks.values().map(Vec::len).sum()
    }

    /// One `"<heading>: <count>"` line per task, in report order.
    pub fn count_lines(&self) -> Vec<String> {
        Task::ALL
            .iter()
            .map(|task| format!("{}: {}", task.count_label(), self.count(*task)))
            .collect()
    }

    /// One `"<label>: <first path>"` line per task that has any paths.
    pub fn example_lines(&self) -> Vec<String> {
        Task::ALL
            .iter()
            .filter_map(|task| {
                self.paths(*task)
                    .first()
                    .map(|path| format!("{}: {}", task.label(), path.display()))
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
