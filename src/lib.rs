//! task-paths - locate per-task CSV recordings in a participant data tree.
//!
//! The expected layout is
//! `data/<participant>/csv/Recordings_Signal_Data/<recording-folder>/*.csv`,
//! where each recording folder name ends with a task suffix such as
//! `-water_task` or `-sit_to_stand_challenge`.
//!
//! # Features
//!
//! - Six zero-argument lookups, one per task category
//! - A parameterised suffix lookup
//! - Optional sorted or filesystem ordering
//! - No caching: every call re-walks the tree
//!
//! # Example
//!
//! ```no_run
//! use task_paths::{get_water_task_paths, Task, TaskPathFinder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let paths = get_water_task_paths()?;
//!     println!("{} water task recordings", paths.len());
//!
//!     let finder = TaskPathFinder::new("/srv/study/data");
//!     for path in finder.task_paths(Task::StepCountChallenge)? {
//!         println!("{}", path.display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod fs;
pub mod output;
pub mod task;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use api::{
    get_sit_to_stand_challenge_paths, get_sit_to_stand_paths, get_step_count_challenge_paths,
    get_step_count_paths, get_task_paths, get_water_task_challenge_paths, get_water_task_paths,
};
pub use config::{Config, PathOrdering};
pub use discovery::TaskPathFinder;
pub use error::{Error, Result};
pub use output::TaskReport;
pub use task::Task;
