//! Per-task path lookups.
//!
//! Each call locates the default `data` directory and walks it from scratch.

use std::path::PathBuf;

use crate::discovery::TaskPathFinder;
use crate::error::Result;
use crate::task::Task;

/// Get all CSV paths in recording folders ending with `suffix`.
pub fn get_task_paths(suffix: &str) -> Result<Vec<PathBuf>> {
    TaskPathFinder::from_default_location().paths_for_suffix(suffix)
}

/// Get all sit-to-stand task CSV paths.
pub fn get_sit_to_stand_paths() -> Result<Vec<PathBuf>> {
    get_task_paths(Task::SitToStand.suffix())
}

/// Get all sit-to-stand challenge task CSV paths.
pub fn get_sit_to_stand_challenge_paths() -> Result<Vec<PathBuf>> {
    get_task_paths(Task::SitToStandChallenge.suffix())
}

/// Get all water task CSV paths.
pub fn get_water_task_paths() -> Result<Vec<PathBuf>> {
    get_task_paths(Task::WaterTask.suffix())
}

/// Get all water task challenge CSV paths.
pub fn get_water_task_challenge_paths() -> Result<Vec<PathBuf>> {
    get_task_paths(Task::WaterTaskChallenge.suffix())
}

/// Get all step count task CSV paths.
pub fn get_step_count_paths() -> Result<Vec<PathBuf>> {
    get_task_paths(Task::StepCount.suffix())
}

/// Get all step count challenge task CSV paths.
pub fn get_step_count_challenge_paths() -> Result<Vec<PathBuf>> {
    get_task_paths(Task::StepCountChallenge.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_support::DataTree;

    const ENTRY_POINTS: [(Task, fn() -> Result<Vec<PathBuf>>); 6] = [
        (Task::SitToStand, get_sit_to_stand_paths),
        (Task::SitToStandChallenge, get_sit_to_stand_challenge_paths),
        (Task::WaterTask, get_water_task_paths),
        (Task::WaterTaskChallenge, get_water_task_challenge_paths),
        (Task::StepCount, get_step_count_paths),
        (Task::StepCountChallenge, get_step_count_challenge_paths),
    ];

    fn one_folder_per_task() -> DataTree {
        let tree = DataTree::new();
        for task in Task::ALL {
            tree.csv("P1", &format!("P1{}", task.suffix()), "signal.csv");
        }
        tree
    }

    #[test]
    fn test_each_entry_point_reads_its_own_suffix() {
        let tree = one_folder_per_task();
        let _guard = tree.as_default_data_dir();

        for (task, entry_point) in ENTRY_POINTS {
            let folder = format!("P1{}", task.suffix());
            assert_eq!(
                entry_point().unwrap(),
                vec![tree.recording_path("P1", &folder).join("signal.csv")],
                "{}",
                task
            );
        }
    }

    #[test]
    fn test_get_task_paths_with_custom_suffix() {
        let tree = one_folder_per_task();
        tree.csv("P2", "P2-balance", "sway.csv");
        let _guard = tree.as_default_data_dir();

        assert_eq!(
            get_task_paths("-balance").unwrap(),
            vec![tree.recording_path("P2", "P2-balance").join("sway.csv")]
        );
        assert_eq!(get_task_paths("_challenge").unwrap().len(), 3);
    }

    #[test]
    fn test_entry_points_without_data_dir() {
        let tree = DataTree::new();
        let _guard = tree.as_default_data_dir();
        std::fs::remove_dir(tree.root()).unwrap();

        for (_, entry_point) in ENTRY_POINTS {
            assert!(matches!(entry_point(), Err(Error::DataDirNotFound(_))));
        }
    }
}
