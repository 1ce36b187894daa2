//! Task category definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A recorded task category, identified by its folder-name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    SitToStand,
    SitToStandChallenge,
    WaterTask,
    WaterTaskChallenge,
    StepCount,
    StepCountChallenge,
}

impl Task {
    /// Every task, in report order.
    pub const ALL: [Task; 6] = [
        Task::SitToStand,
        Task::SitToStandChallenge,
        Task::WaterTask,
        Task::WaterTaskChallenge,
        Task::StepCount,
        Task::StepCountChallenge,
    ];

    /// Suffix a recording folder name must end with.
    pub fn suffix(&self) -> &'static str {
        match self {
            Task::SitToStand => "-sit_to_stand",
            Task::SitToStandChallenge => "-sit_to_stand_challenge",
            Task::WaterTask => "-water_task",
            Task::WaterTaskChallenge => "-water_task_challenge",
            Task::StepCount => "-step_count",
            Task::StepCountChallenge => "-step_count_challenge",
        }
    }

    /// Human-readable name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Task::SitToStand => "Sit-to-stand",
            Task::SitToStandChallenge => "Sit-to-stand challenge",
            Task::WaterTask => "Water task",
            Task::WaterTaskChallenge => "Water challenge task",
            Task::StepCount => "Step count",
            Task::StepCountChallenge => "Step count challenge",
        }
    }

    /// Plural heading used for match counts.
    pub fn count_label(&self) -> &'static str {
        match self {
            Task::SitToStand => "Sit-to-stand tasks",
            Task::SitToStandChallenge => "Sit-to-stand challenge tasks",
            Task::WaterTask => "Water tasks",
            Task::WaterTaskChallenge => "Water challenge tasks",
            Task::StepCount => "Step count tasks",
            Task::StepCountChallenge => "Step count challenge tasks",
        }
    }

    pub fn is_challenge(&self) -> bool {
        matches!(
            self,
            Task::SitToStandChallenge | Task::WaterTaskChallenge | Task::StepCountChallenge
        )
    }

    /// The challenge variant of this task (itself if already one).
    pub fn challenge(&self) -> Task {
        match self {
            Task::SitToStand | Task::SitToStandChallenge => Task::SitToStandChallenge,
            Task::WaterTask | Task::WaterTaskChallenge => Task::WaterTaskChallenge,
            Task::StepCount | Task::StepCountChallenge => Task::StepCountChallenge,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix().trim_start_matches('-'))
    }
}

impl FromStr for Task {
    type Err = Error;

    /// Accepts `sit_to_stand`, `sit-to-stand` or the suffix itself.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().trim_start_matches('-').to_lowercase().replace('-', "_");

        Task::ALL
            .into_iter()
            .find(|task| task.suffix()[1..] == normalized)
            .ok_or_else(|| Error::UnknownTask(s.to_string()))
    }
}
