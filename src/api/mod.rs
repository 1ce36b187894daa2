//! Zero-argument entry points over the default data directory.

pub mod tasks;

pub use tasks::{
    get_sit_to_stand_challenge_paths, get_sit_to_stand_paths, get_step_count_challenge_paths,
    get_step_count_paths, get_task_paths, get_water_task_challenge_paths, get_water_task_paths,
};
