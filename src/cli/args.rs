//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::loader::DEFAULT_CONFIG_FILE;
use crate::config::{Config, PathOrdering};
use crate::error::Result;
use crate::task::Task;

/// Task recording path finder CLI.
#[derive(Parser, Debug)]
#[command(
    name = "task-paths",
    version,
    about = "List per-task CSV recordings in a participant data tree",
    long_about = "Walks data/<participant>/csv/Recordings_Signal_Data/<recording>/ and \
                  reports the CSV files of each task category.\n\n\
                  Without arguments, prints a count per task followed by one example path \
                  per non-empty task."
)]
pub struct Args {
    /// Root data directory (overrides the configuration file).
    #[arg(short = 'd', long = "data-dir", env = "TASK_PATHS_DATA_DIR")]
    pub data_directory: Option<PathBuf>,

    /// Path to configuration file [default: task_paths.toml, if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ordering applied to directory listings.
    #[arg(long, value_enum)]
    pub ordering: Option<OrderingArg>,

    /// List every path of a single task (e.g. water_task_challenge).
    #[arg(short, long, value_parser = parse_task)]
    pub task: Option<Task>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI ordering argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderingArg {
    /// Sort participants and recording folders by name.
    Sorted,
    /// Keep the operating system's listing order.
    Filesystem,
}

impl From<OrderingArg> for PathOrdering {
    fn from(arg: OrderingArg) -> Self {
        match arg {
            OrderingArg::Sorted => PathOrdering::Sorted,
            OrderingArg::Filesystem => PathOrdering::Filesystem,
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Counts followed by example paths.
    Text,
    /// All paths grouped by task.
    Json,
}

fn parse_task(s: &str) -> std::result::Result<Task, String> {
    s.parse::<Task>().map_err(|e| e.to_string())
}

impl Args {
    /// Load the configuration file.
    ///
    /// An explicit `--config` must exist; the default file is optional.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.data_directory {
            config.paths.data_directory = Some(dir.clone());
        }

        if let Some(ordering) = self.ordering {
            config.options.ordering = ordering.into();
        }
    }
}
