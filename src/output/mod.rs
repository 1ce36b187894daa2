//! Output module for console output and reports.
//!
//! Provides:
//! - Colored console messages
//! - Per-task path reports
//! - Count and example printing

pub mod console;
pub mod report;
pub mod stats;

pub use self::console::{print_error, print_warning};
pub use report::TaskReport;
pub use stats::{print_examples, print_json, print_paths, print_task_counts};
