//! Report printing.

use std::path::PathBuf;

use console::style;

use crate::error::Result;
use crate::output::TaskReport;

/// Print the number of matched files for every task.
pub fn print_task_counts(report: &TaskReport) {
    for line in report.count_lines() {
        println!("{}", line);
    }
}

/// Print the first path of each non-empty task.
pub fn print_examples(report: &TaskReport) {
    println!();
    println!("{}", style("Examples:").bold());
    for line in report.example_lines() {
        println!("{}", line);
    }
}

/// Print every path, one per line.
pub fn print_paths(paths: &[PathBuf]) {
    for path in paths {
        println!("{}", path.display());
    }
}

/// Print the whole report as JSON.
pub fn print_json(report: &TaskReport) -> Result<()> {
    println!("{}", report.to_json()?);
    Ok(())
}
