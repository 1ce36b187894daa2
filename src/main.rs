//! task-paths - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use task_paths::{
    cli::{Args, OutputFormat},
    config::validate_config,
    discovery::TaskPathFinder,
    error::{exit_codes, Error, Result},
    output::{print_error, print_examples, print_json, print_paths, print_task_counts, print_warning},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::TomlParse(_)
                | Error::UnknownTask(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::DataDirNotFound(_) | Error::Io(_) | Error::GlobPattern(_) => {
                    ExitCode::from(exit_codes::FILESYSTEM_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout is reserved for the report
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = args.load_config()?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let finder = TaskPathFinder::from_config(&config)?;
    tracing::debug!(
        data_dir = %finder.data_dir().display(),
        ordering = %finder.ordering(),
        "starting discovery"
    );

    if let Some(task) = args.task {
        let paths = finder.task_paths(task)?;
        if paths.is_empty() {
            print_warning(&format!("No CSV files found for {}", task.label()));
        }
        return match args.format {
            OutputFormat::Text => {
                print_paths(&paths);
                Ok(())
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&paths)?);
                Ok(())
            }
        };
    }

    let report = finder.report()?;
    match args.format {
        OutputFormat::Text => {
            print_task_counts(&report);
            print_examples(&report);
        }
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(())
}
