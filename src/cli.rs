// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::InputFormat;

/// Command-line arguments for `courseplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "courseplan",
    version,
    about = "Order courses by their prerequisites and count what each one needs.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the course list (JSON or TOML).
    ///
    /// Default: `courses.json` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "courses.json")]
    pub input: String,

    /// Format of the course list. Inferred from the file extension if omitted.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<InputFormat>,

    /// Only report the prerequisite path and count for this course.
    #[arg(long, value_name = "NAME")]
    pub course: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COURSEPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the prerequisite graph, but don't schedule.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
