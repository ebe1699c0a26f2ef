// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `planboard`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "planboard",
    version,
    about = "Inspect a generated project plan: validate it and report which tasks are unlocked.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan file (JSON).
    ///
    /// Default: `Plan.json` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Plan.json")]
    pub plan: String,

    /// Validate the plan and exit without printing the board report.
    #[arg(long)]
    pub validate_only: bool,

    /// Only report tasks that are currently blocked, with their blockers.
    #[arg(long)]
    pub blocked: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PLANBOARD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
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
