// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::OutputFormat;

/// Command-line arguments for `plandag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "plandag",
    version,
    about = "Validate and order task graphs produced by a language model.",
    long_about = None
)]
pub struct CliArgs {
    /// File holding the generator output. Reads stdin when omitted or `-`.
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Plandag.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Only report whether the graph is valid; exit with status 1 if not.
    #[arg(long)]
    pub check: bool,

    /// Output format. Overrides `[output].format` from the config file.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Print the scheduler's order even when validation fails.
    ///
    /// Dependencies on unknown tasks are dropped; a cycle still yields no
    /// order.
    #[arg(long)]
    pub best_effort: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PLANDAG_LOG` or a default level will be used.
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
