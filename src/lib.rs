// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod plan;
pub mod summary;
pub mod types;

pub use dag::topological_sort;
pub use errors::{PlanError, PlanErrorKind};
pub use plan::{
    ExecutionGraph, TaskNode, ValidationReport, check, decode, extract_payload, parse, plan,
    validate,
};

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::load_or_default;
use crate::summary::PlanSummary;
use crate::types::OutputFormat;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file, then CLI overrides)
/// - reading generator output from a file or stdin
/// - decoding, validation and scheduling
/// - rendering to stdout
///
/// Returns whether the run produced something usable; `main` maps `false`
/// to a non-zero exit status.
pub fn run(args: CliArgs) -> Result<bool> {
    let cfg = load_or_default(args.config.as_deref().map(Path::new))
        .with_context(|| format!("loading config {:?}", args.config))?;

    let format = args.format.unwrap_or(cfg.output.format);
    let require_valid = cfg.planner.require_valid && !args.best_effort;
    debug!(?format, require_valid, check_only = args.check, "effective settings");

    let text = read_input(args.input.as_deref())?;
    let graph = decode(&text).context("no usable execution graph in input")?;
    info!(tasks = graph.len(), "parsed execution graph");

    let summary = PlanSummary::build(&graph, require_valid);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.check {
        match format {
            OutputFormat::Text => writeln!(out, "{}", summary.status_line())?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &summary.report())?;
                writeln!(out)?;
            }
        }
        return Ok(summary.is_valid);
    }

    match format {
        OutputFormat::Text => summary.write_text(&mut out, cfg.output.show_fields)?,
        OutputFormat::Json => summary.write_json(&mut out)?,
    }

    Ok(summary.is_usable())
}

/// Read the whole input, from `path` or from stdin for `None` / `"-"`.
fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading generator output from stdin")?;
            Ok(buf)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading input file {path:?}"))
        }
    }
}
