// src/summary.rs

//! What the CLI shows for one planning request: the validity report plus,
//! when allowed, the execution order.

use std::io::{self, Write};

use serde::Serialize;

use crate::dag::topological_sort;
use crate::plan::{ExecutionGraph, TaskNode, ValidationReport, validate};

#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary<'a> {
    #[serde(rename = "valid")]
    pub is_valid: bool,
    pub message: String,
    /// `None` when no order may be shown: validation failed with
    /// `require_valid`, or the graph has a cycle.
    pub order: Option<Vec<&'a TaskNode>>,
}

impl<'a> PlanSummary<'a> {
    /// Validate `graph` and, if the report (or `require_valid = false`)
    /// allows it, attach the scheduler's order.
    pub fn build(graph: &'a ExecutionGraph, require_valid: bool) -> Self {
        let ValidationReport { is_valid, message } = validate(graph);

        let order = if is_valid || !require_valid {
            let order = topological_sort(graph);
            if order.is_empty() && !graph.is_empty() {
                None
            } else {
                Some(order)
            }
        } else {
            None
        };

        Self {
            is_valid,
            message,
            order,
        }
    }

    /// True when the caller got something usable: a valid plan, or a
    /// best-effort order.
    pub fn is_usable(&self) -> bool {
        self.is_valid || self.order.is_some()
    }

    /// The validity half of the summary, without the order.
    pub fn report(&self) -> ValidationReport {
        ValidationReport {
            is_valid: self.is_valid,
            message: self.message.clone(),
        }
    }

    pub fn status_line(&self) -> String {
        let status = if self.is_valid { "valid" } else { "invalid" };
        format!("{status}: {}", self.message)
    }

    /// Human-readable rendering:
    ///
    /// ```text
    /// valid: execution graph is valid
    /// 1. fetch
    /// 2. summarise (after: fetch)
    /// ```
    pub fn write_text<W: Write>(&self, out: &mut W, show_fields: bool) -> io::Result<()> {
        writeln!(out, "{}", self.status_line())?;

        let Some(order) = &self.order else {
            return Ok(());
        };

        for (pos, task) in order.iter().enumerate() {
            if task.dependencies.is_empty() {
                writeln!(out, "{}. {}", pos + 1, task.id)?;
            } else {
                writeln!(
                    out,
                    "{}. {} (after: {})",
                    pos + 1,
                    task.id,
                    task.dependencies.join(", ")
                )?;
            }

            if show_fields {
                for (key, value) in &task.fields {
                    writeln!(out, "     {key}: {value}")?;
                }
            }
        }

        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}
