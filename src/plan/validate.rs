// src/plan/validate.rs

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::dag::{DagGraph, execution_order};
use crate::errors::{PlanError, Result};
use crate::plan::model::ExecutionGraph;

/// Message carried by a report for a graph that passed every check.
pub const VALID_MESSAGE: &str = "execution graph is valid";

/// Yes/no answer on whether a graph may be executed, with a short reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    #[serde(rename = "valid")]
    pub is_valid: bool,
    pub message: String,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: VALID_MESSAGE.to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_valid { "valid" } else { "invalid" };
        write!(f, "{status}: {}", self.message)
    }
}

impl From<&Result<()>> for ValidationReport {
    fn from(result: &Result<()>) -> Self {
        match result {
            Ok(()) => ValidationReport::valid(),
            Err(err) => ValidationReport::invalid(err.to_string()),
        }
    }
}

/// Run every structural check against `graph`, stopping at the first
/// violation:
///
/// 1. ids are unique
/// 2. every dependency names an existing task
/// 3. the dependency relation is acyclic
pub fn check(graph: &ExecutionGraph) -> Result<()> {
    ensure_unique_ids(graph)?;

    let dag = DagGraph::from_graph(graph);
    ensure_dependencies_exist(&dag)?;
    ensure_acyclic(&dag)?;
    Ok(())
}

/// Boolean-plus-reason form of [`check`].
pub fn validate(graph: &ExecutionGraph) -> ValidationReport {
    let report = ValidationReport::from(&check(graph));
    debug!(valid = report.is_valid, reason = %report.message, "validated execution graph");
    report
}

fn ensure_unique_ids(graph: &ExecutionGraph) -> Result<()> {
    let mut seen = HashSet::with_capacity(graph.len());
    for id in graph.ids() {
        if !seen.insert(id) {
            warn!(task = %id, "duplicate task identifier");
            return Err(PlanError::DuplicateIdentifier(id.to_string()));
        }
    }
    Ok(())
}

// Dangling edges are recorded in task order, then declaration order, so
// the first one is the first violation in the input.
fn ensure_dependencies_exist(dag: &DagGraph) -> Result<()> {
    match dag.dangling().first() {
        Some(edge) => Err(PlanError::DanglingDependency {
            task: dag.id(edge.task).to_string(),
            dependency: edge.dependency.clone(),
        }),
        None => Ok(()),
    }
}

fn ensure_acyclic(dag: &DagGraph) -> Result<()> {
    if execution_order(dag).is_none() {
        let tasks = dag.cycle_members();
        warn!(involving = ?tasks, "cyclic dependency detected");
        return Err(PlanError::CyclicDependency { tasks });
    }
    Ok(())
}
