// src/plan/mod.rs

//! Turning generator output into an executable plan.
//!
//! - [`model`] is the execution graph as the generator describes it.
//! - [`extract`] strips prose around the JSON payload.
//! - [`parser`] decodes the payload into the model.
//! - [`validate`] checks ids, dependencies and acyclicity.
//!
//! All operations are stateless free functions over immutable input.

pub mod extract;
pub mod model;
pub mod parser;
pub mod validate;

pub use extract::extract_payload;
pub use model::{ExecutionGraph, TaskNode};
pub use parser::{decode, parse};
pub use validate::{ValidationReport, check, validate};

use tracing::info;

use crate::dag::{DagGraph, execution_order};
use crate::errors::{PlanError, Result};

/// Decode, validate and order `text` in one go, handing back owned tasks in
/// execution order.
///
/// This is the gate for executors: either every check passes and the full
/// order is returned, or nothing is.
pub fn plan(text: &str) -> Result<Vec<TaskNode>> {
    let graph = decode(text)?;
    check(&graph)?;

    let order = execution_order(&DagGraph::from_graph(&graph))
        .ok_or_else(|| PlanError::CyclicDependency { tasks: Vec::new() })?;

    let mut slots: Vec<Option<TaskNode>> = graph.tasks.into_iter().map(Some).collect();
    let ordered: Vec<TaskNode> = order.into_iter().filter_map(|i| slots[i].take()).collect();

    info!(tasks = ordered.len(), "execution plan ready");
    Ok(ordered)
}
