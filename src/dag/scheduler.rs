// src/dag/scheduler.rs

use std::collections::VecDeque;

use tracing::{debug, error};

use crate::dag::graph::DagGraph;
use crate::plan::model::{ExecutionGraph, TaskNode};

/// Order tasks so that every task comes after all of its dependencies.
///
/// Kahn's algorithm with a fixed tie-break: ready tasks are queued in input
/// order at the start, and afterwards in the order their last blocking edge
/// is released. Identical input always yields the identical order.
///
/// The graph does not have to be validated first:
/// - dependencies on unknown ids are dropped (logged, not followed)
/// - a cycle among present tasks yields an **empty** vector, never a
///   partial order
pub fn topological_sort(graph: &ExecutionGraph) -> Vec<&TaskNode> {
    let dag = DagGraph::from_graph(graph);

    match execution_order(&dag) {
        Some(order) => {
            let tasks: Vec<&TaskNode> = order.into_iter().map(|i| &graph.tasks[i]).collect();
            debug!(
                order = ?tasks.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
                "topological sort complete"
            );
            tasks
        }
        None => {
            error!(
                tasks = graph.len(),
                "cyclic dependency detected; no execution order exists"
            );
            Vec::new()
        }
    }
}

/// Kahn's algorithm over task indices.
///
/// Returns `None` when some task never reaches in-degree zero, i.e. the
/// remaining tasks depend on a cycle.
pub fn execution_order(dag: &DagGraph) -> Option<Vec<usize>> {
    let mut in_degree: Vec<usize> = (0..dag.len()).map(|i| dag.in_degree(i)).collect();

    let mut queue: VecDeque<usize> = dag.roots().collect();
    let mut order = Vec::with_capacity(dag.len());

    while let Some(current) = queue.pop_front() {
        order.push(current);

        for &next in dag.dependents_of(current) {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    if order.len() == dag.len() {
        Some(order)
    } else {
        debug!(
            scheduled = order.len(),
            total = dag.len(),
            "scheduler stalled with tasks still blocked"
        );
        None
    }
}
