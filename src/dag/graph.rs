// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::warn;

use crate::plan::model::ExecutionGraph;

/// Internal node structure: stores immediate deps and dependents by index.
#[derive(Debug, Clone, Default)]
struct DagNode {
    /// Resolved dependencies, in declaration order.
    deps: Vec<usize>,
    /// Tasks that depend on this one, in the order their edges were seen.
    dependents: Vec<usize>,
}

/// A dependency edge whose target id is not in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingEdge {
    /// Index of the task declaring the dependency.
    pub task: usize,
    pub dependency: String,
}

/// Index-based adjacency view of an [`ExecutionGraph`].
///
/// Nodes are the positions in `graph.tasks`, so every entry gets its own
/// node even when ids repeat. A dependency id resolves to the *last* task
/// carrying it; earlier duplicates never receive incoming edges.
///
/// Unknown dependency ids are skipped with a warning and kept in
/// [`DagGraph::dangling`]; they never contribute to in-degree.
#[derive(Debug, Clone)]
pub struct DagGraph {
    ids: Vec<String>,
    nodes: Vec<DagNode>,
    dangling: Vec<DanglingEdge>,
}

impl DagGraph {
    /// Build adjacency for `graph`. Never fails.
    pub fn from_graph(graph: &ExecutionGraph) -> Self {
        let ids: Vec<String> = graph.tasks.iter().map(|t| t.id.clone()).collect();

        // Last occurrence wins for duplicate ids.
        let index: HashMap<&str, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();

        let mut nodes = vec![DagNode::default(); ids.len()];
        let mut dangling = Vec::new();

        for (task_idx, task) in graph.tasks.iter().enumerate() {
            for dep in &task.dependencies {
                match index.get(dep.as_str()) {
                    Some(&dep_idx) => {
                        nodes[task_idx].deps.push(dep_idx);
                        nodes[dep_idx].dependents.push(task_idx);
                    }
                    None => {
                        warn!(
                            task = %task.id,
                            dependency = %dep,
                            "dependency refers to unknown task; ignoring edge"
                        );
                        dangling.push(DanglingEdge {
                            task: task_idx,
                            dependency: dep.clone(),
                        });
                    }
                }
            }
        }

        Self {
            ids,
            nodes,
            dangling,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id of the task at `idx`.
    pub fn id(&self, idx: usize) -> &str {
        &self.ids[idx]
    }

    /// Immediate (resolved) dependencies of the task at `idx`.
    pub fn dependencies_of(&self, idx: usize) -> &[usize] {
        self.nodes
            .get(idx)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate dependents of the task at `idx`.
    pub fn dependents_of(&self, idx: usize) -> &[usize] {
        self.nodes
            .get(idx)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Number of resolved incoming edges of the task at `idx`.
    pub fn in_degree(&self, idx: usize) -> usize {
        self.dependencies_of(idx).len()
    }

    /// Tasks with no resolved dependencies, in input order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&i| self.in_degree(i) == 0)
    }

    /// Edges that were dropped because their target does not exist.
    pub fn dangling(&self) -> &[DanglingEdge] {
        &self.dangling
    }

    /// Ids of every task sitting on a dependency cycle (members of a
    /// non-trivial strongly connected component, or with a self-edge).
    ///
    /// Used for diagnostics after the scheduler has given up; the scheduler
    /// itself never enumerates cycles.
    pub fn cycle_members(&self) -> Vec<String> {
        let mut graph: DiGraph<usize, ()> = DiGraph::with_capacity(self.len(), 0);
        let handles: Vec<NodeIndex> = (0..self.len()).map(|i| graph.add_node(i)).collect();

        for (task_idx, node) in self.nodes.iter().enumerate() {
            for &dep_idx in &node.deps {
                graph.add_edge(handles[dep_idx], handles[task_idx], ());
            }
        }

        let mut members: Vec<usize> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| {
                scc.len() > 1
                    || scc
                        .first()
                        .is_some_and(|&n| graph.contains_edge(n, n))
            })
            .flatten()
            .map(|n| graph[n])
            .collect();

        members.sort_unstable();
        members.into_iter().map(|i| self.ids[i].clone()).collect()
    }
}
