// src/plan/model.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Top-level execution graph, as emitted by the upstream generator:
///
/// ```json
/// {
///   "tasks": [
///     { "id": "fetch", "dependencies": [] },
///     { "id": "summarise", "dependencies": ["fetch"], "instruction": "..." }
///   ]
/// }
/// ```
///
/// Built once per planning request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionGraph {
    /// Tasks in the order the generator listed them.
    ///
    /// The order carries no meaning for correctness, but the scheduler uses
    /// it to break ties between tasks that become ready together.
    pub tasks: Vec<TaskNode>,
}

/// A single task in an [`ExecutionGraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskNode {
    /// Identifier, expected to be unique within the graph.
    pub id: String,

    /// Ids of tasks that must finish before this one may start.
    ///
    /// A missing or `null` field is read as "no dependencies".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dependencies: Vec<String>,

    /// Everything else the generator attached to the task (description,
    /// tool name, parameters, ...). Never interpreted here.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ExecutionGraph {
    pub fn new(tasks: Vec<TaskNode>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All task ids, in input order (duplicates included).
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|t| t.id.as_str())
    }

    /// Look up a task by id. With duplicate ids the last one wins, matching
    /// how the scheduler resolves dependency edges.
    pub fn task(&self, id: &str) -> Option<&TaskNode> {
        self.tasks.iter().rev().find(|t| t.id == id)
    }
}

impl TaskNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dependencies: Vec::new(),
            fields: Map::new(),
        }
    }

    /// Opaque payload field attached by the generator, if present.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
