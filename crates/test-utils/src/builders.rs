#![allow(dead_code)]

use plandag::{ExecutionGraph, TaskNode};
use serde_json::Value;

/// Builder for `ExecutionGraph` to simplify test setup.
pub struct GraphBuilder {
    tasks: Vec<TaskNode>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn with_task(mut self, task: TaskNode) -> Self {
        self.tasks.push(task);
        self
    }

    /// Shorthand for a task with only an id and dependencies.
    pub fn task(self, id: &str, deps: &[&str]) -> Self {
        let mut builder = TaskBuilder::new(id);
        for dep in deps {
            builder = builder.after(dep);
        }
        self.with_task(builder.build())
    }

    pub fn build(self) -> ExecutionGraph {
        ExecutionGraph::new(self.tasks)
    }

    /// The graph as generator-style JSON text.
    pub fn to_json(self) -> String {
        serde_json::to_string(&self.build()).expect("graph serializes")
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskNode`.
pub struct TaskBuilder {
    task: TaskNode,
}

impl TaskBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            task: TaskNode::new(id),
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.task.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn build(self) -> TaskNode {
        self.task
    }
}
