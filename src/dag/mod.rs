// src/dag/mod.rs

//! Dependency graph and scheduling.
//!
//! - [`graph`] holds an index-based adjacency view of an execution graph.
//! - [`scheduler`] runs Kahn's algorithm over it to produce an execution
//!   order.

pub mod graph;
pub mod scheduler;

pub use graph::{DagGraph, DanglingEdge};
pub use scheduler::{execution_order, topological_sort};
