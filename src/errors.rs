// src/errors.rs

//! Crate-wide error type and aliases.
//!
//! Decode failures (`MalformedPayload`, `SchemaViolation`) come out of
//! [`crate::plan::decode`]; the structural ones (`DuplicateIdentifier`,
//! `DanglingDependency`, `CyclicDependency`) only ever come out of
//! [`crate::plan::check`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("schema violation: {0}")]
    SchemaViolation(String),

    #[error("duplicate task identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("task {task} depends on nonexistent task {dependency}")]
    DanglingDependency { task: String, dependency: String },

    /// `tasks` lists the members of the strongly connected components that
    /// blocked scheduling. Diagnostic only.
    #[error("cyclic dependency detected")]
    CyclicDependency { tasks: Vec<String> },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Coarse classification of a [`PlanError`], for callers that only need to
/// branch on what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanErrorKind {
    MalformedPayload,
    SchemaViolation,
    DuplicateIdentifier,
    DanglingDependency,
    CyclicDependency,
    Config,
    Io,
}

impl PlanError {
    pub fn kind(&self) -> PlanErrorKind {
        match self {
            PlanError::MalformedPayload(_) => PlanErrorKind::MalformedPayload,
            PlanError::SchemaViolation(_) => PlanErrorKind::SchemaViolation,
            PlanError::DuplicateIdentifier(_) => PlanErrorKind::DuplicateIdentifier,
            PlanError::DanglingDependency { .. } => PlanErrorKind::DanglingDependency,
            PlanError::CyclicDependency { .. } => PlanErrorKind::CyclicDependency,
            PlanError::TomlError(_) => PlanErrorKind::Config,
            PlanError::IoError(_) => PlanErrorKind::Io,
        }
    }

    /// True for failures raised while turning text into a graph.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self.kind(),
            PlanErrorKind::MalformedPayload | PlanErrorKind::SchemaViolation
        )
    }
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Syntax | Category::Eof => PlanError::MalformedPayload(err),
            Category::Data => PlanError::SchemaViolation(err.to_string()),
            Category::Io => PlanError::IoError(err.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
