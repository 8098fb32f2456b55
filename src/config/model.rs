// src/config/model.rs

use serde::Deserialize;

use crate::types::OutputFormat;

/// Top-level configuration as read from a TOML file:
///
/// ```toml
/// [output]
/// format = "json"
/// show_fields = true
///
/// [planner]
/// require_valid = false
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Rendering options from `[output]`.
    #[serde(default)]
    pub output: OutputSection,

    /// Planning behaviour from `[planner]`.
    #[serde(default)]
    pub planner: PlannerSection,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// `"text"` (default) or `"json"`.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print each task's extra fields under its id in text output.
    #[serde(default)]
    pub show_fields: bool,
}

/// `[planner]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerSection {
    /// Refuse to print an execution order for a graph that fails
    /// validation.
    ///
    /// With `false`, the scheduler's best-effort order is printed anyway
    /// (dangling dependencies dropped). Cycles never produce an order.
    #[serde(default = "default_require_valid")]
    pub require_valid: bool,
}

fn default_require_valid() -> bool {
    true
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            require_valid: default_require_valid(),
        }
    }
}
