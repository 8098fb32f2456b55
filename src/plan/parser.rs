// src/plan/parser.rs

use tracing::{debug, error};

use crate::errors::{PlanError, Result};
use crate::plan::extract::extract_payload;
use crate::plan::model::ExecutionGraph;

/// Extract and decode an [`ExecutionGraph`] from raw generator output.
///
/// This only checks the *shape* of the payload. Duplicate ids, dangling
/// dependencies and cycles are left to [`crate::plan::check`].
///
/// - not valid JSON → [`PlanError::MalformedPayload`]
/// - valid JSON of the wrong shape → [`PlanError::SchemaViolation`]
pub fn decode(text: &str) -> Result<ExecutionGraph> {
    let payload = extract_payload(text);
    debug!(payload_len = payload.len(), "decoding execution graph: {payload}");

    let graph: ExecutionGraph = serde_json::from_str(payload).map_err(PlanError::from)?;

    debug!(tasks = graph.len(), "decoded execution graph");
    Ok(graph)
}

/// Like [`decode`], but reports failure as `None`.
///
/// Generator output is expected to be broken fairly often, so callers
/// branch on absence; the diagnostic goes to the log.
pub fn parse(text: &str) -> Option<ExecutionGraph> {
    match decode(text) {
        Ok(graph) => Some(graph),
        Err(err) => {
            error!(kind = ?err.kind(), "failed to parse execution graph: {err}");
            None
        }
    }
}
