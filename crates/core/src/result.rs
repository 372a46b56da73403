//! Retained outcome payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The one result retained for the current request attempt.
///
/// Either an arbitrary structured success payload from a collaborator
/// (rows, generated query text, …) or a failure payload in the
/// `{error, status}` wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlowOutcome {
    // Failure first: an untagged success `Value` would match anything.
    Failure {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status: Option<u16>,
    },
    Success(Value),
}

impl FlowOutcome {
    pub fn success(value: Value) -> Self {
        FlowOutcome::Success(value)
    }

    pub fn failure(error: impl Into<String>, status: Option<u16>) -> Self {
        FlowOutcome::Failure {
            error: error.into(),
            status,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FlowOutcome::Failure { .. })
    }
}
