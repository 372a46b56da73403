//! Flow domain error model.
//!
//! These are programmer-error conditions at the parse boundary (unknown
//! stage/status identifiers arriving from outside the typed API). Domain
//! failures — a denied request, a collaborator timeout — are *values*
//! captured in the retained [`FlowOutcome`](crate::FlowOutcome) slot, never
//! errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// An identifier did not name a known pipeline stage.
    #[error("invalid stage: '{0}'")]
    InvalidStage(String),

    /// An identifier did not name a known stage status.
    #[error("invalid stage status: '{0}'")]
    InvalidStatus(String),

    /// An externally supplied trace is not a flow-state-shaped mapping.
    #[error("malformed trace entry '{key}': {reason}")]
    MalformedTrace { key: String, reason: String },
}
