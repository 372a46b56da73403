//! Externally supplied pipeline traces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{FlowError, FlowState};

/// A verbatim snapshot of pipeline stage outcomes reported by an external
/// collaborator (agent/middleware/policy/store reports).
///
/// Stored exactly as received, for display. Interpretation into a
/// [`FlowState`] is strict: a snapshot that is not flow-state-shaped is
/// rejected rather than trusted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace(BTreeMap<String, Value>);

impl Trace {
    /// Interpret the snapshot as a flow state.
    ///
    /// Every key must name a known stage (wire aliases accepted) and carry a
    /// string status that parses; stages absent from the snapshot default to
    /// `idle`.
    pub fn to_flow_state(&self) -> Result<FlowState, FlowError> {
        let mut state = FlowState::default();
        for (key, value) in &self.0 {
            let stage = key.parse()?;
            let status = value.as_str().ok_or_else(|| FlowError::MalformedTrace {
                key: key.clone(),
                reason: "status is not a string".to_string(),
            })?;
            state.set(stage, status.parse()?);
        }
        Ok(state)
    }
}
