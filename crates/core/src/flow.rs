//! The total stage→status mapping.

use std::collections::BTreeMap;
use std::ops::Index;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Stage, StageStatus};

/// Live status of every pipeline stage for the current (or most recent)
/// request attempt.
///
/// Total by construction: every stage always has exactly one status, `idle`
/// by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowState([StageStatus; Stage::ALL.len()]);

impl FlowState {
    pub fn get(&self, stage: Stage) -> StageStatus {
        self.0[stage.index()]
    }

    pub fn set(&mut self, stage: Stage, status: StageStatus) {
        self.0[stage.index()] = status;
    }

    /// Entries in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, StageStatus)> + '_ {
        Stage::ALL.into_iter().map(|stage| (stage, self.get(stage)))
    }

    pub fn all(&self, predicate: impl Fn(StageStatus) -> bool) -> bool {
        self.0.iter().all(|status| predicate(*status))
    }

    /// Number of stages currently `processing`.
    ///
    /// At most one in any well-formed mutation sequence; externally supplied
    /// traces are not held to that.
    pub fn processing_count(&self) -> usize {
        self.0
            .iter()
            .filter(|status| **status == StageStatus::Processing)
            .count()
    }
}

impl Index<Stage> for FlowState {
    type Output = StageStatus;

    fn index(&self, stage: Stage) -> &Self::Output {
        &self.0[stage.index()]
    }
}

// Serialized as a lowercase-keyed map ({"user": "idle", ...}) to match the
// collaborator wire shape; missing stages deserialize as idle.
impl Serialize for FlowState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Stage::ALL.len()))?;
        for (stage, status) in self.iter() {
            map.serialize_entry(stage.as_str(), &status)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FlowState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, StageStatus>::deserialize(deserializer)?;
        let mut state = FlowState::default();
        for (key, status) in entries {
            let stage = key.parse::<Stage>().map_err(D::Error::custom)?;
            state.set(stage, status);
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_idle() {
        let state = FlowState::default();
        assert!(state.all(|status| status == StageStatus::Idle));
        assert_eq!(state.processing_count(), 0);
    }

    #[test]
    fn set_touches_exactly_one_stage() {
        let mut state = FlowState::default();
        state.set(Stage::Agent, StageStatus::Processing);
        for (stage, status) in state.iter() {
            if stage == Stage::Agent {
                assert_eq!(status, StageStatus::Processing);
            } else {
                assert_eq!(status, StageStatus::Idle);
            }
        }
    }

    #[test]
    fn serializes_as_lowercase_map() {
        let mut state = FlowState::default();
        state.set(Stage::User, StageStatus::Success);
        state.set(Stage::Policy, StageStatus::Denied);

        let value = serde_json::to_value(state).unwrap();
        assert_eq!(value["user"], "success");
        assert_eq!(value["agent"], "idle");
        assert_eq!(value["policy"], "denied");
    }

    #[test]
    fn deserializes_partial_map_with_idle_defaults() {
        let state: FlowState =
            serde_json::from_str(r#"{"user": "success", "agent": "processing"}"#).unwrap();
        assert_eq!(state[Stage::User], StageStatus::Success);
        assert_eq!(state[Stage::Agent], StageStatus::Processing);
        assert_eq!(state[Stage::Store], StageStatus::Idle);
    }

    #[test]
    fn deserialize_rejects_unknown_stage_keys() {
        let result = serde_json::from_str::<FlowState>(r#"{"gateway": "idle"}"#);
        assert!(result.is_err());
    }
}
