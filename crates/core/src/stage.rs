//! Pipeline stages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FlowError;

/// One hop in the fixed conceptual request pipeline.
///
/// Declaration order **is** pipeline order; the failure-cutoff semantics in
/// the state store depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    User,
    Agent,
    Middleware,
    Policy,
    Store,
}

impl Stage {
    /// All stages, in pipeline order.
    pub const ALL: [Stage; 5] = [
        Stage::User,
        Stage::Agent,
        Stage::Middleware,
        Stage::Policy,
        Stage::Store,
    ];

    /// Zero-based position in the pipeline.
    pub fn index(self) -> usize {
        match self {
            Stage::User => 0,
            Stage::Agent => 1,
            Stage::Middleware => 2,
            Stage::Policy => 3,
            Stage::Store => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::User => "user",
            Stage::Agent => "agent",
            Stage::Middleware => "middleware",
            Stage::Policy => "policy",
            Stage::Store => "store",
        }
    }

    /// Stages strictly after this one in pipeline order.
    pub fn downstream(self) -> impl Iterator<Item = Stage> {
        Stage::ALL.into_iter().skip(self.index() + 1)
    }
}

impl core::fmt::Display for Stage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = FlowError;

    /// Parse a stage identifier.
    ///
    /// `opa` and `db` are the wire names older collaborators report for the
    /// policy and store stages.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Stage::User),
            "agent" => Ok(Stage::Agent),
            "middleware" => Ok(Stage::Middleware),
            "policy" | "opa" => Ok(Stage::Policy),
            "store" | "db" => Ok(Stage::Store),
            other => Err(FlowError::InvalidStage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_is_pipeline_order() {
        for (i, stage) in Stage::ALL.into_iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
    }

    #[test]
    fn downstream_of_policy_is_store_only() {
        let after: Vec<Stage> = Stage::Policy.downstream().collect();
        assert_eq!(after, vec![Stage::Store]);
    }

    #[test]
    fn downstream_of_store_is_empty() {
        assert_eq!(Stage::Store.downstream().count(), 0);
    }

    #[test]
    fn parses_canonical_and_wire_names() {
        assert_eq!("policy".parse::<Stage>().unwrap(), Stage::Policy);
        assert_eq!("opa".parse::<Stage>().unwrap(), Stage::Policy);
        assert_eq!("db".parse::<Stage>().unwrap(), Stage::Store);
    }

    #[test]
    fn unknown_stage_is_rejected() {
        let err = "gateway".parse::<Stage>().unwrap_err();
        assert_eq!(err, FlowError::InvalidStage("gateway".to_string()));
    }

    #[test]
    fn display_round_trips() {
        for stage in Stage::ALL {
            assert_eq!(stage.to_string().parse::<Stage>().unwrap(), stage);
        }
    }
}
