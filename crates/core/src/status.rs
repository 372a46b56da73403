//! Per-stage status.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{FlowError, Stage};

/// Status of a single pipeline stage.
///
/// `Success`/`Allowed` are synonymous terminal-positive states and
/// `Error`/`Denied` synonymous terminal-negative states; they stay distinct
/// because the policy stage speaks allowed/denied while every other stage
/// speaks success/error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    #[default]
    Idle,
    Processing,
    Success,
    Allowed,
    Error,
    Denied,
}

impl StageStatus {
    pub fn is_terminal_positive(self) -> bool {
        matches!(self, StageStatus::Success | StageStatus::Allowed)
    }

    pub fn is_terminal_negative(self) -> bool {
        matches!(self, StageStatus::Error | StageStatus::Denied)
    }

    /// Terminal-positive status in the vocabulary of the given stage.
    pub fn positive_for(stage: Stage) -> StageStatus {
        match stage {
            Stage::Policy => StageStatus::Allowed,
            _ => StageStatus::Success,
        }
    }

    /// Terminal-negative status in the vocabulary of the given stage.
    pub fn negative_for(stage: Stage) -> StageStatus {
        match stage {
            Stage::Policy => StageStatus::Denied,
            _ => StageStatus::Error,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StageStatus::Idle => "idle",
            StageStatus::Processing => "processing",
            StageStatus::Success => "success",
            StageStatus::Allowed => "allowed",
            StageStatus::Error => "error",
            StageStatus::Denied => "denied",
        }
    }
}

impl core::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageStatus {
    type Err = FlowError;

    /// Parse a status identifier.
    ///
    /// `allow`/`deny` are the vocabulary policy-engine reports use.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(StageStatus::Idle),
            "processing" => Ok(StageStatus::Processing),
            "success" => Ok(StageStatus::Success),
            "allowed" | "allow" => Ok(StageStatus::Allowed),
            "error" => Ok(StageStatus::Error),
            "denied" | "deny" => Ok(StageStatus::Denied),
            other => Err(FlowError::InvalidStatus(other.to_string())),
        }
    }
}
