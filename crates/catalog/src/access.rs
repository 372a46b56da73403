//! Request vocabulary: resources, actions, databases.

use serde::{Deserialize, Serialize};

/// Protected resource classes in the demo data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Patients,
    Notes,
}

/// Actions a role may hold on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Write,
}

/// Regional/sandbox databases behind the data-store stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Database {
    #[serde(rename = "us_db")]
    UsDb,
    #[serde(rename = "eu_db")]
    EuDb,
    #[serde(rename = "sandbox_db")]
    SandboxDb,
}

impl Database {
    pub fn as_str(self) -> &'static str {
        match self {
            Database::UsDb => "us_db",
            Database::EuDb => "eu_db",
            Database::SandboxDb => "sandbox_db",
        }
    }
}

impl core::fmt::Display for Database {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate access a scenario would perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    pub resource: Resource,
    pub action: Action,
    pub database: Database,

    /// Specific patient instance the request touches, when it touches one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
}

impl AccessRequest {
    pub fn new(resource: Resource, action: Action, database: Database) -> Self {
        Self {
            resource,
            action,
            database,
            patient_id: None,
        }
    }

    pub fn with_patient(mut self, patient_id: impl Into<String>) -> Self {
        self.patient_id = Some(patient_id.into());
        self
    }
}
