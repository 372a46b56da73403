//! Per-role demo scenario sets.
//!
//! Each role gets an ordered list of selectable actions/natural-language
//! queries, labeled with the catalog's expected outcome at construction
//! time. The label never feeds back into the pipeline state store.

use serde::Serialize;

use trustflow_auth::Role;

use crate::{AccessRequest, Action, Catalog, Database, Expectation, Resource};

/// Fixed patient id used by templates that attempt access outside the
/// caller's assignment set.
const UNASSIGNED_PATIENT: &str = "p999";

/// How a scenario template refers to patient instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatientRef {
    /// No specific instance (notes, aggregates, statistics).
    None,
    /// The caller's first assigned patient, when one exists.
    Assigned,
    /// An instance outside the caller's assignment. A scan over "all
    /// patients" is modeled this way: it necessarily touches unassigned
    /// instances.
    Unassigned,
}

struct ScenarioTemplate {
    title: &'static str,
    description: &'static str,
    /// Natural-language query; `{username}` is interpolated.
    query: &'static str,
    resource: Resource,
    action: Action,
    database: Database,
    patient: PatientRef,
    /// Hand-authored escape hatch: the real decision depends on data the
    /// catalog cannot see (e.g. the caller's region claim).
    conditional: bool,
}

impl ScenarioTemplate {
    const fn plain(
        title: &'static str,
        description: &'static str,
        query: &'static str,
        resource: Resource,
        action: Action,
        database: Database,
        patient: PatientRef,
    ) -> Self {
        Self {
            title,
            description,
            query,
            resource,
            action,
            database,
            patient,
            conditional: false,
        }
    }

    const fn conditional(
        title: &'static str,
        description: &'static str,
        query: &'static str,
        resource: Resource,
        action: Action,
        database: Database,
    ) -> Self {
        Self {
            title,
            description,
            query,
            resource,
            action,
            database,
            patient: PatientRef::None,
            conditional: true,
        }
    }
}

/// A selectable demo scenario, labeled and ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub title: String,
    pub description: String,
    pub query: String,
    pub request: AccessRequest,
    pub expectation: Expectation,
}

const THERAPIST: &[ScenarioTemplate] = &[
    ScenarioTemplate::plain(
        "My Assigned Patients",
        "View patients assigned to your care",
        "Show me patients assigned to {username}",
        Resource::Patients,
        Action::Read,
        Database::UsDb,
        PatientRef::Assigned,
    ),
    ScenarioTemplate::plain(
        "My Session Notes",
        "Access your therapy session documentation",
        "Show me therapy notes for therapist {username}",
        Resource::Notes,
        Action::Read,
        Database::UsDb,
        PatientRef::None,
    ),
    ScenarioTemplate::plain(
        "All Patient Records",
        "Attempt to access all patient data (should be denied)",
        "Show me all patients in the system",
        Resource::Patients,
        Action::Read,
        Database::UsDb,
        PatientRef::Unassigned,
    ),
];

const ADMIN: &[ScenarioTemplate] = &[
    ScenarioTemplate::plain(
        "All US Patients",
        "Administrative access to US patient database",
        "Show me all patients in the US database",
        Resource::Patients,
        Action::Read,
        Database::UsDb,
        PatientRef::None,
    ),
    ScenarioTemplate::plain(
        "System Statistics",
        "View system-wide patient and session metrics",
        "Show me total patient count and session statistics",
        Resource::Patients,
        Action::Read,
        Database::UsDb,
        PatientRef::None,
    ),
    ScenarioTemplate::conditional(
        "Cross-Region Access",
        "Try to access EU patient data (may be restricted)",
        "Show me patients in the EU database",
        Resource::Patients,
        Action::Read,
        Database::EuDb,
    ),
];

const ANALYST: &[ScenarioTemplate] = &[
    ScenarioTemplate::plain(
        "Research Data",
        "Access de-identified research datasets",
        "Show me research data and treatment outcomes",
        Resource::Patients,
        Action::Read,
        Database::SandboxDb,
        PatientRef::None,
    ),
    ScenarioTemplate::plain(
        "Analytics Metrics",
        "View aggregated treatment effectiveness data",
        "Show me treatment outcome statistics and trends",
        Resource::Notes,
        Action::Read,
        Database::SandboxDb,
        PatientRef::None,
    ),
    ScenarioTemplate::plain(
        "Identifiable Data",
        "Attempt to access patient identifiable information (should be denied)",
        "Show me patient names and contact information",
        Resource::Patients,
        Action::Read,
        Database::UsDb,
        PatientRef::None,
    ),
];

const SUPPORT: &[ScenarioTemplate] = &[
    ScenarioTemplate::plain(
        "Support Contacts",
        "Access patient contact information for support",
        "Show me patient contact information for support cases",
        Resource::Patients,
        Action::Read,
        Database::UsDb,
        PatientRef::None,
    ),
    ScenarioTemplate::plain(
        "Active Cases",
        "View patients requiring support assistance",
        "Show me patients with active support cases",
        Resource::Patients,
        Action::Read,
        Database::UsDb,
        PatientRef::None,
    ),
    ScenarioTemplate::plain(
        "Medical Records",
        "Attempt to access medical records (should be denied)",
        "Show me patient diagnoses and treatment plans",
        Resource::Notes,
        Action::Read,
        Database::UsDb,
        PatientRef::None,
    ),
];

const SUPERUSER: &[ScenarioTemplate] = &[
    ScenarioTemplate::plain(
        "Full US Access",
        "Unrestricted access to US patient database",
        "Show me all patients and records in US database",
        Resource::Patients,
        Action::Read,
        Database::UsDb,
        PatientRef::None,
    ),
    ScenarioTemplate::plain(
        "Cross-Region Data",
        "Access patient data across all regions",
        "Show me patients from EU database",
        Resource::Patients,
        Action::Read,
        Database::EuDb,
        PatientRef::None,
    ),
    ScenarioTemplate::plain(
        "Complete System View",
        "Full administrative access to all data",
        "Show me complete system overview with all patient data",
        Resource::Patients,
        Action::Read,
        Database::SandboxDb,
        PatientRef::None,
    ),
];

fn templates_for(role: &Role) -> &'static [ScenarioTemplate] {
    match role.as_str() {
        "therapist" => THERAPIST,
        "admin" => ADMIN,
        "analyst" => ANALYST,
        "superuser" => SUPERUSER,
        // Unrecognized roles see the support set, matching the catalog's
        // most-restrictive fallback entry.
        _ => SUPPORT,
    }
}

/// Build the labeled scenario list for a role.
///
/// `assigned` is the caller's assigned-patient set from the identity
/// profile; username interpolation only affects display strings.
pub fn scenarios_for(
    catalog: &Catalog,
    role: &Role,
    username: &str,
    assigned: &[String],
) -> Vec<Scenario> {
    templates_for(role)
        .iter()
        .map(|template| {
            let mut request =
                AccessRequest::new(template.resource, template.action, template.database);
            request.patient_id = match template.patient {
                PatientRef::None => None,
                PatientRef::Assigned => assigned.first().cloned(),
                PatientRef::Unassigned => Some(UNASSIGNED_PATIENT.to_string()),
            };

            let expectation = if template.conditional {
                Expectation::Conditional
            } else {
                catalog.expected(role, &request, assigned)
            };

            Scenario {
                title: template.title.to_string(),
                description: template.description.to_string(),
                query: template.query.replace("{username}", username),
                request,
                expectation,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: &Role, assigned: &[String]) -> Vec<Expectation> {
        let catalog = Catalog::builtin();
        scenarios_for(&catalog, role, "sarah_therapist", assigned)
            .into_iter()
            .map(|scenario| scenario.expectation)
            .collect()
    }

    #[test]
    fn therapist_set_is_allowed_allowed_denied() {
        let assigned = vec!["p001".to_string()];
        assert_eq!(
            labels(&Role::THERAPIST, &assigned),
            vec![Expectation::Allowed, Expectation::Allowed, Expectation::Denied]
        );
    }

    #[test]
    fn admin_set_ends_with_hand_authored_conditional() {
        assert_eq!(
            labels(&Role::ADMIN, &[]),
            vec![Expectation::Allowed, Expectation::Allowed, Expectation::Conditional]
        );
    }

    #[test]
    fn analyst_is_denied_identifiable_data() {
        assert_eq!(
            labels(&Role::ANALYST, &[]),
            vec![Expectation::Allowed, Expectation::Allowed, Expectation::Denied]
        );
    }

    #[test]
    fn support_is_denied_medical_records() {
        assert_eq!(
            labels(&Role::SUPPORT, &[]),
            vec![Expectation::Allowed, Expectation::Allowed, Expectation::Denied]
        );
    }

    #[test]
    fn superuser_set_is_all_allowed() {
        assert_eq!(
            labels(&Role::SUPERUSER, &[]),
            vec![Expectation::Allowed; 3]
        );
    }

    #[test]
    fn unknown_role_sees_support_scenarios() {
        let catalog = Catalog::builtin();
        let scenarios = scenarios_for(&catalog, &Role::new("intern"), "intern_1", &[]);
        assert_eq!(scenarios[0].title, "Support Contacts");
        assert_eq!(scenarios.len(), 3);
    }

    #[test]
    fn username_is_interpolated_into_queries() {
        let catalog = Catalog::builtin();
        let assigned = vec!["p001".to_string()];
        let scenarios = scenarios_for(&catalog, &Role::THERAPIST, "sarah_therapist", &assigned);
        assert_eq!(scenarios[0].query, "Show me patients assigned to sarah_therapist");
    }

    #[test]
    fn assigned_template_resolves_to_first_assigned_patient() {
        let catalog = Catalog::builtin();
        let assigned = vec!["p001".to_string(), "p002".to_string()];
        let scenarios = scenarios_for(&catalog, &Role::THERAPIST, "sarah_therapist", &assigned);
        assert_eq!(scenarios[0].request.patient_id.as_deref(), Some("p001"));
    }

    #[test]
    fn therapist_with_no_assignments_keeps_a_valid_set() {
        // No assigned patients: the first scenario degrades to an aggregate
        // request and stays allowed by the vacuous assignment check.
        assert_eq!(
            labels(&Role::THERAPIST, &[]),
            vec![Expectation::Allowed, Expectation::Allowed, Expectation::Denied]
        );
    }
}
