//! The static role→permission table.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

use trustflow_auth::Role;

use crate::{AccessRequest, Action, Database, Expectation, Resource};

/// What a single role may do: its resource/action grants, the databases it
/// may touch, and whether patient-instance assignment must be checked.
///
/// Entries are immutable for the process lifetime; the catalog is built once
/// at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionEntry {
    role: Role,
    resource_permissions: BTreeMap<Resource, BTreeSet<Action>>,
    allowed_databases: BTreeSet<Database>,
    requires_assignment_check: bool,
}

impl PermissionEntry {
    pub fn new(
        role: Role,
        resource_permissions: impl IntoIterator<Item = (Resource, Vec<Action>)>,
        allowed_databases: impl IntoIterator<Item = Database>,
        requires_assignment_check: bool,
    ) -> Self {
        Self {
            role,
            resource_permissions: resource_permissions
                .into_iter()
                .map(|(resource, actions)| (resource, actions.into_iter().collect()))
                .collect(),
            allowed_databases: allowed_databases.into_iter().collect(),
            requires_assignment_check,
        }
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn allows_action(&self, resource: Resource, action: Action) -> bool {
        self.resource_permissions
            .get(&resource)
            .is_some_and(|actions| actions.contains(&action))
    }

    pub fn allows_database(&self, database: Database) -> bool {
        self.allowed_databases.contains(&database)
    }

    pub fn requires_assignment_check(&self) -> bool {
        self.requires_assignment_check
    }

    /// Pure three-condition check: action grant, database grant, and (when
    /// this role is assignment-checked and the request names a specific
    /// patient) presence of that patient in the caller's assignment set.
    pub fn permits(&self, request: &AccessRequest, assigned: &[String]) -> bool {
        let action_ok = self.allows_action(request.resource, request.action);
        let database_ok = self.allows_database(request.database);
        let assignment_ok = !self.requires_assignment_check
            || request
                .patient_id
                .as_deref()
                .map_or(true, |id| assigned.iter().any(|a| a == id));
        action_ok && database_ok && assignment_ok
    }
}

/// The full permission table, keyed by role.
///
/// Lookup for an unrecognized role falls back to the most restrictive
/// non-empty entry rather than failing closed with no options. That fallback
/// drives demo UX only; it is not a security control.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<Role, PermissionEntry>,
    fallback: Role,
}

impl Catalog {
    /// The built-in demo table.
    ///
    /// Therapists reach regional patient data but only for assigned
    /// patients; analysts live in the de-identified sandbox; support reads
    /// patient status but no clinical notes; admin and superuser span
    /// everything.
    pub fn builtin() -> Self {
        let entries = [
            PermissionEntry::new(
                Role::THERAPIST,
                [
                    (Resource::Patients, vec![Action::Read]),
                    (Resource::Notes, vec![Action::Read, Action::Write]),
                ],
                [Database::UsDb, Database::EuDb],
                true,
            ),
            PermissionEntry::new(
                Role::ADMIN,
                [
                    (Resource::Patients, vec![Action::Read, Action::Write]),
                    (Resource::Notes, vec![Action::Read, Action::Write]),
                ],
                [Database::UsDb, Database::EuDb, Database::SandboxDb],
                false,
            ),
            PermissionEntry::new(
                Role::ANALYST,
                [
                    (Resource::Patients, vec![Action::Read]),
                    (Resource::Notes, vec![Action::Read]),
                ],
                [Database::SandboxDb],
                false,
            ),
            PermissionEntry::new(
                Role::SUPPORT,
                [(Resource::Patients, vec![Action::Read])],
                [Database::UsDb, Database::EuDb],
                false,
            ),
            PermissionEntry::new(
                Role::SUPERUSER,
                [
                    (Resource::Patients, vec![Action::Read, Action::Write]),
                    (Resource::Notes, vec![Action::Read, Action::Write]),
                ],
                [Database::UsDb, Database::EuDb, Database::SandboxDb],
                false,
            ),
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.role.clone(), entry))
                .collect(),
            fallback: Role::SUPPORT,
        }
    }

    /// Entry for a role, falling back to the most restrictive entry for
    /// roles the table does not know.
    pub fn entry(&self, role: &Role) -> &PermissionEntry {
        self.entries.get(role).unwrap_or_else(|| {
            // The fallback role is always present in the table.
            &self.entries[&self.fallback]
        })
    }

    /// Advisory expected outcome for one candidate access.
    ///
    /// Never returns [`Expectation::Conditional`]; that label is only ever
    /// hand-authored on scenario templates.
    pub fn expected(
        &self,
        role: &Role,
        request: &AccessRequest,
        assigned: &[String],
    ) -> Expectation {
        if self.entry(role).permits(request, assigned) {
            Expectation::Allowed
        } else {
            Expectation::Denied
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assigned() -> Vec<String> {
        vec!["p001".to_string(), "p002".to_string()]
    }

    #[test]
    fn therapist_reads_assigned_patient() {
        let catalog = Catalog::builtin();
        let request = AccessRequest::new(Resource::Patients, Action::Read, Database::UsDb)
            .with_patient("p001");
        assert_eq!(
            catalog.expected(&Role::THERAPIST, &request, &assigned()),
            Expectation::Allowed
        );
    }

    #[test]
    fn therapist_denied_unassigned_patient() {
        let catalog = Catalog::builtin();
        let request = AccessRequest::new(Resource::Patients, Action::Read, Database::UsDb)
            .with_patient("p999");
        assert_eq!(
            catalog.expected(&Role::THERAPIST, &request, &assigned()),
            Expectation::Denied
        );
    }

    #[test]
    fn therapist_aggregate_request_skips_assignment_check() {
        let catalog = Catalog::builtin();
        let request = AccessRequest::new(Resource::Notes, Action::Read, Database::UsDb);
        assert_eq!(
            catalog.expected(&Role::THERAPIST, &request, &[]),
            Expectation::Allowed
        );
    }

    #[test]
    fn analyst_denied_outside_sandbox() {
        let catalog = Catalog::builtin();
        let request = AccessRequest::new(Resource::Patients, Action::Read, Database::UsDb);
        assert_eq!(
            catalog.expected(&Role::ANALYST, &request, &[]),
            Expectation::Denied
        );
        let sandboxed = AccessRequest::new(Resource::Patients, Action::Read, Database::SandboxDb);
        assert_eq!(
            catalog.expected(&Role::ANALYST, &sandboxed, &[]),
            Expectation::Allowed
        );
    }

    #[test]
    fn support_has_no_notes_access() {
        let catalog = Catalog::builtin();
        let request = AccessRequest::new(Resource::Notes, Action::Read, Database::UsDb);
        assert_eq!(
            catalog.expected(&Role::SUPPORT, &request, &[]),
            Expectation::Denied
        );
    }

    #[test]
    fn unknown_role_falls_back_to_support_entry() {
        let catalog = Catalog::builtin();
        let intern = Role::new("intern");
        assert_eq!(catalog.entry(&intern).role(), &Role::SUPPORT);

        let request = AccessRequest::new(Resource::Patients, Action::Read, Database::UsDb);
        assert_eq!(
            catalog.expected(&intern, &request, &[]),
            Expectation::Allowed
        );
        let sandboxed = AccessRequest::new(Resource::Patients, Action::Read, Database::SandboxDb);
        assert_eq!(
            catalog.expected(&intern, &sandboxed, &[]),
            Expectation::Denied
        );
    }

    #[test]
    fn flipping_any_single_condition_flips_the_label() {
        let catalog = Catalog::builtin();
        let allowed = AccessRequest::new(Resource::Patients, Action::Read, Database::UsDb)
            .with_patient("p001");
        assert_eq!(
            catalog.expected(&Role::THERAPIST, &allowed, &assigned()),
            Expectation::Allowed
        );

        // Flip the action grant.
        let mut flipped = allowed.clone();
        flipped.action = Action::Write;
        assert_eq!(
            catalog.expected(&Role::THERAPIST, &flipped, &assigned()),
            Expectation::Denied
        );

        // Flip the database grant.
        let mut flipped = allowed.clone();
        flipped.database = Database::SandboxDb;
        assert_eq!(
            catalog.expected(&Role::THERAPIST, &flipped, &assigned()),
            Expectation::Denied
        );

        // Flip the assignment condition.
        assert_eq!(
            catalog.expected(&Role::THERAPIST, &allowed, &[]),
            Expectation::Denied
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_resource() -> impl Strategy<Value = Resource> {
            prop_oneof![Just(Resource::Patients), Just(Resource::Notes)]
        }

        fn any_action() -> impl Strategy<Value = Action> {
            prop_oneof![Just(Action::Read), Just(Action::Write)]
        }

        fn any_database() -> impl Strategy<Value = Database> {
            prop_oneof![
                Just(Database::UsDb),
                Just(Database::EuDb),
                Just(Database::SandboxDb),
            ]
        }

        proptest! {
            /// Property: the advisory label equals the three-condition check,
            /// for every role and every request shape.
            #[test]
            fn expected_matches_three_condition_check(
                resource in any_resource(),
                action in any_action(),
                database in any_database(),
                patient in proptest::option::of("p[0-9]{3}"),
                assigned in proptest::collection::vec("p[0-9]{3}", 0..4),
            ) {
                let catalog = Catalog::builtin();
                let mut request = AccessRequest::new(resource, action, database);
                request.patient_id = patient;

                for role in [Role::THERAPIST, Role::ADMIN, Role::ANALYST, Role::SUPPORT, Role::SUPERUSER] {
                    let entry = catalog.entry(&role);
                    let expected = catalog.expected(&role, &request, &assigned);
                    prop_assert_eq!(
                        expected == Expectation::Allowed,
                        entry.permits(&request, &assigned)
                    );
                    prop_assert_ne!(expected, Expectation::Conditional);
                }
            }

            /// Property: superuser is denied nothing the vocabulary can express.
            #[test]
            fn superuser_is_never_denied(
                resource in any_resource(),
                action in any_action(),
                database in any_database(),
            ) {
                let catalog = Catalog::builtin();
                let request = AccessRequest::new(resource, action, database);
                prop_assert_eq!(
                    catalog.expected(&Role::SUPERUSER, &request, &[]),
                    Expectation::Allowed
                );
            }
        }
    }
}
