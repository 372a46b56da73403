//! `trustflow-catalog` — static role/resource/database permission model.
//!
//! Given a role, this crate produces the demo-selectable scenarios for it,
//! each pre-labeled with an *expected* outcome, without any network call.
//! The label is advisory: the authoritative accept/reject decision is always
//! made by the external policy engine at request time, and nothing here is
//! enforcement.

pub mod access;
pub mod catalog;
pub mod expectation;
pub mod scenario;

pub use access::{AccessRequest, Action, Database, Resource};
pub use catalog::{Catalog, PermissionEntry};
pub use expectation::Expectation;
pub use scenario::{Scenario, scenarios_for};
