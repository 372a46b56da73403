//! HTTP status → failing stage convention.

use trustflow_core::Stage;

/// Map an HTTP error status from the request-handling collaborators to the
/// stage shown as failed, with the message displayed for it.
///
/// This is a caller convention, not enforced by the store: 401 means the
/// bearer token never made it past the agent, 403 means the policy engine
/// said no, 5xx means the data store broke, anything else is pinned on the
/// middleware.
pub fn failing_stage_for_status(status: u16) -> (Stage, &'static str) {
    match status {
        401 => (Stage::Agent, "Authentication failed"),
        403 => (Stage::Policy, "Access denied by policy"),
        s if s >= 500 => (Stage::Store, "Database error"),
        _ => (Stage::Middleware, "Request processing failed"),
    }
}
