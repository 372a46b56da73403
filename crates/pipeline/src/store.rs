//! The flow store and its narrow mutation API.

use serde_json::Value;
use uuid::Uuid;

use trustflow_auth::{AuthProfile, AuthSession};
use trustflow_core::{FlowError, FlowOutcome, FlowState, Stage, StageStatus, Trace};

/// Failure message used when a flow fails without one.
const ACCESS_DENIED: &str = "Access denied";

/// Correlation identifier for one flow attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FlowId(Uuid);

impl FlowId {
    fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl core::fmt::Display for FlowId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capability to mutate one specific flow attempt.
///
/// `start_flow` mints one; the task driving the attempt holds it and presents
/// it with every mutation. A ticket for a superseded flow is refused, which
/// keeps a late-arriving network response for an abandoned attempt from
/// corrupting the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowTicket(FlowId);

/// Whether a ticketed mutation reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a stale mutation was silently dropped; check which"]
pub enum Applied {
    /// The ticket matched the active flow and the mutation was applied.
    Current,
    /// The ticket's flow was superseded; nothing changed.
    Stale,
}

impl Applied {
    pub fn is_stale(self) -> bool {
        self == Applied::Stale
    }
}

/// The authoritative snapshot of the in-flight (or most recently completed)
/// request: flow state, retained result, last collaborator trace, and the
/// authenticated session.
///
/// Single logical owner, no interior locking: in the reference environment
/// all mutations run to completion on one logical thread.
#[derive(Debug, Default)]
pub struct FlowStore {
    flow: FlowState,
    result: Option<FlowOutcome>,
    trace: Option<Trace>,
    session: Option<AuthSession>,
    active: Option<FlowId>,
}

impl FlowStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Identity ────────────────────────────────────────────────────────

    /// Install or clear the authenticated session. Does not touch the flow.
    pub fn set_session(&mut self, session: Option<AuthSession>) {
        self.session = session;
    }

    // ── Pipeline operations ─────────────────────────────────────────────

    /// Begin a new flow attempt: the user stage has succeeded (the gesture
    /// happened), the agent is processing, everything after is untouched
    /// territory. Clears the retained result and supersedes any in-flight
    /// attempt.
    pub fn start_flow(&mut self) -> FlowTicket {
        if let Some(previous) = self.active {
            tracing::debug!(superseded = %previous, "new flow supersedes in-flight attempt");
        }

        let id = FlowId::new();
        self.active = Some(id);
        self.result = None;
        self.flow = FlowState::default();
        self.flow.set(Stage::User, StageStatus::Success);
        self.flow.set(Stage::Agent, StageStatus::Processing);

        tracing::debug!(flow = %id, "flow started");
        FlowTicket(id)
    }

    /// Advance the processing cursor: mark `current` terminal (positive or
    /// negative per `succeeded`) and, on success, mark `next` processing.
    pub fn progress(
        &mut self,
        ticket: &FlowTicket,
        current: Stage,
        next: Option<Stage>,
        succeeded: bool,
    ) -> Applied {
        if self.refuse_stale(ticket, "progress").is_stale() {
            return Applied::Stale;
        }

        let status = if succeeded {
            StageStatus::positive_for(current)
        } else {
            StageStatus::negative_for(current)
        };
        self.flow.set(current, status);

        if succeeded {
            if let Some(next) = next {
                self.flow.set(next, StageStatus::Processing);
            }
        }

        tracing::debug!(stage = %current, %succeeded, "flow progressed");
        Applied::Current
    }

    /// Terminate the attempt at a single point of failure.
    ///
    /// The failing stage goes terminal-negative, every stage strictly after
    /// it returns to idle (never reached), and every stage before it keeps
    /// its last-recorded status. The retained result becomes the standard
    /// `{error, 403}` failure payload.
    pub fn fail(&mut self, ticket: &FlowTicket, stage: Stage, message: Option<&str>) -> Applied {
        if self.refuse_stale(ticket, "fail").is_stale() {
            return Applied::Stale;
        }

        self.flow.set(stage, StageStatus::negative_for(stage));
        for downstream in stage.downstream() {
            self.flow.set(downstream, StageStatus::Idle);
        }

        let message = message.unwrap_or(ACCESS_DENIED);
        self.result = Some(FlowOutcome::failure(message, Some(403)));
        self.active = None;

        tracing::info!(%stage, message, "flow failed");
        Applied::Current
    }

    /// Terminate the attempt with full success: every stage goes to its
    /// terminal-positive vocabulary and the payload is retained.
    pub fn complete(&mut self, ticket: &FlowTicket, payload: Value) -> Applied {
        if self.refuse_stale(ticket, "complete").is_stale() {
            return Applied::Stale;
        }

        for stage in Stage::ALL {
            self.flow.set(stage, StageStatus::positive_for(stage));
        }
        self.result = Some(FlowOutcome::success(payload));
        self.active = None;

        tracing::debug!("flow completed");
        Applied::Current
    }

    /// Trust an external report: store the trace verbatim and replace the
    /// whole flow state with its interpretation (all-idle when absent).
    ///
    /// This is the alternative to the incremental `progress`/`fail` path;
    /// callers pick one mechanism per request. A malformed trace is rejected
    /// and the store is left untouched. Supersedes any in-flight attempt.
    pub fn set_trace(&mut self, trace: Option<Trace>) -> Result<(), FlowError> {
        let flow = match &trace {
            Some(trace) => trace.to_flow_state()?,
            None => FlowState::default(),
        };
        self.trace = trace;
        self.flow = flow;
        self.active = None;
        Ok(())
    }

    /// Clear this attempt: trace, result, and flow state go back to empty.
    /// The session survives; this is "try again", not "log out".
    pub fn reset_flow(&mut self) {
        self.trace = None;
        self.result = None;
        self.flow = FlowState::default();
        self.active = None;
    }

    /// Full logout-equivalent clear: `reset_flow` plus the session.
    pub fn reset(&mut self) {
        self.reset_flow();
        self.session = None;
    }

    // ── Read access ─────────────────────────────────────────────────────

    pub fn flow(&self) -> &FlowState {
        &self.flow
    }

    pub fn result(&self) -> Option<&FlowOutcome> {
        self.result.as_ref()
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(AuthSession::token)
    }

    pub fn profile(&self) -> Option<&AuthProfile> {
        self.session.as_ref().map(AuthSession::profile)
    }

    fn refuse_stale(&self, ticket: &FlowTicket, operation: &'static str) -> Applied {
        if self.active == Some(ticket.0) {
            Applied::Current
        } else {
            tracing::debug!(flow = %ticket.0, operation, "dropping mutation for superseded flow");
            Applied::Stale
        }
    }
}
