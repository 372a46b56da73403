//! `trustflow-pipeline` — the pipeline state store.
//!
//! One explicitly owned, injectable record of the status of each pipeline
//! stage for the current (or most recent) request attempt, plus the retained
//! result, the last collaborator trace, and the authenticated session. All
//! UI surfaces read from it; the operations here are the only legal
//! mutations. The store never authorizes anything — it mirrors decisions
//! made elsewhere.

pub mod http;
pub mod store;

pub use http::failing_stage_for_status;
pub use store::{Applied, FlowStore, FlowTicket};
