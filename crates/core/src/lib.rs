//! `trustflow-core` — pipeline domain primitives.
//!
//! This crate contains the **pure domain** vocabulary of the request
//! pipeline: stages, per-stage statuses, the total flow-state mapping, the
//! retained result payload, and verbatim collaborator traces. No IO, no
//! policy, no store.

pub mod error;
pub mod flow;
pub mod result;
pub mod stage;
pub mod status;
pub mod trace;

pub use error::FlowError;
pub use flow::FlowState;
pub use result::FlowOutcome;
pub use stage::Stage;
pub use status::StageStatus;
pub use trace::Trace;
