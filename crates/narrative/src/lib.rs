//! `trustflow-narrative` — narrative-generation support.
//!
//! The call to the local language model is an external collaborator with a
//! bounded wait; everything deterministic around it lives here: the request
//! payload and prompt, cleanup of the model's reply, and the fallback
//! summary used when the collaborator fails. A failure on this path never
//! affects the pipeline flow state — it only degrades display.

pub mod request;
pub mod summary;

pub use request::{
    DEFAULT_MODEL, DEFAULT_TIMEOUT, NarrativeOptions, NarrativeRequest, NarrativeResponse,
    build_prompt,
};
pub use summary::{clean_response, fallback_summary};
