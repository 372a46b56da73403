//! `trustflow-auth` — identity claims for the zero-trust demo core.
//!
//! This crate is decoupled from the identity provider and from transport:
//! it models the claims the core reads *after* an external collaborator has
//! decoded (and, in a hardened deployment, verified) the bearer token.

pub mod profile;
pub mod roles;
pub mod session;

pub use profile::{AuthProfile, TokenValidationError, validate_claims};
pub use roles::Role;
pub use session::AuthSession;
