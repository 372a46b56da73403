use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Role;

/// Decoded identity claims (transport-agnostic).
///
/// This is the minimal set of claims the demo core reads once the identity
/// collaborator has decoded a token. It is owned by that collaborator and
/// read-only here; the pipeline operations never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthProfile {
    /// Subject / principal identifier.
    pub sub: String,

    /// Login-facing username.
    pub preferred_username: String,

    /// Explicit role claim, when the provider issues one.
    #[serde(default)]
    pub role: Option<Role>,

    /// Realm-level roles (the provider's `realm_access.roles`).
    #[serde(default)]
    pub realm_roles: Vec<Role>,

    /// Home region of the principal (`us`, `eu`, …).
    #[serde(default)]
    pub region: Option<String>,

    /// Patient identifiers assigned to this principal's care.
    #[serde(default)]
    pub assigned_patients: Vec<String>,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl AuthProfile {
    /// Role used for catalog lookups.
    ///
    /// Fallback chain: the explicit role claim, else the first realm role,
    /// else [`Role::UNKNOWN`].
    pub fn effective_role(&self) -> Role {
        self.role
            .clone()
            .or_else(|| self.realm_roles.first().cloned())
            .unwrap_or(Role::UNKNOWN)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate the claim time window.
///
/// Note: this validates the *claims* only. Signature verification and token
/// decoding are intentionally outside this crate (and outside the demo core
/// altogether).
pub fn validate_claims(
    profile: &AuthProfile,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    if profile.expires_at <= profile.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < profile.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= profile.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}
