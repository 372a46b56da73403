use serde::{Deserialize, Serialize};

use crate::AuthProfile;

/// An authenticated session: the raw bearer token plus its decoded profile.
///
/// Constructed as a pair so the token and the profile are present or absent
/// together; the state store holds `Option<AuthSession>`, never one half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    token: String,
    profile: AuthProfile,
}

impl AuthSession {
    pub fn new(token: impl Into<String>, profile: AuthProfile) -> Self {
        Self {
            token: token.into(),
            profile,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn profile(&self) -> &AuthProfile {
        &self.profile
    }
}
