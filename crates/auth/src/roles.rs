use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier carried in identity claims.
///
/// Roles are opaque strings at this layer; mapping a role to concrete
/// permissions is the catalog's job. The demo personas get named constants
/// so catalog tables and scenario sets can refer to them without stringly
/// typos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const THERAPIST: Role = Role(Cow::Borrowed("therapist"));
    pub const ADMIN: Role = Role(Cow::Borrowed("admin"));
    pub const ANALYST: Role = Role(Cow::Borrowed("analyst"));
    pub const SUPPORT: Role = Role(Cow::Borrowed("support"));
    pub const SUPERUSER: Role = Role(Cow::Borrowed("superuser"));

    /// Role reported when the profile carries no usable role claim.
    pub const UNKNOWN: Role = Role(Cow::Borrowed("unknown"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
