//! Advisory pre-classification of a scenario.

use serde::{Deserialize, Serialize};

/// The catalog's expected outcome for a scenario, shown as a badge before
/// the request is sent.
///
/// `Conditional` is never computed: it is a hand-authored label on scenarios
/// whose real outcome depends on data the catalog cannot see (e.g. the
/// caller's region claim).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Expectation {
    Allowed,
    Denied,
    Conditional,
}

impl Expectation {
    pub fn as_str(self) -> &'static str {
        match self {
            Expectation::Allowed => "ALLOWED",
            Expectation::Denied => "DENIED",
            Expectation::Conditional => "CONDITIONAL",
        }
    }
}

impl core::fmt::Display for Expectation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
