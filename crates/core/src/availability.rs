//! Operator-facing provider classification.

use serde::{Deserialize, Serialize};

/// How a provider surfaces in configuration and listing views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Excluded from operator-facing listings.
    Hidden,
    /// Active without explicit opt-in.
    EnabledByDefault,
    /// Present but requires explicit opt-in.
    DisabledByDefault,
}

impl Availability {
    /// The wire/config representation of this classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::EnabledByDefault => "enabled_by_default",
            Self::DisabledByDefault => "disabled_by_default",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
