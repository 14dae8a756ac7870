//! Severity levels a configurable problem can be reported at

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Ordered from quietest to loudest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Not reported at all
    Ignore,
    /// Reported as information only
    Info,
    /// Reported, does not fail the build
    Warning,
    /// Reported and fails the build
    Error,
}

impl Severity {
    pub const ALL: &'static [Severity] = &[
        Severity::Ignore,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Ignore => "ignore",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    pub const fn is_reported(self) -> bool {
        !matches!(self, Severity::Ignore)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .iter()
            .copied()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
