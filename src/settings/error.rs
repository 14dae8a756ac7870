use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while building [`super::ProblemSettings`] from user input.
pub enum SettingsError {
    #[error("unknown option key '{0}'")]
    /// No severity option has this key.
    UnknownOption(String),

    #[error("unknown severity '{value}' for option '{key}'")]
    /// The value is not one of `ignore`, `info`, `warning`, `error`.
    UnknownSeverity { key: String, value: String },

    #[error("unknown warning token '{0}'")]
    UnknownToken(String),

    #[error("malformed warning spec '{spec}': {reason}")]
    /// A `-warn` style spec mixed incremental and bare tokens or was empty.
    MalformedWarnSpec { spec: String, reason: &'static str },

    #[error("cannot read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}
