//! Settings error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading the settings file.
///
/// Every file-related variant names the file it came from. Bad environment
/// overrides are not errors; they are logged and ignored.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings file {}: {source}", .path.display())]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON, or a value does not fit its setting.
    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        /// File holding the bad content.
        path: PathBuf,
        /// Parser or type error.
        #[source]
        source: serde_json::Error,
    },
    /// The file parsed, but its top level is not a JSON object.
    #[error("settings file {} must contain a JSON object", .path.display())]
    NotAnObject {
        /// Offending file.
        path: PathBuf,
    },
    /// Compiled defaults could not be encoded for merging.
    #[error("failed to encode default settings: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SettingsError {
    /// File the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::NotAnObject { path } => {
                Some(path.as_path())
            }
            Self::Encode(_) => None,
        }
    }
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
