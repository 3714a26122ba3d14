//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and implement
//! [`Default`] with production values. Types marked with `#[serde(default)]`
//! allow partial JSON; missing fields get their default value.

mod decode;
mod logging;

pub use decode::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Root settings type for the mailhook decoder.
///
/// Loaded from `~/.mailhook/settings.json` with defaults applied for
/// missing fields. Environment variables can override specific values.
///
/// # JSON Format
///
/// ```json
/// {
///   "decode": { "unknownEvents": "skip", "maxPayloadBytes": 1048576 },
///   "logging": { "level": "info" }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MailhookSettings {
    /// Settings schema version.
    pub version: String,
    /// Batch decoding behavior.
    pub decode: DecodeSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for MailhookSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            decode: DecodeSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
