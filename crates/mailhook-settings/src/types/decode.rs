//! Webhook batch decoding settings.

use serde::{Deserialize, Serialize};

/// What the decoder does when an element names an event kind it does not know.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownEventPolicy {
    /// Abort the whole batch with an unknown-event error.
    #[default]
    Reject,
    /// Drop the element, record it as skipped, and keep decoding.
    Skip,
}

impl UnknownEventPolicy {
    /// Parse a policy name (`reject` or `skip`, case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "skip" => Some(Self::Skip),
            _ => None,
        }
    }
}

/// Settings consumed by the webhook decoder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecodeSettings {
    /// Handling of unrecognized `event` discriminators.
    pub unknown_events: UnknownEventPolicy,
    /// Largest payload accepted, in bytes. `0` disables the check.
    pub max_payload_bytes: usize,
}

impl Default for DecodeSettings {
    fn default() -> Self {
        Self {
            unknown_events: UnknownEventPolicy::Reject,
            max_payload_bytes: 8 * 1024 * 1024,
        }
    }
}
