//! The [`Envelope`] struct: fields carried by every webhook event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields shared by every event kind.
///
/// Each record embeds an `Envelope` as a flattened field, so on the wire these
/// keys sit next to the kind-specific ones. `email` and `timestamp` default
/// when absent here; the dispatcher enforces their presence before decoding.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Recipient address.
    #[serde(default)]
    pub email: String,
    /// Unix timestamp in seconds.
    #[serde(default)]
    pub timestamp: i64,
    /// Event discriminator as sent on the wire.
    #[serde(default, rename = "event")]
    pub event_type: String,
    /// Marketing campaign ID, when sent through a campaign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_campaign_id: Option<i64>,
    /// Marketing campaign name, when sent through a campaign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_campaign_name: Option<String>,
    /// Caller-supplied metadata attached at send time.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub unique_args: Map<String, Value>,
}

impl Envelope {
    /// The timestamp as a UTC date-time, or `None` if it is out of range.
    #[must_use]
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }

    /// Look up one unique argument by key.
    #[must_use]
    pub fn unique_arg(&self, key: &str) -> Option<&Value> {
        self.unique_args.get(key)
    }
}
