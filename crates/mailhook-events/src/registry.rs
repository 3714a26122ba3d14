//! Event kind registry.
//!
//! All definitions are produced by [`define_events!`] from the table below:
//! the [`EventType`] discriminator enum, the [`Event`] sum type, and one
//! [`Registration`] per kind pairing the discriminator with its decoder.
//! Adding a kind means adding one row here and its record type.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::envelope::Envelope;
use crate::errors::DecodeError;
use crate::records;

define_events! {
    events {
        /// Message accepted and queued for delivery.
        Processed => "processed" => records::Processed,
        /// Message dropped before delivery.
        Dropped => "dropped" => records::Dropped,
        /// Message accepted by the receiving server.
        Delivered => "delivered" => records::Delivered,
        /// Delivery temporarily rejected and scheduled for retry.
        Deferred => "deferred" => records::Deferred,
        /// Delivery permanently rejected.
        Bounce => "bounce" => records::Bounce,
        /// Message opened.
        Open => "open" => records::Open,
        /// Tracked link clicked.
        Click => "click" => records::Click,
        /// Message reported as spam.
        SpamReport => "spamreport" => records::SpamReport,
        /// Recipient unsubscribed from everything.
        Unsubscribe => "unsubscribe" => records::Unsubscribe,
        /// Recipient left an unsubscribe group.
        GroupUnsubscribe => "group_unsubscribe" => records::GroupUnsubscribe,
        /// Recipient rejoined an unsubscribe group.
        GroupResubscribe => "group_resubscribe" => records::GroupResubscribe,
    }
    groups {
        /// Whether this event tracks the message through delivery.
        is_delivery_type => [Processed, Dropped, Delivered, Deferred, Bounce],
        /// Whether this event records a recipient action.
        is_engagement_type => [Open, Click, SpamReport, Unsubscribe, GroupUnsubscribe, GroupResubscribe],
        /// Whether this event adds the recipient to a suppression list.
        is_suppression_type => [Bounce, SpamReport, Unsubscribe, GroupUnsubscribe],
    }
}

impl Event {
    /// Wire discriminator of this event.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.event_type().as_str()
    }

    /// Recipient address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.envelope().email
    }

    /// Unix timestamp in seconds.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.envelope().timestamp
    }
}

type DecodeFn = fn(&str) -> serde_json::Result<Event>;
type CheckFn = fn(&Value) -> serde_json::Result<()>;

/// One entry of the registry: an event kind and the decoder for its record.
#[derive(Clone, Copy)]
pub struct Registration {
    event_type: EventType,
    decode: DecodeFn,
    check: CheckFn,
}

impl Registration {
    /// Kind handled by this entry.
    #[must_use]
    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// Decode a complete raw JSON object into this kind's record.
    pub fn decode(&self, raw: &str) -> serde_json::Result<Event> {
        (self.decode)(raw)
    }

    /// Whether this kind's record accepts `fields` (a partial JSON object).
    #[must_use]
    pub fn accepts(&self, fields: &Value) -> bool {
        (self.check)(fields).is_ok()
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("event_type", &self.event_type)
            .finish_non_exhaustive()
    }
}

fn decode_record<R>(raw: &str) -> serde_json::Result<Event>
where
    R: DeserializeOwned + Into<Event>,
{
    serde_json::from_str::<R>(raw).map(Into::into)
}

fn check_record<R: DeserializeOwned>(fields: &Value) -> serde_json::Result<()> {
    R::deserialize(fields).map(|_| ())
}

static INDEX: OnceLock<HashMap<&'static str, &'static Registration>> = OnceLock::new();

/// Find the registration for a wire discriminator (exact, case-sensitive).
pub fn lookup(name: &str) -> Option<&'static Registration> {
    INDEX
        .get_or_init(|| {
            REGISTRATIONS
                .iter()
                .map(|registration| (registration.event_type.as_str(), registration))
                .collect()
        })
        .get(name)
        .copied()
}

/// All registrations in definition order.
pub fn registrations() -> &'static [Registration] {
    &REGISTRATIONS
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
