//! Delivery events: processed, dropped, delivered, deferred, bounce.

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::flex::{Category, FlexInt};

/// IP pool the message was sent from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpPool {
    /// Pool name.
    pub name: String,
    /// Pool ID.
    pub id: i64,
}

/// Message accepted and ready to be delivered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Processed {
    /// Shared fields.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// SMTP message ID.
    #[serde(rename = "smtp-id", skip_serializing_if = "Option::is_none")]
    pub smtp_id: Option<String>,
    /// Unique event ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_event_id: Option<String>,
    /// Message ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_message_id: Option<String>,
    /// Category labels.
    #[serde(default)]
    pub category: Category,
    /// Unsubscribe group ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asm_group_id: Option<i64>,
    /// Sending IP pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<IpPool>,
}

/// Message dropped before delivery (suppressed address, invalid content...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dropped {
    /// Shared fields.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// SMTP message ID.
    #[serde(rename = "smtp-id", skip_serializing_if = "Option::is_none")]
    pub smtp_id: Option<String>,
    /// Unique event ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_event_id: Option<String>,
    /// Message ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_message_id: Option<String>,
    /// Why the message was dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Enhanced SMTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Category labels.
    #[serde(default)]
    pub category: Category,
    /// Unsubscribe group ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asm_group_id: Option<i64>,
}

/// Message accepted by the receiving server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Delivered {
    /// Shared fields.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// SMTP message ID.
    #[serde(rename = "smtp-id", skip_serializing_if = "Option::is_none")]
    pub smtp_id: Option<String>,
    /// Sending IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Unique event ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_event_id: Option<String>,
    /// Message ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_message_id: Option<String>,
    /// Full text of the receiving server's response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Whether the connection used TLS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
    /// Category labels.
    #[serde(default)]
    pub category: Category,
    /// Unsubscribe group ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asm_group_id: Option<i64>,
}

/// Receiving server temporarily rejected the message; delivery will be retried.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deferred {
    /// Shared fields.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// SMTP message ID.
    #[serde(rename = "smtp-id", skip_serializing_if = "Option::is_none")]
    pub smtp_id: Option<String>,
    /// Sending IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Unique event ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_event_id: Option<String>,
    /// Message ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_message_id: Option<String>,
    /// Why delivery was deferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Full text of the receiving server's response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Whether the connection used TLS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
    /// Category labels.
    #[serde(default)]
    pub category: Category,
    /// Unsubscribe group ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asm_group_id: Option<i64>,
    /// Delivery attempt number (sent as a number or a numeric string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<FlexInt>,
}

impl Deferred {
    /// Delivery attempt number, if reported.
    #[must_use]
    pub fn attempt_count(&self) -> Option<i64> {
        self.attempt.map(FlexInt::value)
    }
}

/// Receiving server permanently rejected the message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounce {
    /// Shared fields.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// SMTP message ID.
    #[serde(rename = "smtp-id", skip_serializing_if = "Option::is_none")]
    pub smtp_id: Option<String>,
    /// Unique event ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_event_id: Option<String>,
    /// Message ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_message_id: Option<String>,
    /// Sending IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Bounce reason reported by the receiving server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Enhanced SMTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Whether the connection used TLS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
    /// Bounce subtype (`bounce` or `blocked`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub bounce_type: Option<String>,
    /// Vendor classification of the bounce reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounce_classification: Option<String>,
    /// Category labels.
    #[serde(default)]
    pub category: Category,
    /// Unsubscribe group ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asm_group_id: Option<i64>,
}

impl Bounce {
    /// Whether the receiving server blocked the message rather than bouncing it.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.bounce_type.as_deref() == Some("blocked")
    }
}
