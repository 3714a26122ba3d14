//! Engagement events: open, click, spam report, unsubscribe, group changes.

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::flex::Category;

/// Recipient opened the message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Open {
    /// Shared fields.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// User agent of the client that opened the message.
    #[serde(rename = "useragent", skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Client IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
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
    /// Whether the open was generated by a mail privacy proxy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_machine_open: Option<bool>,
}

/// Recipient clicked a tracked link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Click {
    /// Shared fields.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// User agent of the clicking client.
    #[serde(rename = "useragent", skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Client IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Unique event ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_event_id: Option<String>,
    /// Message ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_message_id: Option<String>,
    /// The link that was clicked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Category labels.
    #[serde(default)]
    pub category: Category,
    /// Unsubscribe group ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asm_group_id: Option<i64>,
}

/// Recipient marked the message as spam.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpamReport {
    /// Shared fields.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Unique event ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_event_id: Option<String>,
    /// Message ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_message_id: Option<String>,
    /// Category labels.
    #[serde(default)]
    pub category: Category,
}

/// Recipient unsubscribed from all messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unsubscribe {
    /// Shared fields.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Unique event ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_event_id: Option<String>,
    /// Message ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_message_id: Option<String>,
    /// Category labels.
    #[serde(default)]
    pub category: Category,
}

/// Recipient unsubscribed from one unsubscribe group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupUnsubscribe {
    /// Shared fields.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// User agent of the client.
    #[serde(rename = "useragent", skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Client IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Unique event ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_event_id: Option<String>,
    /// Message ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_message_id: Option<String>,
    /// Link the recipient followed to unsubscribe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Category labels.
    #[serde(default)]
    pub category: Category,
    /// Unsubscribe group the recipient left.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asm_group_id: Option<i64>,
}

/// Recipient rejoined an unsubscribe group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupResubscribe {
    /// Shared fields.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// User agent of the client.
    #[serde(rename = "useragent", skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Client IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Unique event ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_event_id: Option<String>,
    /// Message ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg_message_id: Option<String>,
    /// Link the recipient followed to resubscribe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Category labels.
    #[serde(default)]
    pub category: Category,
    /// Unsubscribe group the recipient rejoined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asm_group_id: Option<i64>,
}
