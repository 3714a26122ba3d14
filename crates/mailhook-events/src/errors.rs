//! Error types for webhook batch decoding.
//!
//! [`DecodeError`] is returned by every decode entry point. Variants name the
//! stage that rejected the payload so callers can tell a broken batch apart
//! from a single bad field.

use thiserror::Error;

/// Errors that can occur while decoding a webhook batch or element.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload is not a JSON array, or an element is not a JSON object.
    #[error("malformed batch: {0}")]
    MalformedBatch(String),

    /// An element has no `event` field, or it is not a string.
    #[error("missing event discriminator")]
    MissingDiscriminator,

    /// The `event` field names a kind that is not registered.
    #[error("unknown event type: {0}")]
    UnknownEventType(String),

    /// A field is present but its JSON shape does not fit its type.
    #[error("malformed field: {0}")]
    MalformedField(String),

    /// A required envelope field is missing or null.
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    /// The payload exceeds the configured size limit.
    #[error("payload of {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge {
        /// Payload size in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Convenience type alias for decode results.
pub type Result<T> = std::result::Result<T, DecodeError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_batch_display() {
        let err = DecodeError::MalformedBatch("expected an array".into());
        assert_eq!(err.to_string(), "malformed batch: expected an array");
    }

    #[test]
    fn missing_discriminator_display() {
        assert_eq!(
            DecodeError::MissingDiscriminator.to_string(),
            "missing event discriminator"
        );
    }

    #[test]
    fn unknown_event_type_display() {
        let err = DecodeError::UnknownEventType("not_a_real_kind".into());
        assert_eq!(err.to_string(), "unknown event type: not_a_real_kind");
    }

    #[test]
    fn malformed_field_display() {
        let err = DecodeError::MalformedField("category".into());
        assert_eq!(err.to_string(), "malformed field: category");
    }

    #[test]
    fn schema_violation_display() {
        let err = DecodeError::SchemaViolation("missing required field `email`".into());
        assert_eq!(
            err.to_string(),
            "schema violation: missing required field `email`"
        );
    }

    #[test]
    fn payload_too_large_display() {
        let err = DecodeError::PayloadTooLarge {
            size: 2048,
            limit: 1024,
        };
        assert_eq!(
            err.to_string(),
            "payload of 2048 bytes exceeds limit of 1024 bytes"
        );
    }

    #[test]
    fn result_alias() {
        fn example() -> Result<u8> {
            Err(DecodeError::MissingDiscriminator)
        }
        assert_eq!(example().unwrap_err(), DecodeError::MissingDiscriminator);
    }
}
