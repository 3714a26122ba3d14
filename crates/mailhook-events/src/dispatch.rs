//! Two-pass batch decoding.
//!
//! A batch is split into unparsed elements. Each element is first scanned as
//! a map of unparsed values to read its `event` discriminator and check the
//! required envelope fields. The matching [`Registration`] then decodes the
//! element's original text into its record.
//!
//! When that second pass fails, the element's fields are replayed one at a
//! time against the record type to name the offending field.

use std::collections::BTreeMap;
use std::fmt;

use mailhook_settings::{DecodeSettings, UnknownEventPolicy};
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::value::RawValue;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::{DecodeError, Result};
use crate::registry::{self, Event, Registration};

/// Envelope fields that must be present and non-null on every element.
const REQUIRED_FIELDS: [&str; 2] = ["email", "timestamp"];

/// Top-level fields of one element, values left unparsed.
///
/// Keeps the first value of a repeated key and remembers the first key seen
/// twice.
struct Fields<'a> {
    entries: BTreeMap<String, &'a RawValue>,
    duplicate: Option<String>,
}

struct FieldsVisitor;

impl<'de> Visitor<'de> for FieldsVisitor {
    type Value = Fields<'de>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = BTreeMap::new();
        let mut duplicate = None;
        while let Some((key, value)) = map.next_entry::<String, &'de RawValue>()? {
            if entries.contains_key(&key) {
                if duplicate.is_none() {
                    duplicate = Some(key);
                }
            } else {
                let _ = entries.insert(key, value);
            }
        }
        Ok(Fields { entries, duplicate })
    }
}

impl<'de> Deserialize<'de> for Fields<'de> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(FieldsVisitor)
    }
}

/// Decoder behavior knobs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Handling of unrecognized discriminators.
    pub unknown_events: UnknownEventPolicy,
    /// Reject payloads larger than this many bytes.
    pub max_payload_bytes: Option<usize>,
}

impl From<&DecodeSettings> for DecodeOptions {
    fn from(settings: &DecodeSettings) -> Self {
        Self {
            unknown_events: settings.unknown_events,
            max_payload_bytes: (settings.max_payload_bytes > 0).then_some(settings.max_payload_bytes),
        }
    }
}

/// An element dropped under [`UnknownEventPolicy::Skip`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedEvent {
    /// Position of the element in the input array.
    pub index: usize,
    /// The unrecognized discriminator.
    pub event_type: String,
}

/// Result of decoding one batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecodedBatch {
    /// Decoded events in input order.
    pub events: Vec<Event>,
    /// Elements skipped because their kind is unknown (lenient mode only).
    pub skipped: Vec<SkippedEvent>,
}

/// Webhook batch decoder.
///
/// Holds no state beyond its options; one instance can be shared freely
/// across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Create a decoder with explicit options.
    #[must_use]
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Create a decoder configured from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &DecodeSettings) -> Self {
        Self::new(settings.into())
    }

    /// The options this decoder applies.
    #[must_use]
    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Decode a whole webhook body.
    ///
    /// All-or-nothing: any error aborts the batch and no events are returned.
    pub fn decode(&self, payload: &[u8]) -> Result<DecodedBatch> {
        if let Some(limit) = self.options.max_payload_bytes {
            if payload.len() > limit {
                return Err(DecodeError::PayloadTooLarge {
                    size: payload.len(),
                    limit,
                });
            }
        }

        let text = std::str::from_utf8(payload)
            .map_err(|e| DecodeError::MalformedBatch(format!("payload is not UTF-8: {e}")))?;
        let elements: Vec<&RawValue> = serde_json::from_str(text)
            .map_err(|e| DecodeError::MalformedBatch(format!("expected a JSON array: {e}")))?;

        let mut batch = DecodedBatch {
            events: Vec::with_capacity(elements.len()),
            skipped: Vec::new(),
        };

        for (index, raw) in elements.into_iter().enumerate() {
            let (fields, name) = scan_element(raw.get())?;
            let Some(registration) = registry::lookup(&name) else {
                match self.options.unknown_events {
                    UnknownEventPolicy::Reject => return Err(DecodeError::UnknownEventType(name)),
                    UnknownEventPolicy::Skip => {
                        warn!(index, event_type = %name, "skipping unknown webhook event");
                        batch.skipped.push(SkippedEvent {
                            index,
                            event_type: name,
                        });
                        continue;
                    }
                }
            };
            batch.events.push(finish_element(registration, raw.get(), &fields)?);
        }

        debug!(
            events = batch.events.len(),
            skipped = batch.skipped.len(),
            "decoded webhook batch"
        );
        Ok(batch)
    }

    /// Decode a single element (one JSON object).
    ///
    /// Unknown kinds are always an error here; the skip policy only applies
    /// to batches.
    pub fn decode_event(&self, raw: &str) -> Result<Event> {
        if let Some(limit) = self.options.max_payload_bytes {
            if raw.len() > limit {
                return Err(DecodeError::PayloadTooLarge {
                    size: raw.len(),
                    limit,
                });
            }
        }
        decode_element(raw)
    }
}

/// Decode a webhook body with default options (fail-fast, no size limit).
pub fn decode_batch(payload: &[u8]) -> Result<Vec<Event>> {
    Decoder::default().decode(payload).map(|batch| batch.events)
}

/// Decode one element with default options.
pub fn decode_event(raw: &str) -> Result<Event> {
    Decoder::default().decode_event(raw)
}

fn decode_element(raw: &str) -> Result<Event> {
    let (fields, name) = scan_element(raw)?;
    let registration =
        registry::lookup(&name).ok_or(DecodeError::UnknownEventType(name))?;
    finish_element(registration, raw, &fields)
}

/// First pass: split the object into unparsed fields and read the discriminator.
///
/// A key repeated within the element is reported as a malformed field.
fn scan_element(raw: &str) -> Result<(Fields<'_>, String)> {
    let mut fields: Fields<'_> = serde_json::from_str(raw)
        .map_err(|_| DecodeError::MalformedBatch("element is not a JSON object".into()))?;
    if let Some(key) = fields.duplicate.take() {
        return Err(DecodeError::MalformedField(key));
    }
    let name = fields
        .entries
        .get("event")
        .and_then(|value| serde_json::from_str::<String>(value.get()).ok())
        .ok_or(DecodeError::MissingDiscriminator)?;
    Ok((fields, name))
}

/// Second pass: required-field check, then the full decode.
fn finish_element(registration: &Registration, raw: &str, fields: &Fields<'_>) -> Result<Event> {
    for required in REQUIRED_FIELDS {
        match fields.entries.get(required) {
            Some(value) if value.get() != "null" => {}
            _ => {
                return Err(DecodeError::SchemaViolation(format!(
                    "missing required field `{required}`"
                )));
            }
        }
    }

    registration
        .decode(raw)
        .map_err(|err| locate_malformed_field(registration, fields, &err))
}

/// Replay each field alone against the record to find the one that fails.
///
/// Fields are tried in key order, so with several bad fields the
/// alphabetically first one is reported.
fn locate_malformed_field(
    registration: &Registration,
    fields: &Fields<'_>,
    err: &serde_json::Error,
) -> DecodeError {
    for (key, raw) in &fields.entries {
        let Ok(value) = serde_json::from_str::<Value>(raw.get()) else {
            return DecodeError::MalformedField(key.clone());
        };
        let mut single = Map::new();
        let _ = single.insert(key.clone(), value);
        if !registration.accepts(&Value::Object(single)) {
            return DecodeError::MalformedField(key.clone());
        }
    }
    DecodeError::SchemaViolation(err.to_string())
}

/// Deserializes one element through the registry.
///
/// Requires a `serde_json` deserializer, since the element is captured as
/// raw JSON text before dispatch.
impl<'de> Deserialize<'de> for Event {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        decode_element(raw.get()).map_err(de::Error::custom)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
