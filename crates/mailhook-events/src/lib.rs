//! # mailhook-events
//!
//! Decoder for batched email event webhooks.
//!
//! A webhook body is a JSON array of heterogeneous event objects, each naming
//! its kind in an `event` field. This crate turns such a body into an ordered
//! list of strongly-typed records:
//!
//! - **Registry**: 11 event kinds generated from a single table, each paired
//!   with its decoder
//! - **Dispatcher**: two-pass decoding (discriminator scan, then full decode)
//!   with precise error reporting
//! - **Flexible fields**: `category` as string or list, `attempt` as number or
//!   numeric string
//!
//! ```no_run
//! let body = br#"[{"email":"a@b.c","timestamp":1,"event":"open"}]"#;
//! let events = mailhook_events::decode_batch(body)?;
//! assert_eq!(events[0].as_str(), "open");
//! # Ok::<(), mailhook_events::DecodeError>(())
//! ```

#![deny(unsafe_code)]

#[macro_use]
mod macros;

pub mod dispatch;
pub mod envelope;
pub mod errors;
pub mod flex;
pub mod records;
pub mod registry;

pub use dispatch::{DecodeOptions, DecodedBatch, Decoder, SkippedEvent, decode_batch, decode_event};
pub use envelope::Envelope;
pub use errors::{DecodeError, Result};
pub use flex::{Category, FlexInt};
pub use mailhook_settings::UnknownEventPolicy;
pub use records::{
    Bounce, Click, Deferred, Delivered, Dropped, GroupResubscribe, GroupUnsubscribe, IpPool, Open,
    Processed, SpamReport, Unsubscribe,
};
pub use registry::{ALL_EVENT_TYPES, Event, EventType, Registration, lookup, registrations};
