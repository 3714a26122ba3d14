//! Typed records, one per event kind.
//!
//! Every record embeds the shared [`Envelope`](crate::Envelope) as a flattened
//! field and adds its own fields. All kind-specific fields tolerate absence:
//! scalars are `Option`, and `category` defaults to an empty sequence.
//!
//! - [`delivery`]: message pipeline events (processed through bounce).
//! - [`engagement`]: recipient actions (open, click, spam and unsubscribe).

pub mod delivery;
pub mod engagement;

pub use delivery::{Bounce, Deferred, Delivered, Dropped, IpPool, Processed};
pub use engagement::{Click, GroupResubscribe, GroupUnsubscribe, Open, SpamReport, Unsubscribe};
