/// Declarative macro generating `EventType`, `ALL_EVENT_TYPES`, the `Event`
/// sum type, and the static registration table from a single source of truth.
///
/// # Sections
///
/// - **`events`**: `Variant => "wire" => RecordType` rows. Every record type
///   must carry `envelope`, `category`, `sg_event_id` and `sg_message_id`
///   fields and tolerate a missing value for every field.
/// - **`groups`**: Named boolean methods grouping event types.
macro_rules! define_events {
    (
        events {
            $(
                $(#[doc = $doc:literal])*
                $variant:ident => $wire:literal => $record:ty
            ),* $(,)?
        }
        groups {
            $(
                $(#[doc = $gdoc:literal])*
                $method:ident => [$($gv:ident),* $(,)?]
            ),* $(,)?
        }
    ) => {
        // ── EventType enum ──────────────────────────────────────────

        /// Discriminator for every recognized webhook event kind.
        ///
        /// Each variant serializes to the exact `event` string used on the wire.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum EventType {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $wire)]
                $variant,
            )*
        }

        /// All event type variants in definition order.
        pub const ALL_EVENT_TYPES: [EventType; { [$($wire,)*].len() }] = [
            $(EventType::$variant,)*
        ];

        impl EventType {
            /// Wire discriminator (e.g. `"group_unsubscribe"`).
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)*
                }
            }

            $(
                $(#[doc = $gdoc])*
                #[must_use]
                pub fn $method(self) -> bool {
                    matches!(self, $(Self::$gv)|*)
                }
            )*
        }

        impl std::fmt::Display for EventType {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for EventType {
            type Err = DecodeError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)*
                    _ => Err(DecodeError::UnknownEventType(s.to_string())),
                }
            }
        }

        // ── Event sum type ──────────────────────────────────────────

        /// A decoded webhook event.
        ///
        /// Serializes back to the flat wire shape (envelope fields at the top
        /// level, including `event`).
        #[derive(Clone, Debug, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Event {
            $(
                $(#[doc = $doc])*
                $variant($record),
            )*
        }

        impl Event {
            /// Kind of this event.
            #[must_use]
            pub fn event_type(&self) -> EventType {
                match self {
                    $(Self::$variant(_) => EventType::$variant,)*
                }
            }

            /// Fields shared by every event kind.
            #[must_use]
            pub fn envelope(&self) -> &Envelope {
                match self {
                    $(Self::$variant(record) => &record.envelope,)*
                }
            }

            /// Category labels (empty when the payload carried none).
            #[must_use]
            pub fn category(&self) -> &[String] {
                match self {
                    $(Self::$variant(record) => record.category.as_slice(),)*
                }
            }

            /// Vendor-assigned unique event ID.
            #[must_use]
            pub fn sg_event_id(&self) -> Option<&str> {
                match self {
                    $(Self::$variant(record) => record.sg_event_id.as_deref(),)*
                }
            }

            /// Vendor-assigned ID of the message this event belongs to.
            #[must_use]
            pub fn sg_message_id(&self) -> Option<&str> {
                match self {
                    $(Self::$variant(record) => record.sg_message_id.as_deref(),)*
                }
            }
        }

        $(
            impl From<$record> for Event {
                fn from(record: $record) -> Self {
                    Self::$variant(record)
                }
            }
        )*

        // ── Registration table ──────────────────────────────────────

        static REGISTRATIONS: [Registration; { [$($wire,)*].len() }] = [
            $(
                Registration {
                    event_type: EventType::$variant,
                    decode: decode_record::<$record>,
                    check: check_record::<$record>,
                },
            )*
        ];
    };
}
