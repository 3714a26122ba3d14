//! # mailhook-logging
//!
//! Structured logging with `tracing` for the mailhook decoder.
//!
//! Library crates only emit `tracing` events; binaries and services that
//! embed the decoder call [`init_subscriber`] (or [`init_from_settings`]) once
//! at startup. Tests use [`capture_logs`] to assert on emitted events.

#![deny(unsafe_code)]

pub mod capture;

pub use capture::{CapturedEvent, CapturedLogs, capture_logs};

use mailhook_settings::LoggingSettings;

/// Initialize the global tracing subscriber with stderr output.
///
/// Call once at application startup. Subsequent calls are no-ops.
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // try_init fails if a global subscriber is already set
    let _ = subscriber.try_init();
}

/// Initialize the global subscriber emitting one JSON object per line.
pub fn init_json_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .try_init();
}

/// Initialize the global subscriber from loaded [`LoggingSettings`].
pub fn init_from_settings(settings: &LoggingSettings) {
    init_subscriber(&settings.level);
}
