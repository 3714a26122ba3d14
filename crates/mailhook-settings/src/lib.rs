//! # mailhook-settings
//!
//! Configuration management with layered sources for the mailhook decoder.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`MailhookSettings::default()`]
//! 2. **User file**: `~/.mailhook/settings.json` (deep-merged over defaults)
//! 3. **Environment variables**: `MAILHOOK_*` overrides (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use mailhook_settings::get_settings;
//!
//! let settings = get_settings();
//! println!("payload limit: {}", settings.decode.max_payload_bytes);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    apply_overrides_from, deep_merge, load_settings, load_settings_from_path,
    ENV_LOG_LEVEL, ENV_MAX_PAYLOAD_BYTES, ENV_UNKNOWN_EVENTS, load_settings_from_path_with,
    settings_path,
};
pub use types::*;

use std::sync::OnceLock;

/// Global settings singleton.
static SETTINGS: OnceLock<MailhookSettings> = OnceLock::new();

/// Get the global settings instance.
///
/// On first call, loads settings from `~/.mailhook/settings.json` with env
/// var overrides. On subsequent calls, returns the cached value. If loading
/// fails, returns compiled defaults.
pub fn get_settings() -> &'static MailhookSettings {
    SETTINGS.get_or_init(|| {
        load_settings().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load settings, using defaults");
            MailhookSettings::default()
        })
    })
}

/// Initialize the global settings with a specific value.
///
/// Returns `Err(settings)` if the global was already initialized.
#[allow(clippy::result_large_err)]
pub fn init_settings(settings: MailhookSettings) -> std::result::Result<(), MailhookSettings> {
    SETTINGS.set(settings)
}
