//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`MailhookSettings::default()`]
//! 2. If `~/.mailhook/settings.json` exists, deep-merge user values over defaults
//! 3. Apply environment variable overrides (highest priority)
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::{Result, SettingsError};
use crate::types::{MailhookSettings, UnknownEventPolicy};

/// Environment variable selecting the unknown-event policy (`reject` or `skip`).
pub const ENV_UNKNOWN_EVENTS: &str = "MAILHOOK_UNKNOWN_EVENTS";
/// Environment variable overriding the payload size limit in bytes.
pub const ENV_MAX_PAYLOAD_BYTES: &str = "MAILHOOK_MAX_PAYLOAD_BYTES";
/// Environment variable overriding the log level directive.
pub const ENV_LOG_LEVEL: &str = "MAILHOOK_LOG_LEVEL";

const MIN_PAYLOAD_BYTES: usize = 1024;
const MAX_PAYLOAD_BYTES: usize = 1024 * 1024 * 1024;

/// Resolve the path to the settings file (`~/.mailhook/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".mailhook").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<MailhookSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with process env var overrides.
///
/// If the file does not exist, returns defaults. If the file contains
/// invalid JSON, returns an error.
pub fn load_settings_from_path(path: &Path) -> Result<MailhookSettings> {
    load_settings_from_path_with(path, |name| std::env::var(name).ok())
}

/// Load settings from `path`, reading overrides through `lookup`.
///
/// Runs all three layers: defaults, then the file, then overrides.
pub fn load_settings_from_path_with<F>(path: &Path, lookup: F) -> Result<MailhookSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = load_file_layer(path)?;
    apply_overrides_from(&mut settings, lookup);
    Ok(settings)
}

/// Defaults merged with the file at `path`, without env overrides.
fn load_file_layer(path: &Path) -> Result<MailhookSettings> {
    if !path.exists() {
        debug!(?path, "settings file not found, using defaults");
        return Ok(MailhookSettings::default());
    }

    debug!(?path, "loading settings from file");
    let parse_error = |source: serde_json::Error| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let user: Value = serde_json::from_str(&content).map_err(parse_error)?;
    if !user.is_object() {
        return Err(SettingsError::NotAnObject {
            path: path.to_path_buf(),
        });
    }

    let defaults = serde_json::to_value(MailhookSettings::default())?;
    serde_json::from_value(deep_merge(defaults, user)).map_err(parse_error)
}

/// Recursive deep merge of two JSON values.
///
/// - Objects are merged recursively (source overrides target per-key)
/// - Arrays and primitives are replaced entirely by source
/// - Null values in source are skipped (preserving target)
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply overrides read through `lookup` (the process environment in production).
///
/// Invalid values are ignored with a warning and the file/default value is kept.
pub fn apply_overrides_from<F>(settings: &mut MailhookSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|v| !v.is_empty());

    if let Some(val) = read(ENV_UNKNOWN_EVENTS) {
        match UnknownEventPolicy::parse(&val) {
            Some(policy) => settings.decode.unknown_events = policy,
            None => {
                tracing::warn!(key = ENV_UNKNOWN_EVENTS, value = %val, "invalid policy env var, ignoring");
            }
        }
    }
    if let Some(val) = read(ENV_MAX_PAYLOAD_BYTES) {
        match parse_usize_range(&val, MIN_PAYLOAD_BYTES, MAX_PAYLOAD_BYTES) {
            Some(limit) => settings.decode.max_payload_bytes = limit,
            None => {
                tracing::warn!(key = ENV_MAX_PAYLOAD_BYTES, value = %val, "invalid usize env var, ignoring");
            }
        }
    }
    if let Some(val) = read(ENV_LOG_LEVEL) {
        settings.logging.level = val;
    }
}

/// Parse a string as a `usize` within a range.
pub fn parse_usize_range(val: &str, min: usize, max: usize) -> Option<usize> {
    let n: usize = val.parse().ok()?;
    (n >= min && n <= max).then_some(n)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    // ── deep_merge ──────────────────────────────────────────────────

    #[test]
    fn merge_nested_override() {
        let target = serde_json::json!({
            "decode": {"unknownEvents": "reject", "maxPayloadBytes": 10}
        });
        let source = serde_json::json!({
            "decode": {"unknownEvents": "skip"}
        });
        let merged = deep_merge(target, source);
        assert_eq!(merged["decode"]["unknownEvents"], "skip");
        assert_eq!(merged["decode"]["maxPayloadBytes"], 10);
    }

    #[test]
    fn merge_array_replace() {
        let target = serde_json::json!({"items": [1, 2, 3]});
        let source = serde_json::json!({"items": [4, 5]});
        let merged = deep_merge(target, source);
        assert_eq!(merged["items"], serde_json::json!([4, 5]));
    }

    #[test]
    fn merge_null_preserves_target() {
        let target = serde_json::json!({"a": 1, "b": 2});
        let source = serde_json::json!({"a": null});
        let merged = deep_merge(target, source);
        assert_eq!(merged["a"], 1);
        assert_eq!(merged["b"], 2);
    }

    #[test]
    fn merge_primitive_replaces_object() {
        let target = serde_json::json!({"a": {"nested": true}});
        let source = serde_json::json!({"a": 42});
        let merged = deep_merge(target, source);
        assert_eq!(merged["a"], 42);
    }

    // ── load_file_layer ─────────────────────────────────────────────

    #[test]
    fn load_missing_file_returns_defaults() {
        let path = Path::new("/nonexistent/mailhook/settings.json");
        let settings = load_file_layer(path).unwrap();
        assert_eq!(settings, MailhookSettings::default());
    }

    #[test]
    fn load_partial_json_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"decode": {"unknownEvents": "skip"}}"#).unwrap();

        let settings = load_file_layer(&path).unwrap();
        assert_eq!(settings.decode.unknown_events, UnknownEventPolicy::Skip);
        assert_eq!(settings.decode.max_payload_bytes, 8 * 1024 * 1024);
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn load_invalid_json_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not valid json").unwrap();

        let err = load_file_layer(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
    }

    #[test]
    fn load_non_object_returns_invalid_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let err = load_file_layer(&path).unwrap_err();
        assert!(matches!(err, SettingsError::NotAnObject { .. }));
        assert!(err.to_string().contains(&*path.to_string_lossy()));
    }

    #[test]
    fn load_unreadable_path_returns_read_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_file_layer(dir.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
        assert_eq!(err.path(), Some(dir.path()));
    }

    #[test]
    fn load_wrong_policy_value_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"decode": {"unknownEvents": "ignore"}}"#).unwrap();

        assert!(matches!(
            load_file_layer(&path).unwrap_err(),
            SettingsError::Parse { .. }
        ));
    }

    // ── layered load ────────────────────────────────────────────────

    #[test]
    fn process_env_loader_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"logging": {"level": "trace"}}"#).unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        if std::env::var_os(ENV_LOG_LEVEL).is_none() {
            assert_eq!(settings.logging.level, "trace");
        }
        assert_eq!(settings.version, "0.1.0");
    }

    #[test]
    fn env_overrides_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"decode": {"unknownEvents": "skip", "maxPayloadBytes": 2048}, "logging": {"level": "info"}}"#,
        )
        .unwrap();

        let settings =
            load_settings_from_path_with(&path, env(&[(ENV_MAX_PAYLOAD_BYTES, "4096")])).unwrap();
        assert_eq!(settings.decode.max_payload_bytes, 4096);
        assert_eq!(settings.decode.unknown_events, UnknownEventPolicy::Skip);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn invalid_env_keeps_file_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"decode": {"unknownEvents": "skip"}}"#).unwrap();

        let settings =
            load_settings_from_path_with(&path, env(&[(ENV_UNKNOWN_EVENTS, "sometimes")])).unwrap();
        assert_eq!(settings.decode.unknown_events, UnknownEventPolicy::Skip);
    }

    #[test]
    fn env_applies_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let settings =
            load_settings_from_path_with(&path, env(&[(ENV_LOG_LEVEL, "debug")])).unwrap();
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.decode, MailhookSettings::default().decode);
    }

    #[test]
    fn file_error_skips_env_layer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "\"skip\"").unwrap();

        let err =
            load_settings_from_path_with(&path, env(&[(ENV_UNKNOWN_EVENTS, "skip")])).unwrap_err();
        assert!(matches!(err, SettingsError::NotAnObject { .. }));
    }

    // ── overrides ───────────────────────────────────────────────────

    #[test]
    fn overrides_apply_valid_values() {
        let mut settings = MailhookSettings::default();
        apply_overrides_from(
            &mut settings,
            env(&[
                (ENV_UNKNOWN_EVENTS, "skip"),
                (ENV_MAX_PAYLOAD_BYTES, "65536"),
                (ENV_LOG_LEVEL, "mailhook_events=debug"),
            ]),
        );
        assert_eq!(settings.decode.unknown_events, UnknownEventPolicy::Skip);
        assert_eq!(settings.decode.max_payload_bytes, 65_536);
        assert_eq!(settings.logging.level, "mailhook_events=debug");
    }

    #[test]
    fn overrides_ignore_invalid_values() {
        let mut settings = MailhookSettings::default();
        apply_overrides_from(
            &mut settings,
            env(&[
                (ENV_UNKNOWN_EVENTS, "maybe"),
                (ENV_MAX_PAYLOAD_BYTES, "12"),
                (ENV_LOG_LEVEL, ""),
            ]),
        );
        assert_eq!(settings, MailhookSettings::default());
    }

    #[test]
    fn overrides_absent_leave_settings_untouched() {
        let mut settings = MailhookSettings::default();
        settings.decode.max_payload_bytes = 4096;
        apply_overrides_from(&mut settings, env(&[]));
        assert_eq!(settings.decode.max_payload_bytes, 4096);
    }

    // ── parse_usize_range ───────────────────────────────────────────

    #[test]
    fn parse_usize_valid() {
        assert_eq!(parse_usize_range("2048", 1024, 4096), Some(2048));
        assert_eq!(parse_usize_range("1024", 1024, 4096), Some(1024));
    }

    #[test]
    fn parse_usize_out_of_range() {
        assert_eq!(parse_usize_range("10", 1024, 4096), None);
        assert_eq!(parse_usize_range("5000", 1024, 4096), None);
    }

    #[test]
    fn parse_usize_invalid() {
        assert_eq!(parse_usize_range("abc", 1024, 4096), None);
        assert_eq!(parse_usize_range("-1", 1024, 4096), None);
    }
}
