//! Canonical field alias tables for recognizing common log fields.
//!
//! Aliases are ordered by priority: the first alias present in a record
//! wins. Matching is ASCII case-insensitive, so `Level`, `LEVEL`, and
//! `level` all hit the same entry. The tables below are the defaults;
//! `Config` owns the lists actually used so they stay configurable.

/// Default aliases for timestamp fields.
pub const TIMESTAMP_FIELDS: &[&str] = &[
    "time",
    "ts",
    "timestamp",
    "@timestamp",
    "datetime",
    "date",
    "logged_at",
];

/// Default aliases for level/severity fields.
pub const LEVEL_FIELDS: &[&str] = &["level", "severity", "loglevel", "log_level", "lvl"];

/// Default aliases for message fields.
pub const MESSAGE_FIELDS: &[&str] = &["msg", "message", "text", "event"];

/// Default aliases for logger name fields.
pub const LOGGER_FIELDS: &[&str] = &["logger", "logger_name", "name", "component"];

/// Reserved attribute key that keeps the original level text when it does
/// not map to a known level.
pub const LEVEL_RAW_KEY: &str = "level_raw";

/// Remove and return the first field matching any alias, in alias priority
/// order, comparing keys case-insensitively.
///
/// Uses `shift_remove` so the relative order of the remaining fields is
/// untouched (`remove` on a `preserve_order` map swaps from the tail).
pub fn take_field(
    map: &mut serde_json::Map<String, serde_json::Value>,
    aliases: &[String],
) -> Option<(String, serde_json::Value)> {
    for alias in aliases {
        let found = map
            .keys()
            .find(|key| key.eq_ignore_ascii_case(alias))
            .cloned();
        if let Some(key) = found
            && let Some(value) = map.shift_remove(&key)
        {
            return Some((key, value));
        }
    }
    None
}

/// Owned copy of a default alias table, for seeding `Config`.
pub fn default_list(defaults: &[&str]) -> Vec<String> {
    defaults.iter().map(|s| (*s).to_string()).collect()
}
