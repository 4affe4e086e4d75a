//! Per-line JSON record decoding and canonical field normalization.
//!
//! [`decode_line`] turns one [`RawLine`] into exactly one [`DecodeOutcome`]:
//! a strict JSON-object parse followed by extraction of the conventional
//! fields (timestamp, level, logger, message), leaving everything else as
//! attributes in their original relative order. A decode failure of any
//! kind is data, not an error: the offending line is carried through as
//! [`DecodeOutcome::Malformed`] and never aborts the stream.

use crate::config::Config;
use crate::fields::{self, LEVEL_RAW_KEY};
use crate::level::Level;
use crate::reader::RawLine;
use crate::timestamp::Timestamp;

/// The result of decoding one input line.
#[derive(Debug)]
pub enum DecodeOutcome {
    /// The line was a JSON object; fields are normalized.
    Record(LogRecord),
    /// The line was not a JSON object. `detail` is a human-readable reason.
    Malformed { raw: RawLine, detail: String },
}

/// A normalized log entry extracted from a JSON object.
///
/// `attrs` holds every field that was not promoted, in input order.
/// Promoted fields never appear in `attrs`; the one exception is the
/// reserved `level_raw` note, inserted when the level text matched no
/// known level so the original value stays discoverable.
#[derive(Debug)]
pub struct LogRecord {
    /// 1-based input line index.
    pub index: u64,
    pub timestamp: Option<Timestamp>,
    pub level: Option<Level>,
    pub logger: Option<String>,
    pub message: Option<String>,
    /// Remaining fields, in original relative order.
    pub attrs: serde_json::Map<String, serde_json::Value>,
    /// The original line text (for `--json` mode passthrough and filtering).
    pub raw: String,
}

/// Decode a single raw line into a [`DecodeOutcome`].
///
/// Malformed cases, all recovered locally: empty or whitespace-only lines,
/// invalid UTF-8, invalid or truncated JSON, and any top-level value that
/// is not an object (arrays and scalars carry no named fields to extract).
pub fn decode_line(raw: RawLine, config: &Config) -> DecodeOutcome {
    let Ok(text) = std::str::from_utf8(&raw.bytes) else {
        return DecodeOutcome::Malformed {
            raw,
            detail: "invalid UTF-8".to_string(),
        };
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return DecodeOutcome::Malformed {
            raw,
            detail: "empty line".to_string(),
        };
    }

    let parsed: serde_json::Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(e) => {
            let detail = e.to_string();
            return DecodeOutcome::Malformed { raw, detail };
        }
    };

    let serde_json::Value::Object(mut map) = parsed else {
        return DecodeOutcome::Malformed {
            raw,
            detail: "top-level JSON value is not an object".to_string(),
        };
    };

    let timestamp = extract_timestamp(&mut map, config);
    let level = extract_level(&mut map, config);
    let logger = extract_logger(&mut map, config);
    let message = extract_message(&mut map, config);

    DecodeOutcome::Record(LogRecord {
        index: raw.index,
        timestamp,
        level,
        logger,
        message,
        attrs: map,
        raw: trimmed.to_string(),
    })
}

/// Extract the timestamp field using the configured alias list.
fn extract_timestamp(
    map: &mut serde_json::Map<String, serde_json::Value>,
    config: &Config,
) -> Option<Timestamp> {
    fields::take_field(map, &config.timestamp_fields)
        .and_then(|(_, v)| Timestamp::from_json_value(&v))
}

/// Extract and classify the level field.
///
/// Unrecognized text maps to [`Level::Unknown`] and the original value is
/// written back into the record under the reserved `level_raw` key.
fn extract_level(
    map: &mut serde_json::Map<String, serde_json::Value>,
    config: &Config,
) -> Option<Level> {
    let (_, value) = fields::take_field(map, &config.level_fields)?;
    match value {
        serde_json::Value::String(s) => {
            if let Some(aliases) = config.level_aliases.as_ref()
                && let Some(level) = aliases.get(&s.to_lowercase())
            {
                return Some(*level);
            }
            match Level::from_str_loose(&s) {
                Some(level) => Some(level),
                None => {
                    map.insert(LEVEL_RAW_KEY.to_string(), serde_json::Value::String(s));
                    Some(Level::Unknown)
                }
            }
        }
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Level::from_numeric(i))
            } else {
                #[allow(clippy::cast_possible_truncation)]
                n.as_f64().map(|f| Level::from_numeric(f as i64))
            }
        }
        serde_json::Value::Null => None,
        other => {
            map.insert(
                LEVEL_RAW_KEY.to_string(),
                serde_json::Value::String(other.to_string()),
            );
            Some(Level::Unknown)
        }
    }
}

/// Extract the logger name field.
fn extract_logger(
    map: &mut serde_json::Map<String, serde_json::Value>,
    config: &Config,
) -> Option<String> {
    fields::take_field(map, &config.logger_fields).and_then(|(_, v)| value_to_string(v))
}

/// Extract the message field.
fn extract_message(
    map: &mut serde_json::Map<String, serde_json::Value>,
    config: &Config,
) -> Option<String> {
    fields::take_field(map, &config.message_fields)
        .map(|(_, v)| value_to_string(v).unwrap_or_default())
}

/// Convert a JSON value to its string representation.
fn value_to_string(v: serde_json::Value) -> Option<String> {
    match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
