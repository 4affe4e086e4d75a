//! Timestamp parsing and formatting for structured log entries.
//!
//! Accepted formats, tried in order: ISO 8601 / RFC 3339 strings,
//! `YYYY-MM-DD HH:MM:SS[.fff]` (assumed UTC), and numeric Unix epochs
//! (seconds, milliseconds, nanoseconds) disambiguated by magnitude.
//! A value that matches none of these is kept verbatim as
//! [`Timestamp::Unparsed`] so the formatter can print it as-is rather than
//! misrepresent it.

use std::fmt;

/// A timestamp field as extracted from a record.
#[derive(Debug, Clone)]
pub enum Timestamp {
    /// Parsed and normalized instant, with the original text retained.
    Instant {
        value: jiff::Timestamp,
        original: String,
    },
    /// Present but unparseable against the accepted formats.
    Unparsed(String),
}

impl Timestamp {
    /// Whether parsing failed and the raw value is all we have.
    pub const fn is_unparsed(&self) -> bool {
        matches!(self, Self::Unparsed(_))
    }

    /// The original textual form the record carried.
    pub fn original(&self) -> &str {
        match self {
            Self::Instant { original, .. } | Self::Unparsed(original) => original,
        }
    }

    /// Format for display using the given strftime-compatible format string.
    ///
    /// An [`Unparsed`](Self::Unparsed) value ignores the format and returns
    /// the original text unchanged.
    pub fn format_with(&self, format: &str) -> String {
        match self {
            Self::Instant { value, .. } => {
                let zdt = value.to_zoned(jiff::tz::TimeZone::UTC);
                zdt.strftime(format).to_string()
            }
            Self::Unparsed(original) => original.clone(),
        }
    }

    /// Format using the default format (`YYYY-MM-DDTHH:MM:SS.mmm`).
    pub fn format_display(&self) -> String {
        self.format_with("%Y-%m-%dT%H:%M:%S%.3f")
    }

    /// Parse a timestamp from a [`serde_json::Value`].
    ///
    /// Returns `None` only when the field should be treated as absent
    /// (`null`). Strings and numbers always produce a timestamp, falling
    /// back to [`Unparsed`](Self::Unparsed); other JSON types keep their
    /// compact rendering as the unparsed text.
    pub fn from_json_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(Self::parse_string(s)),
            serde_json::Value::Number(n) => Some(Self::parse_number(n)),
            serde_json::Value::Null => None,
            other => Some(Self::Unparsed(other.to_string())),
        }
    }

    /// Parse a string timestamp, falling back to `Unparsed`.
    fn parse_string(s: &str) -> Self {
        let original = s.to_string();

        // ISO 8601 / RFC 3339; jiff handles these natively
        if let Ok(ts) = s.parse::<jiff::Timestamp>() {
            return Self::Instant {
                value: ts,
                original,
            };
        }

        // YYYY-MM-DD HH:MM:SS (no timezone → assume UTC)
        if let Ok(dt) = jiff::civil::DateTime::strptime("%Y-%m-%d %H:%M:%S", s)
            && let Ok(ts) = dt.to_zoned(jiff::tz::TimeZone::UTC)
        {
            return Self::Instant {
                value: ts.timestamp(),
                original,
            };
        }

        // YYYY-MM-DD HH:MM:SS.fff
        if let Ok(dt) = jiff::civil::DateTime::strptime("%Y-%m-%d %H:%M:%S%.f", s)
            && let Ok(ts) = dt.to_zoned(jiff::tz::TimeZone::UTC)
        {
            return Self::Instant {
                value: ts.timestamp(),
                original,
            };
        }

        Self::Unparsed(original)
    }

    /// Parse a numeric timestamp using the heuristic:
    /// - Value < 1e12 → seconds
    /// - Value < 1e15 → milliseconds
    /// - Value ≥ 1e15 → nanoseconds
    fn parse_number(n: &serde_json::Number) -> Self {
        let original = n.to_string();
        let parsed = if let Some(i) = n.as_i64() {
            Self::from_epoch_integer(i)
        } else if let Some(f) = n.as_f64() {
            Self::from_epoch_float(f)
        } else {
            None
        };
        match parsed {
            Some(value) => Self::Instant { value, original },
            None => Self::Unparsed(original),
        }
    }

    fn from_epoch_integer(value: i64) -> Option<jiff::Timestamp> {
        if value < 1_000_000_000_000 {
            // seconds
            jiff::Timestamp::from_second(value).ok()
        } else if value < 1_000_000_000_000_000 {
            // milliseconds
            jiff::Timestamp::from_millisecond(value).ok()
        } else {
            // nanoseconds
            jiff::Timestamp::from_nanosecond(i128::from(value)).ok()
        }
    }

    fn from_epoch_float(value: f64) -> Option<jiff::Timestamp> {
        if value < 1e12 {
            // seconds with fractional part
            #[allow(clippy::cast_possible_truncation)]
            let secs = value.trunc() as i64;
            #[allow(clippy::cast_possible_truncation)]
            let nanos = ((value.fract()) * 1_000_000_000.0) as i32;
            jiff::Timestamp::new(secs, nanos).ok()
        } else {
            // milliseconds as float
            #[allow(clippy::cast_possible_truncation)]
            let ms = value as i64;
            jiff::Timestamp::from_millisecond(ms).ok()
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_display())
    }
}
