//! Output formatter for decoded log entries.
//!
//! Renders each [`DecodeOutcome`] into a single output unit:
//! - Bold timestamp (or the raw text when the timestamp didn't parse)
//! - Colored fixed-width level badge with colon separator (`INFO:`)
//! - Logger name in cyan brackets
//! - Plain message text, with user highlight rules applied
//! - Attributes as `key=value` pairs in their preserved order
//! - Malformed lines as `⚠ [index]`-tagged notices
//!
//! Rendering is a pure function of the outcome and the configuration;
//! stripping ANSI escapes from colored output yields exactly the
//! color-disabled output.

use std::fmt::Write;

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::level::Level;
use crate::parser::{DecodeOutcome, LogRecord};
use crate::reader::RawLine;

/// Marker prefixing malformed-line notices.
const MALFORMED_MARKER: &str = "⚠";

/// Render one decode outcome into `out`.
///
/// An empty `out` after the call means the line was filtered away
/// (minimum level, `--filter`, or a malformed line in `--json` mode) and
/// nothing should be written for it.
pub fn render(outcome: &DecodeOutcome, config: &Config, use_color: bool, out: &mut String) {
    match outcome {
        DecodeOutcome::Record(record) => {
            if should_filter(record, config) {
                out.clear();
                return;
            }
            if config.json_output {
                out.push_str(&record.raw);
            } else {
                format_record(record, config, use_color, out);
            }
        }
        DecodeOutcome::Malformed { raw, detail } => {
            if config.json_output {
                // Only valid records pass through in --json mode
                out.clear();
                return;
            }
            if config.filter_only && !config.highlight.matches(&raw.display_text()) {
                out.clear();
                return;
            }
            format_malformed(raw, detail, config, use_color, out);
        }
    }
}

/// Check if a record should be filtered out.
fn should_filter(record: &LogRecord, config: &Config) -> bool {
    if let Some(ref min_level) = config.min_level {
        match &record.level {
            // Absent or unknown levels can't be compared → show the line
            Some(Level::Unknown) | None => {}
            Some(level) => {
                if level < min_level {
                    return true;
                }
            }
        }
    }
    if config.filter_only && !config.highlight.matches(&record.raw) {
        return true;
    }
    false
}

/// Format a [`LogRecord`] into human-readable output.
///
/// ```text
/// HH:MM:SS.mmm   INFO: [api.server] request completed method=GET status=200
/// ```
fn format_record(record: &LogRecord, config: &Config, use_color: bool, out: &mut String) {
    // Timestamp (bold when colored); unparseable values print verbatim
    if let Some(ref ts) = record.timestamp {
        let ts_str = ts.format_with(&config.timestamp_format);
        if use_color {
            let _ = write!(out, "{}  ", ts_str.bold());
        } else {
            out.push_str(&ts_str);
            out.push_str("  ");
        }
    }

    // Level badge + colon
    if let Some(ref level) = record.level {
        let badge = level.badge();
        if use_color {
            let style = level.style();
            let _ = write!(out, "{}:", badge.style(style));
        } else {
            out.push_str(badge);
            out.push(':');
        }
    } else {
        out.push_str(Level::blank_badge());
        out.push(':');
    }

    // Logger name (bold cyan when colored)
    if let Some(ref logger) = record.logger {
        if use_color {
            let _ = write!(out, " {}", format!("[{logger}]").bold().cyan());
        } else {
            let _ = write!(out, " [{logger}]");
        }
    }

    // Message, with user highlight rules applied when colored
    if let Some(ref msg) = record.message
        && !msg.is_empty()
    {
        out.push(' ');
        if use_color {
            config.highlight.paint(msg, out);
        } else {
            out.push_str(msg);
        }
    }

    format_attrs(record, config, use_color, out);
}

/// Append attributes as ` key=value` pairs.
///
/// Keys named in `field_order` come first, in that order; the rest follow
/// in their original relative order. Suppressed keys are omitted entirely.
fn format_attrs(record: &LogRecord, config: &Config, use_color: bool, out: &mut String) {
    let ordered_first = config
        .field_order
        .iter()
        .filter(|key| record.attrs.contains_key(key.as_str()));
    let remaining = record
        .attrs
        .keys()
        .filter(|key| !config.field_order.iter().any(|f| f == *key));

    for key in ordered_first.chain(remaining) {
        if config.suppress_fields.iter().any(|f| f == key) {
            continue;
        }
        let value = &record.attrs[key.as_str()];
        let val_str = format_value(value);
        let val_display = truncate_value(&val_str, config.max_field_length);

        if use_color {
            let _ = write!(
                out,
                " {}={val_display}",
                key.truecolor(150, 150, 150).bold()
            );
        } else {
            let _ = write!(out, " {key}={val_display}");
        }
    }
}

/// Format a malformed-line notice.
///
/// With `raw_on_error` the original text is echoed after the tag;
/// otherwise a short summary replaces it. Either way the tag carries the
/// 1-based line index for diagnosis.
fn format_malformed(
    raw: &RawLine,
    detail: &str,
    config: &Config,
    use_color: bool,
    out: &mut String,
) {
    let tag = format!("{MALFORMED_MARKER} [{}]", raw.index);
    if use_color {
        let _ = write!(out, "{}", tag.yellow().bold());
    } else {
        out.push_str(&tag);
    }

    if config.raw_on_error {
        let text = raw.display_text();
        out.push(' ');
        if use_color {
            config.highlight.paint(&text, out);
        } else {
            out.push_str(&text);
        }
        if config.verbose {
            let _ = write!(out, " ({detail})");
        }
    } else {
        let _ = write!(out, " malformed record ({} bytes): {detail}", raw.bytes.len());
    }
}

/// Format a JSON value for display as the right-hand side of `key=value`.
///
/// - Simple strings: bare
/// - Strings containing whitespace, `=`, or quotes: JSON-quoted
/// - Numbers/bools: as-is
/// - Null: `null`
/// - Arrays and objects: compact JSON, structure preserved
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => {
            if needs_quoting(s) {
                serde_json::Value::String(s.clone()).to_string()
            } else {
                s.clone()
            }
        }
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Whether a string value would be ambiguous rendered bare.
fn needs_quoting(s: &str) -> bool {
    s.is_empty() || s.chars().any(|c| c.is_whitespace() || c == '=' || c == '"')
}

/// Truncate a value string to `max_len` characters, appending `…` if truncated.
///
/// If `max_len` is `0`, no truncation is applied.
fn truncate_value(s: &str, max_len: usize) -> String {
    if max_len == 0 || s.chars().count() <= max_len {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max_len).collect();
    format!("{truncated}…")
}
