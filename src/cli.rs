//! Command-line argument definitions for `jlogfmt`.
//!
//! Uses [`clap`] derive macros for argument parsing. This layer only
//! collects flags; resolution against the config file and defaults happens
//! in [`Config`](crate::config::Config).

use clap::{Parser, ValueEnum};

/// Render JSON-structured log lines as readable terminal output.
///
/// Reads newline-delimited JSON records from stdin (or the given files)
/// and writes human-readable, optionally colorized text to stdout. Lines
/// that are not JSON objects are echoed as tagged malformed-line notices.
#[derive(Debug, Parser)]
#[command(name = "jlogfmt", version, about, long_about = None)]
pub struct Cli {
    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Minimum severity level to display.
    ///
    /// Records below this level are suppressed. Records without a
    /// recognizable level always pass.
    #[arg(short = 'l', long, value_parser = parse_level_arg)]
    pub level: Option<String>,

    /// Override the JSON key used for the log message field.
    #[arg(short = 'm', long)]
    pub message_key: Option<String>,

    /// Override the JSON key used for the log level field.
    #[arg(long)]
    pub level_key: Option<String>,

    /// Override the JSON key used for the timestamp field.
    #[arg(short = 't', long)]
    pub timestamp_key: Option<String>,

    /// Override the JSON key used for the logger name field.
    #[arg(long)]
    pub logger_key: Option<String>,

    /// Timestamp display format (strftime-compatible).
    #[arg(short = 'F', long)]
    pub timestamp_format: Option<String>,

    /// Hide these attributes (comma-separated).
    #[arg(short = 'e', long, value_delimiter = ',')]
    pub suppress_fields: Option<Vec<String>>,

    /// Render these attributes first, in the given order (comma-separated).
    #[arg(short = 'o', long, value_delimiter = ',')]
    pub field_order: Option<Vec<String>>,

    /// Output well-formed records as their original JSON instead of
    /// formatted text. Malformed lines are suppressed in this mode.
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Maximum character length for attribute values.
    ///
    /// Values exceeding this length are truncated with `…`.
    /// Set to `0` to disable truncation.
    #[arg(short = 'M', long)]
    pub max_field_length: Option<usize>,

    /// Highlight pattern in `color:regex` format. Can be repeated.
    ///
    /// Color codes are ANSI SGR foregrounds: 30-37 (standard) and 90-97
    /// (bright). Example: `-p '31:\d{4}-\d{2}-\d{2}'`.
    #[arg(short = 'p', long = "pattern")]
    pub patterns: Vec<String>,

    /// Only print lines matching at least one `--pattern`.
    #[arg(long)]
    pub filter: bool,

    /// Summarize malformed lines (index, length, parse error) instead of
    /// echoing them verbatim.
    #[arg(long)]
    pub summarize_errors: bool,

    /// Print line and malformed counts to stderr when the run ends.
    #[arg(short = 's', long)]
    pub summary: bool,

    /// Show the JSON parse error for each malformed line.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Generate shell completions and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,

    /// Files to process (if none, read from stdin).
    pub files: Vec<std::path::PathBuf>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

/// Parse level argument as case-insensitive string.
fn parse_level_arg(s: &str) -> Result<String, String> {
    let lower = s.to_lowercase();
    match lower.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "fatal" => Ok(lower),
        _ => Err(format!(
            "invalid level '{s}': expected one of trace, debug, info, warn, error, fatal"
        )),
    }
}
