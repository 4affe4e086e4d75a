//! Log level representation with parsing, display, and colorization.
//!
//! Supports both string-based levels (e.g., `"info"`, `"warn"`) and numeric
//! levels used by frameworks like bunyan and pino (e.g., 30 = info, 40 = warn).
//! The set is closed: every level a record can carry is one of the variants
//! below, including [`Unknown`](Level::Unknown) for text that matches no
//! alias. Consumers match exhaustively; there is no open-ended level type.

use std::fmt;

use owo_colors::Style;

/// Canonical log level enumeration.
///
/// Ordered by severity (ascending) for `>=` filtering via [`Ord`];
/// [`Unknown`](Self::Unknown) sorts lowest and is exempt from threshold
/// filtering (see `formatter::should_filter`). The numeric discriminants of
/// the named variants match the bunyan/pino convention:
/// - [`Trace`](Self::Trace) = 10
/// - [`Debug`](Self::Debug) = 20
/// - [`Info`](Self::Info) = 30
/// - [`Warn`](Self::Warn) = 40
/// - [`Error`](Self::Error) = 50
/// - [`Fatal`](Self::Fatal) = 60
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Unknown = 0,
    Trace = 10,
    Debug = 20,
    Info = 30,
    Warn = 40,
    Error = 50,
    Fatal = 60,
}

impl Level {
    /// 5-character display badge for the level, right-justified (e.g., `" INFO"`, `"ERROR"`).
    #[allow(clippy::trivially_copy_pass_by_ref)] // &self required since OwoColorize has conflicting trait methods
    pub const fn badge(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKWN",
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => " INFO",
            Self::Warn => " WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// The blank badge (5 spaces) used when a record has no level field.
    pub const fn blank_badge() -> &'static str {
        "     "
    }

    /// Returns the [`Style`] for this level's badge when colors are enabled.
    ///
    /// Color scheme follows fblog convention:
    /// - Trace: cyan bold
    /// - Debug: blue bold
    /// - Info: green bold
    /// - Warn: yellow bold
    /// - Error: red bold
    /// - Fatal: magenta bold
    /// - Unknown: white bold
    #[allow(clippy::trivially_copy_pass_by_ref)] // &self required since OwoColorize has conflicting trait methods
    pub const fn style(&self) -> Style {
        match self {
            Self::Unknown => Style::new().white().bold(),
            Self::Trace => Style::new().cyan().bold(),
            Self::Debug => Style::new().blue().bold(),
            Self::Info => Style::new().green().bold(),
            Self::Warn => Style::new().yellow().bold(),
            Self::Error => Style::new().red().bold(),
            Self::Fatal => Style::new().magenta().bold(),
        }
    }

    /// Parse a string into a [`Level`], case-insensitive.
    ///
    /// Returns `None` for unrecognized strings; the caller decides whether
    /// that means "absent" or [`Unknown`](Self::Unknown)-with-note.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" | "trc" => Some(Self::Trace),
            "debug" | "dbg" => Some(Self::Debug),
            "info" | "inf" | "information" => Some(Self::Info),
            "warn" | "warning" | "wrn" => Some(Self::Warn),
            "error" | "err" => Some(Self::Error),
            "fatal" | "critical" | "crit" | "panic" | "emerg" | "emergency" => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Parse a numeric value into a [`Level`] using nearest-match rounding.
    ///
    /// Uses bunyan/pino numeric convention:
    /// - 10 = trace, 20 = debug, 30 = info, 40 = warn, 50 = error, 60 = fatal
    ///
    /// Values between thresholds round to the nearest lower level.
    pub const fn from_numeric(n: i64) -> Self {
        match n {
            ..=14 => Self::Trace,
            15..=24 => Self::Debug,
            25..=34 => Self::Info,
            35..=44 => Self::Warn,
            45..=54 => Self::Error,
            55.. => Self::Fatal,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.badge())
    }
}
