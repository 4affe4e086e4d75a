//! Error types for the `jlogfmt` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur in `jlogfmt`.
///
/// Maps to exit codes: [`Config`](Self::Config) and
/// [`Pattern`](Self::Pattern) → exit 1, [`Read`](Self::Read) and
/// [`Write`](Self::Write) → exit 2.
///
/// Malformed log lines are deliberately *not* represented here: they are
/// recovered per line inside the pipeline and never abort a run. Only
/// configuration problems and I/O failures on the underlying streams are
/// errors.
#[derive(Debug, Error)]
pub enum JlogfmtError {
    /// Configuration error (invalid flag combination, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// The input stream failed. `line` is the index of the last line that
    /// was fully processed before the failure.
    #[error("read error after line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: std::io::Error,
    },

    /// The output sink failed. `line` is the index of the line whose
    /// rendering could not be written.
    #[error("write error at line {line}: {source}")]
    Write {
        line: u64,
        #[source]
        source: std::io::Error,
    },

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid highlight pattern (bad `color:regex` spec).
    #[error("invalid pattern: {0}")]
    Pattern(String),
}

impl JlogfmtError {
    /// Whether the underlying I/O failure is a broken pipe.
    ///
    /// The CLI treats a broken pipe on the sink as a clean exit (the
    /// downstream pager quit), not as a failure.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => {
                source.kind() == std::io::ErrorKind::BrokenPipe
            }
            _ => false,
        }
    }
}
