//! The per-line processing loop: read → decode → render → write.
//!
//! One line is fully decoded, normalized, and rendered before the next is
//! read, so output order always matches input order. Malformed lines are
//! counted and rendered degraded; only an I/O failure on the input stream
//! or the output sink ends a run, and then with the index of the last line
//! processed.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::JlogfmtError;
use crate::formatter;
use crate::parser::{self, DecodeOutcome};
use crate::reader::LineReader;

/// Counts reported to the caller when a run ends.
///
/// Translating these into an exit code or a human-readable report is the
/// caller's business; the pipeline only tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Total input lines consumed (including malformed ones).
    pub lines: u64,
    /// Lines that failed to decode as JSON objects.
    pub malformed: u64,
}

impl Summary {
    /// Fold another summary into this one (multiple input files).
    pub fn merge(&mut self, other: Self) {
        self.lines += other.lines;
        self.malformed += other.malformed;
    }
}

/// Drive the full pipeline from `input` to `sink`.
///
/// Returns the run [`Summary`] on a clean end of stream. Stops early only
/// on a read error ([`JlogfmtError::Read`]) or a write error
/// ([`JlogfmtError::Write`]); no further reads are issued once the sink
/// has failed. The sink is flushed before returning so tailed output is
/// never stuck in a buffer.
pub fn run<R: BufRead, W: Write>(
    input: R,
    sink: &mut W,
    config: &Config,
    use_color: bool,
) -> Result<Summary, JlogfmtError> {
    let mut summary = Summary::default();
    let mut buf = String::with_capacity(256);

    for item in LineReader::new(input) {
        let raw = item.map_err(|e| JlogfmtError::Read {
            line: summary.lines,
            source: e,
        })?;
        let index = raw.index;

        let outcome = parser::decode_line(raw, config);
        summary.lines += 1;
        if matches!(outcome, DecodeOutcome::Malformed { .. }) {
            summary.malformed += 1;
        }

        buf.clear();
        formatter::render(&outcome, config, use_color, &mut buf);

        // Filtered-out lines produce an empty buffer — skip them.
        if buf.is_empty() {
            continue;
        }

        writeln!(sink, "{buf}").map_err(|e| JlogfmtError::Write {
            line: index,
            source: e,
        })?;
    }

    sink.flush().map_err(|e| JlogfmtError::Write {
        line: summary.lines,
        source: e,
    })?;

    Ok(summary)
}
