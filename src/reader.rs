//! Line reader that splits an input byte stream into indexed raw lines.
//!
//! Works at the byte level so that lines containing invalid UTF-8 still
//! reach the decoder (which reports them as malformed) instead of being
//! dropped by a lossy string conversion. Buffers exactly one line at a
//! time, which keeps continuously tailed streams responsive.

use std::io::{self, BufRead};

/// One newline-delimited segment of the input stream.
///
/// `index` is 1-based and strictly increasing; it follows the line through
/// decoding so malformed-line notices and I/O errors can name the exact
/// input position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub bytes: Vec<u8>,
    pub index: u64,
}

impl RawLine {
    /// Lossy text view of the line, for display in degraded output.
    pub fn display_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Iterator over [`RawLine`]s pulled from a [`BufRead`] stream.
///
/// Semantics:
/// - `\n` terminators are consumed; a preceding `\r` is stripped too.
/// - A final segment without a trailing newline is still emitted.
/// - A read error is yielded once as `Err`, after which the iterator is
///   fused (the underlying stream is in an unknown state).
pub struct LineReader<R> {
    inner: R,
    next_index: u64,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            next_index: 1,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut bytes = Vec::new();
        match self.inner.read_until(b'\n', &mut bytes) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if bytes.last() == Some(&b'\n') {
                    bytes.pop();
                    if bytes.last() == Some(&b'\r') {
                        bytes.pop();
                    }
                }
                let index = self.next_index;
                self.next_index += 1;
                Some(Ok(RawLine { bytes, index }))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
