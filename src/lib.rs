//! `jlogfmt` — Render JSON-structured log lines as readable terminal output.
//!
//! This library provides the core streaming engine for the `jlogfmt` CLI
//! tool: reading newline-delimited records from a byte stream, decoding
//! each line into a structured record, normalizing conventional fields
//! (timestamp, level, logger, message), and rendering a configurable,
//! optionally colorized representation. Malformed lines are rendered as
//! tagged notices and counted, never dropped and never fatal.
//!
//! # Example
//!
//! ```
//! use jlogfmt::{Config, RawLine, decode_line, render};
//!
//! let config = Config::default();
//! let raw = RawLine {
//!     bytes: br#"{"level":"info","msg":"hello","port":8080}"#.to_vec(),
//!     index: 1,
//! };
//!
//! let outcome = decode_line(raw, &config);
//! let mut out = String::new();
//! render(&outcome, &config, false, &mut out);
//! assert!(out.contains("INFO"));
//! assert!(out.contains("hello"));
//! assert!(out.contains("port=8080"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod highlight;
pub mod level;
pub mod parser;
pub mod pipeline;
pub mod reader;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use config::Config;
pub use error::JlogfmtError;
pub use formatter::render;
pub use highlight::Highlighter;
pub use level::Level;
pub use parser::{DecodeOutcome, LogRecord, decode_line};
pub use pipeline::{Summary, run};
pub use reader::{LineReader, RawLine};
pub use timestamp::Timestamp;
