//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → OTLP JSON lines
//! ```
//!
//! Traces land in `~/.local/share/zellij/logingate/logingate-otlp.json`,
//! rotated at 10MB with three timestamped backups. The level comes from the
//! `trace_level` plugin option (default `info`).
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `tracer`: provider and span exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: rotating file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
