//! OpenTelemetry tracing exported to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `<data dir>/epicurious-otlp.json` as one OTLP JSON document
//! per line. The file rotates at 10 MB and three backups are kept. Level
//! selection: `RUST_LOG`, then the `trace_level` config option, then `info`.
//!
//! - [`init`]: Subscriber setup
//! - `tracer`: Provider and file exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: Rotating writer

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
