//! Core formatter types and traits

pub mod appender;
pub mod colors;
pub mod config;
pub mod error;
pub mod field_formatter;
pub mod log_level;
pub mod log_record;
pub mod metrics;
pub mod renderer;
pub mod timestamp;

pub use appender::Appender;
pub use colors::{ColorFn, ColorName, ColorTable};
pub use config::{FieldColors, FormatterConfig, PrettyOptions, WorkerTag};
pub use error::{FormatterError, Result};
pub use field_formatter::{FieldFormatter, FieldOptions, FieldSpec};
pub use log_level::LogLevel;
pub use log_record::{LogRecord, DEFAULT_MESSAGE_KEY};
pub use metrics::RenderMetrics;
pub use renderer::{DiagnosticSink, RecordRenderer};
pub use timestamp::ZoneShift;
