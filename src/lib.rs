//! # Nest Pretty Formatter
//!
//! Colorized, column-aligned pretty printing of pino-style structured log
//! records, tuned for the shape NestJS-style applications log in
//! (timestamp, pid, context, optional worker tag, level, message).
//!
//! ## Features
//!
//! - **Aligned columns**: context and pid columns grow to the widest value
//!   seen, up to a cap, then truncate with `.`
//! - **Level styling**: per-level colors, icons and optional labels
//! - **Never throws**: malformed records are dropped, counted, and optionally
//!   reported to a diagnostic sink
//! - **Pluggable colors**: ANSI via `colored`, or plain text
//!
//! ```
//! use nest_pretty_formatter::prelude::*;
//!
//! let mut renderer = RecordRenderer::new(
//!     FormatterConfig::new().with_zone_shift(ZoneShift::Utc),
//! ).unwrap();
//!
//! let record = LogRecord::new()
//!     .with_time(1_736_332_245_123)
//!     .with_level(LogLevel::Info)
//!     .with_pid(1234)
//!     .with_context("AppModule")
//!     .with_message("starting");
//!
//! let line = renderer.render(&record, &ColorTable::plain()).unwrap();
//! assert_eq!(line, "ᐅ 2025-01-08T10:30:45.123 - (1234) [AppModule]        starting");
//! ```

pub mod appenders;
pub mod core;

pub mod prelude {
    pub use crate::appenders::{PrettyConsoleAppender, PrettyWriterAppender};
    pub use crate::core::{
        Appender, ColorName, ColorTable, DiagnosticSink, FieldColors, FieldFormatter,
        FieldOptions, FieldSpec, FormatterConfig, FormatterError, LogLevel, LogRecord,
        PrettyOptions, RecordRenderer, RenderMetrics, Result, WorkerTag, ZoneShift,
    };
}

pub use appenders::{PrettyConsoleAppender, PrettyWriterAppender};
pub use core::{
    Appender, ColorFn, ColorName, ColorTable, DiagnosticSink, FieldColors, FieldFormatter,
    FieldOptions, FieldSpec, FormatterConfig, FormatterError, LogLevel, LogRecord, PrettyOptions,
    RecordRenderer, RenderMetrics, Result, WorkerTag, ZoneShift, DEFAULT_MESSAGE_KEY,
};
