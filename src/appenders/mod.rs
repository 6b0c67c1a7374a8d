//! Appender implementations

pub mod console;
pub mod writer;

pub use console::PrettyConsoleAppender;
pub use writer::PrettyWriterAppender;

// Re-export trait for convenience
pub use crate::core::Appender;
