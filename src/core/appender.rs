//! Appender trait for pretty output destinations

use super::{error::Result, log_record::LogRecord};

pub trait Appender: Send + Sync {
    /// Render `record` and write it; records that fail to render are skipped
    fn append(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
