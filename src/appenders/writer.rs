//! Appender writing pretty lines to any destination

use crate::core::{
    Appender, ColorTable, FormatterError, LogRecord, PrettyOptions, RecordRenderer, RenderMetrics,
    Result,
};
use std::io::{BufWriter, Write};

/// Writes one pretty line per record into a buffered `W`
///
/// Plain (uncolored) by default, since destinations are usually files or
/// pipes.
///
/// # Example
///
/// ```
/// use nest_pretty_formatter::appenders::PrettyWriterAppender;
/// use nest_pretty_formatter::{Appender, LogLevel, LogRecord};
///
/// let mut appender = PrettyWriterAppender::new(Vec::new());
/// let record = LogRecord::new()
///     .with_time(0)
///     .with_level(LogLevel::Info)
///     .with_message("hello");
/// appender.append(&record).unwrap();
///
/// let output = String::from_utf8(appender.into_inner().unwrap()).unwrap();
/// assert!(output.ends_with(" hello\n"));
/// ```
pub struct PrettyWriterAppender<W: Write> {
    writer: Option<BufWriter<W>>,
    renderer: RecordRenderer,
    colors: ColorTable,
    sync: bool,
}

impl<W: Write + Send + Sync> PrettyWriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(BufWriter::new(writer)),
            renderer: RecordRenderer::default(),
            colors: ColorTable::plain(),
            sync: false,
        }
    }

    /// Build from host options
    ///
    /// Honors `colorize` (default on) and the pass-through `sync` flag.
    pub fn from_options(writer: W, options: PrettyOptions) -> Result<Self> {
        let colors = ColorTable::for_output(options.colorize());
        let sync = options
            .passthrough
            .get("sync")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false);

        Ok(Self {
            writer: Some(BufWriter::new(writer)),
            renderer: RecordRenderer::new(options.into_config()?)?,
            colors,
            sync,
        })
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: RecordRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: ColorTable) -> Self {
        self.colors = colors;
        self
    }

    /// Flush after every line instead of when the buffer fills
    #[must_use]
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    pub fn metrics(&self) -> &RenderMetrics {
        self.renderer.metrics()
    }

    /// Flush and hand back the destination
    pub fn into_inner(mut self) -> Result<W> {
        let writer = self
            .writer
            .take()
            .ok_or_else(|| FormatterError::other("Writer already taken"))?;
        writer
            .into_inner()
            .map_err(|e| FormatterError::IoError(e.into_error()))
    }
}

impl<W: Write + Send + Sync> Appender for PrettyWriterAppender<W> {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let Some(mut line) = self.renderer.render(record, &self.colors) else {
            return Ok(());
        };
        line.push('\n');

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| FormatterError::other("Writer already taken"))?;
        writer.write_all(line.as_bytes())?;
        if self.sync {
            writer.flush()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "pretty-writer"
    }
}

impl<W: Write> Drop for PrettyWriterAppender<W> {
    fn drop(&mut self) {
        // Ensure buffered lines reach the destination
        if let Some(ref mut writer) = self.writer {
            let _ = writer.flush();
        }
    }
}
