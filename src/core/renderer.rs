//! Record renderer
//!
//! Turns one [`LogRecord`] into one pretty line:
//!
//! ```text
//! ᐅ 2025-01-08T11:30:45.123 - (1234) [AppModule]        starting
//! ```
//!
//! Layout: `icon date - pid worker contextRoot context levelSuffix message`.
//!
//! A formatter sits inside somebody else's logging pipeline, so it must never
//! take that pipeline down. Any failure while rendering a record (missing
//! field, missing color function, even a panic in a color function) drops the
//! record: [`RecordRenderer::render`] returns `None`, the drop is counted in
//! [`RenderMetrics`], and the optional [`DiagnosticSink`] is told why.

use super::colors::ColorTable;
use super::config::FormatterConfig;
use super::error::{FormatterError, Result};
use super::field_formatter::FieldFormatter;
use super::log_record::{sanitize_message, LogRecord};
use super::metrics::RenderMetrics;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Observer for records dropped by the renderer
///
/// A panic inside rendering is reported here as [`FormatterError::RenderPanic`],
/// but it still passes through the process panic hook first. The default hook
/// prints the panic to stderr; hosts that need a quiet stderr install their own
/// hook with [`std::panic::set_hook`].
#[derive(Clone)]
pub struct DiagnosticSink(Arc<dyn Fn(&FormatterError) + Send + Sync>);

impl DiagnosticSink {
    pub fn new<F>(report: F) -> Self
    where
        F: Fn(&FormatterError) + Send + Sync + 'static,
    {
        Self(Arc::new(report))
    }

    /// Sink writing one `[FORMATTER ERROR]` line per dropped record to stderr
    pub fn stderr() -> Self {
        Self::new(|error| eprintln!("[FORMATTER ERROR] Record dropped: {}", error))
    }

    pub fn report(&self, error: &FormatterError) {
        (self.0)(error)
    }
}

impl fmt::Debug for DiagnosticSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DiagnosticSink")
    }
}

#[derive(Debug)]
pub struct RecordRenderer {
    config: FormatterConfig,
    context_field: FieldFormatter,
    pid_field: FieldFormatter,
    diagnostics: Option<DiagnosticSink>,
    metrics: Arc<RenderMetrics>,
}

impl RecordRenderer {
    /// Create a renderer, rejecting configurations it cannot work with
    pub fn new(config: FormatterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: FormatterConfig) -> Self {
        Self {
            context_field: config.context_field.build(),
            pid_field: config.pid_field.build(),
            config,
            diagnostics: None,
            metrics: Arc::new(RenderMetrics::new()),
        }
    }

    /// Report dropped records to `sink` instead of discarding them silently
    #[must_use]
    pub fn with_diagnostics(mut self, sink: DiagnosticSink) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn metrics(&self) -> &RenderMetrics {
        &self.metrics
    }

    /// Shared handle to the metrics, for hosts that keep the renderer elsewhere
    pub fn metrics_handle(&self) -> Arc<RenderMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Render one record, or nothing if it cannot be rendered
    ///
    /// Panics are contained and count as drops. The process panic hook still
    /// runs before the unwind is caught, so the default hook's message reaches
    /// stderr.
    pub fn render(&mut self, record: &LogRecord, colors: &ColorTable) -> Option<String> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.try_render(record, colors)));

        let error = match outcome {
            Ok(Ok(line)) => {
                self.metrics.record_rendered();
                return Some(line);
            }
            Ok(Err(error)) => error,
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                FormatterError::RenderPanic(panic_msg)
            }
        };

        self.drop_record(&error);
        None
    }

    /// Parse a JSON log line and render it, dropping lines that do not parse
    pub fn render_json(&mut self, line: &str, colors: &ColorTable) -> Option<String> {
        match LogRecord::from_json(line) {
            Ok(record) => self.render(&record, colors),
            Err(error) => {
                self.drop_record(&error);
                None
            }
        }
    }

    /// Render one record, surfacing the reason when it cannot be rendered
    ///
    /// Column widths still adapt to records that later fail.
    pub fn try_render(&mut self, record: &LogRecord, colors: &ColorTable) -> Result<String> {
        let time = record
            .time
            .ok_or_else(|| FormatterError::missing_field("time"))?;
        let code = record
            .level
            .ok_or_else(|| FormatterError::missing_field("level"))?;

        let config = &self.config;
        let field_colors = config.field_colors;

        let date = colors.paint(field_colors.date, &config.zone_shift.format_millis(time)?)?;

        let label = config.level_label(code);
        let level_color = colors.get(config.level_color(label))?;

        let host = if config.show_host_name {
            let hostname = record
                .hostname
                .as_deref()
                .ok_or_else(|| FormatterError::missing_field("hostname"))?;
            format!("{}:", hostname)
        } else {
            String::new()
        };
        let pid_text = record.pid.map(|pid| pid.to_string());
        let pid = colors.paint(
            field_colors.pid,
            &format!("{}{}", host, self.pid_field.format(pid_text.as_deref())),
        )?;

        let level_suffix = if config.show_level_label {
            format!(" | {}", level_color(label))
        } else {
            String::new()
        };

        let icon = level_color(config.icon(label));

        let worker = match config.worker {
            Some(ref worker) => {
                format!("{} ", colors.paint(field_colors.worker, &format!("#{}", worker))?)
            }
            None => String::new(),
        };
        let context_root = match config.context_root {
            Some(ref root) => format!("{} ", colors.paint(field_colors.context_root, root)?),
            None => String::new(),
        };
        let context_text = record.context.as_deref().map(sanitize_message);
        let context = colors.paint(
            field_colors.context,
            &self.context_field.format(context_text.as_deref()),
        )?;

        let message = record.message(&config.message_key).unwrap_or_default();

        Ok(format!(
            "{} {} - {} {}{}{}{} {}",
            icon,
            date,
            pid,
            worker,
            context_root,
            context,
            level_suffix,
            level_color(&sanitize_message(&message))
        ))
    }

    fn drop_record(&self, error: &FormatterError) {
        self.metrics.record_dropped();
        if let Some(ref sink) = self.diagnostics {
            sink.report(error);
        }
    }
}

impl Default for RecordRenderer {
    fn default() -> Self {
        Self::from_config(FormatterConfig::default())
    }
}
