//! Console appender implementation

use crate::core::{
    Appender, ColorTable, FormatterConfig, LogLevel, LogRecord, PrettyOptions, RecordRenderer,
    RenderMetrics, Result,
};

pub struct PrettyConsoleAppender {
    renderer: RecordRenderer,
    colors: ColorTable,
}

impl PrettyConsoleAppender {
    pub fn new() -> Self {
        Self {
            renderer: RecordRenderer::default(),
            colors: ColorTable::for_output(true),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            renderer: RecordRenderer::default(),
            colors: ColorTable::for_output(use_colors),
        }
    }

    /// Build from host options, honoring `colorize`
    ///
    /// # Example
    ///
    /// ```
    /// use nest_pretty_formatter::appenders::PrettyConsoleAppender;
    /// use nest_pretty_formatter::PrettyOptions;
    ///
    /// let json = r#"{"showLevelLabel":true,"colorize":false}"#;
    /// let options = PrettyOptions::from_json(json).unwrap();
    /// let appender = PrettyConsoleAppender::from_options(options).unwrap();
    /// ```
    pub fn from_options(options: PrettyOptions) -> Result<Self> {
        let colors = ColorTable::for_output(options.colorize());
        Ok(Self {
            renderer: RecordRenderer::new(options.into_config()?)?,
            colors,
        })
    }

    pub fn from_config(config: FormatterConfig) -> Result<Self> {
        Ok(Self {
            renderer: RecordRenderer::new(config)?,
            colors: ColorTable::for_output(true),
        })
    }

    /// Replace the renderer, e.g. to attach a diagnostic sink
    #[must_use]
    pub fn with_renderer(mut self, renderer: RecordRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn metrics(&self) -> &RenderMetrics {
        self.renderer.metrics()
    }
}

impl Default for PrettyConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for PrettyConsoleAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let Some(line) = self.renderer.render(record, &self.colors) else {
            return Ok(());
        };

        // Route Error and Fatal levels to stderr, others to stdout
        let to_stderr = record
            .level
            .and_then(LogLevel::from_code)
            .is_some_and(|level| level.is_error());
        if to_stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "pretty-console"
    }
}
