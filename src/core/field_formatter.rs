//! Fixed-width column rendering with optional auto-resize
//!
//! A [`FieldFormatter`] renders one text value (a context name, a pid) into a
//! column of constant width so consecutive log lines stay aligned. When
//! auto-resize is enabled the column grows to the widest value seen so far,
//! up to an optional `length_max`; once the cap is reached growth stops for
//! good and longer values are truncated with a trailing `.`.
//!
//! Widths are counted in `char`s.

use serde::{Deserialize, Serialize};

/// Character appended to truncated content
pub const ELLIPSIS: char = '.';

/// Resize policy of a field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
    /// Grow the column when a longer value is seen
    #[serde(default)]
    pub length_auto_resize: bool,
    /// Upper bound for the content width reached by auto-resize
    #[serde(default)]
    pub length_max: Option<usize>,
}

impl FieldOptions {
    #[must_use]
    pub fn auto_resize() -> Self {
        Self {
            length_auto_resize: true,
            length_max: None,
        }
    }

    #[must_use]
    pub fn with_length_max(mut self, length_max: usize) -> Self {
        self.length_max = Some(length_max);
        self
    }
}

/// Static description of a column, resolved at configuration time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub width: usize,
    pub prefix: String,
    pub suffix: String,
    pub options: FieldOptions,
    pub pad_char: char,
}

impl FieldSpec {
    pub fn new(width: usize, prefix: &str, suffix: &str, options: FieldOptions) -> Self {
        Self {
            width,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            options,
            pad_char: ' ',
        }
    }

    #[must_use]
    pub fn with_pad_char(mut self, pad_char: char) -> Self {
        self.pad_char = pad_char;
        self
    }

    /// Build the stateful formatter for this column
    pub fn build(&self) -> FieldFormatter {
        FieldFormatter::new(
            self.width,
            &self.prefix,
            &self.suffix,
            self.options,
            self.pad_char,
        )
    }
}

#[derive(Debug, Clone)]
pub struct FieldFormatter {
    target_width: usize,
    available_width: usize,
    auto_resize: bool,
    length_max: Option<usize>,
    prefix: String,
    suffix: String,
    pad_char: char,
}

impl FieldFormatter {
    pub fn new(
        target_width: usize,
        prefix: &str,
        suffix: &str,
        options: FieldOptions,
        pad_char: char,
    ) -> Self {
        let decoration = prefix.chars().count() + suffix.chars().count();
        let auto_resize = options.length_auto_resize
            && !options.length_max.is_some_and(|max| max <= target_width);

        // A column is never narrower than its own decoration
        let target_width = target_width.max(decoration);

        Self {
            target_width,
            available_width: target_width - decoration,
            auto_resize,
            length_max: options.length_max,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            pad_char,
        }
    }

    /// Total column width including prefix, suffix and padding
    pub fn target_width(&self) -> usize {
        self.target_width
    }

    /// Width left for the content itself
    pub fn available_width(&self) -> usize {
        self.available_width
    }

    pub fn is_auto_resize(&self) -> bool {
        self.auto_resize
    }

    /// Fit `text` into the column and render it, growing the column if allowed
    pub fn format(&mut self, text: Option<&str>) -> String {
        let text = text.unwrap_or("");
        self.fit(text.chars().count());
        self.render(text)
    }

    /// Adjust the column to content of `len` chars
    ///
    /// This is the only place the width state changes.
    pub fn fit(&mut self, len: usize) {
        if len <= self.available_width || !self.auto_resize {
            return;
        }

        let candidate = match self.length_max {
            Some(max) => len.min(max),
            None => len,
        };
        if self.length_max.is_some_and(|max| candidate >= max) {
            self.auto_resize = false;
        }

        self.available_width = candidate;
        self.target_width = candidate + self.decoration_width();
    }

    /// Render `text` at the current width without touching the state
    pub fn render(&self, text: &str) -> String {
        let content = truncate(text, self.available_width);

        let mut output =
            String::with_capacity(self.target_width + self.prefix.len() + self.suffix.len());
        output.push_str(&self.prefix);
        output.push_str(&content);
        output.push_str(&self.suffix);

        let rendered = output.chars().count();
        let padding = self.target_width.saturating_sub(rendered);
        output.extend(std::iter::repeat(self.pad_char).take(padding));
        output
    }

    fn decoration_width(&self) -> usize {
        self.prefix.chars().count() + self.suffix.chars().count()
    }
}

/// Cut `text` to at most `width` chars, marking the cut with [`ELLIPSIS`]
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push(ELLIPSIS);
    truncated
}
