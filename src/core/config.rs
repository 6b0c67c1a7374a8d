//! Formatter configuration
//!
//! [`PrettyOptions`] is the partial, user-facing option object (it
//! deserializes from the camelCase options a host passes around).
//! [`FormatterConfig`] is the fully resolved, immutable configuration the
//! renderer works from. All defaulting happens once, in
//! [`PrettyOptions::into_config`] or [`FormatterConfig::new`].

use super::colors::ColorName;
use super::error::{FormatterError, Result};
use super::field_formatter::{FieldOptions, FieldSpec};
use super::log_level::{LogLevel, UNKNOWN_LEVEL_LABEL};
use super::log_record::DEFAULT_MESSAGE_KEY;
use super::timestamp::ZoneShift;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Icon used for levels missing from the icon map
pub const DEFAULT_ICON: &str = "•";

/// Default context column: `[AppModule]` padded to 18 chars
pub const DEFAULT_CONTEXT_WIDTH: usize = 18;

/// Default ceiling for context column growth
pub const DEFAULT_CONTEXT_LENGTH_MAX: usize = 40;

/// Colors of the non-level parts of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldColors {
    pub date: ColorName,
    pub pid: ColorName,
    pub context: ColorName,
    pub context_root: ColorName,
    pub worker: ColorName,
}

impl Default for FieldColors {
    fn default() -> Self {
        Self {
            date: ColorName::White,
            pid: ColorName::GreenBright,
            context: ColorName::Yellow,
            context_root: ColorName::CyanBright,
            worker: ColorName::MagentaBright,
        }
    }
}

/// Resolved configuration of a [`RecordRenderer`](super::renderer::RecordRenderer)
///
/// # Examples
///
/// ```
/// use nest_pretty_formatter::core::FormatterConfig;
///
/// let config = FormatterConfig::new()
///     .with_show_level_label(true)
///     .with_worker("3");
/// assert_eq!(config.level_label(30), "INFO");
/// ```
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Level code to uppercase label
    pub level_labels: BTreeMap<u64, String>,
    /// Lowercase level label to color
    pub level_colors: HashMap<String, ColorName>,
    /// Color for levels absent from `level_colors`
    pub default_level_color: ColorName,
    pub field_colors: FieldColors,
    /// Lowercase level label to icon
    pub icons: HashMap<String, String>,
    pub default_icon: String,
    /// Prefix the pid block with `hostname:`
    pub show_host_name: bool,
    /// Append ` | LABEL` after the context
    pub show_level_label: bool,
    pub context_root: Option<String>,
    pub worker: Option<String>,
    /// Record key holding the message
    pub message_key: String,
    pub zone_shift: ZoneShift,
    pub context_field: FieldSpec,
    pub pid_field: FieldSpec,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            level_labels: LogLevel::ALL
                .into_iter()
                .map(|level| (level.code(), level.to_str().to_string()))
                .collect(),
            level_colors: LogLevel::ALL
                .into_iter()
                .map(|level| (level.label().to_string(), level.default_color()))
                .collect(),
            default_level_color: ColorName::Blue,
            field_colors: FieldColors::default(),
            icons: default_icons(),
            default_icon: DEFAULT_ICON.to_string(),
            show_host_name: false,
            show_level_label: false,
            context_root: None,
            worker: None,
            message_key: DEFAULT_MESSAGE_KEY.to_string(),
            zone_shift: ZoneShift::default(),
            context_field: FieldSpec::new(
                DEFAULT_CONTEXT_WIDTH,
                "[",
                "]",
                FieldOptions::auto_resize().with_length_max(DEFAULT_CONTEXT_LENGTH_MAX),
            ),
            pid_field: FieldSpec::new(1, "(", ")", FieldOptions::auto_resize()),
        }
    }
}

fn default_icons() -> HashMap<String, String> {
    LogLevel::ALL
        .into_iter()
        .map(|level| (level.label().to_string(), level.default_icon().to_string()))
        .collect()
}

impl FormatterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_show_host_name(mut self, show: bool) -> Self {
        self.show_host_name = show;
        self
    }

    #[must_use]
    pub fn with_show_level_label(mut self, show: bool) -> Self {
        self.show_level_label = show;
        self
    }

    /// Replace the icon map
    ///
    /// A `default` entry, if present, becomes the fallback icon.
    #[must_use]
    pub fn with_icons(mut self, icons: HashMap<String, String>) -> Self {
        let mut icons: HashMap<String, String> = icons
            .into_iter()
            .map(|(label, icon)| (label.to_lowercase(), icon))
            .collect();
        if let Some(default_icon) = icons.remove("default") {
            self.default_icon = default_icon;
        }
        self.icons = icons;
        self
    }

    #[must_use]
    pub fn with_level_color(mut self, label: &str, color: ColorName) -> Self {
        if label.eq_ignore_ascii_case("default") {
            self.default_level_color = color;
        } else {
            self.level_colors.insert(label.to_lowercase(), color);
        }
        self
    }

    #[must_use]
    pub fn with_field_colors(mut self, colors: FieldColors) -> Self {
        self.field_colors = colors;
        self
    }

    /// Register a level beyond the six built-in ones
    #[must_use]
    pub fn with_custom_level(mut self, code: u64, label: &str) -> Self {
        self.level_labels.insert(code, label.to_uppercase());
        self
    }

    #[must_use]
    pub fn with_context_root(mut self, root: impl Into<String>) -> Self {
        self.context_root = Some(root.into());
        self
    }

    #[must_use]
    pub fn with_worker(mut self, worker: impl Into<String>) -> Self {
        self.worker = Some(worker.into());
        self
    }

    #[must_use]
    pub fn with_message_key(mut self, key: impl Into<String>) -> Self {
        self.message_key = key.into();
        self
    }

    #[must_use]
    pub fn with_zone_shift(mut self, zone_shift: ZoneShift) -> Self {
        self.zone_shift = zone_shift;
        self
    }

    #[must_use]
    pub fn with_context_field(mut self, spec: FieldSpec) -> Self {
        self.context_field = spec;
        self
    }

    #[must_use]
    pub fn with_pid_field(mut self, spec: FieldSpec) -> Self {
        self.pid_field = spec;
        self
    }

    /// Uppercase label for a level code, `UNK` when unknown
    pub fn level_label(&self, code: u64) -> &str {
        self.level_labels
            .get(&code)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_LEVEL_LABEL)
    }

    pub fn level_color(&self, label: &str) -> ColorName {
        self.level_colors
            .get(&label.to_lowercase())
            .copied()
            .unwrap_or(self.default_level_color)
    }

    pub fn icon(&self, label: &str) -> &str {
        self.icons
            .get(&label.to_lowercase())
            .map(String::as_str)
            .unwrap_or(&self.default_icon)
    }

    /// Check the configuration for values the renderer cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.message_key.is_empty() {
            return Err(FormatterError::config("messageKey", "must not be empty"));
        }
        let fields = [
            ("context field", &self.context_field),
            ("pid field", &self.pid_field),
        ];
        for (name, spec) in fields {
            if spec.options.length_max == Some(0) {
                return Err(FormatterError::config(name, "lengthMax must be positive"));
            }
        }
        if let Some((code, _)) = self.level_labels.iter().find(|(_, label)| label.is_empty()) {
            return Err(FormatterError::config(
                "customLevels",
                format!("level {} has an empty label", code),
            ));
        }
        Ok(())
    }
}

/// Static worker tag, given either as a name or a number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkerTag {
    Id(i64),
    Name(String),
}

impl fmt::Display for WorkerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerTag::Id(id) => write!(f, "{}", id),
            WorkerTag::Name(name) => f.write_str(name),
        }
    }
}

/// User-facing options, all optional
///
/// Keys this crate does not know are kept in `passthrough` untouched, for the
/// host that owns the output stream.
///
/// # Examples
///
/// ```
/// use nest_pretty_formatter::core::PrettyOptions;
///
/// let json = r#"{"showLevelLabel":true,"worker":2,"sync":true}"#;
/// let options = PrettyOptions::from_json(json).unwrap();
/// let config = options.into_config().unwrap();
/// assert!(config.show_level_label);
/// assert_eq!(config.worker.as_deref(), Some("2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrettyOptions {
    pub show_host_name: bool,
    pub show_level_label: bool,
    pub icon_levels: Option<HashMap<String, String>>,
    pub context_root: Option<String>,
    pub worker: Option<WorkerTag>,
    pub message_key: Option<String>,
    pub colorize: Option<bool>,
    /// Extra levels as label to code, the way pino declares them
    pub custom_levels: Option<HashMap<String, u64>>,
    pub level_colors: Option<HashMap<String, ColorName>>,
    pub context_width: Option<usize>,
    pub context_length_max: Option<usize>,
    #[serde(flatten)]
    pub passthrough: Map<String, Value>,
}

impl PrettyOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether output should carry ANSI colors (default: yes)
    pub fn colorize(&self) -> bool {
        self.colorize.unwrap_or(true)
    }

    /// Resolve every default and validate the result
    pub fn into_config(self) -> Result<FormatterConfig> {
        let mut config = FormatterConfig::new()
            .with_show_host_name(self.show_host_name)
            .with_show_level_label(self.show_level_label);

        if let Some(icons) = self.icon_levels {
            config = config.with_icons(icons);
        }
        if let Some(root) = self.context_root {
            config = config.with_context_root(root);
        }
        if let Some(worker) = self.worker {
            config = config.with_worker(worker.to_string());
        }
        if let Some(key) = self.message_key {
            config = config.with_message_key(key);
        }
        for (label, code) in self.custom_levels.unwrap_or_default() {
            config = config.with_custom_level(code, &label);
        }
        for (label, color) in self.level_colors.unwrap_or_default() {
            config = config.with_level_color(&label, color);
        }

        if self.context_width.is_some() || self.context_length_max.is_some() {
            let mut context = config.context_field.clone();
            if let Some(width) = self.context_width {
                context.width = width;
            }
            if let Some(max) = self.context_length_max {
                context.options.length_max = Some(max);
            }
            config = config.with_context_field(context);
        }

        config.validate()?;
        Ok(config)
    }
}
