//! Error types for the formatter

pub type Result<T> = std::result::Result<T, FormatterError>;

#[derive(Debug, thiserror::Error)]
pub enum FormatterError {
    /// Record is missing a field the renderer needs
    #[error("Log record is missing required field '{field}'")]
    MissingField { field: String },

    /// Color table has no function for a configured color
    #[error("No color function registered for '{color}'")]
    MissingColor { color: String },

    /// Timestamp cannot be represented as a calendar date
    #[error("Invalid timestamp: {millis} ms since epoch")]
    InvalidTimestamp { millis: i64 },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Panic raised while rendering a record
    #[error("Render panicked: {0}")]
    RenderPanic(String),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl FormatterError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        FormatterError::MissingField {
            field: field.into(),
        }
    }

    /// Create a missing color error
    pub fn missing_color(color: impl Into<String>) -> Self {
        FormatterError::MissingColor {
            color: color.into(),
        }
    }

    /// Create an invalid timestamp error
    pub fn invalid_timestamp(millis: i64) -> Self {
        FormatterError::InvalidTimestamp { millis }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        FormatterError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FormatterError::Other(msg.into())
    }
}
