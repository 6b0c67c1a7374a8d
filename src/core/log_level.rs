//! Log level definitions
//!
//! Levels use the numeric codes of pino-style loggers (10 = trace ... 60 = fatal).

use super::colors::ColorName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label used when a record carries a level code with no known label
pub const UNKNOWN_LEVEL_LABEL: &str = "UNK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace = 10,
    Debug = 20,
    #[default]
    Info = 30,
    Warn = 40,
    Error = 50,
    Fatal = 60,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Numeric level code as written into records
    pub fn code(&self) -> u64 {
        *self as u64
    }

    pub fn from_code(code: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.code() == code)
    }

    /// Uppercase label shown in the level suffix
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Lowercase label used as the key of the color and icon maps
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }

    pub fn default_color(&self) -> ColorName {
        match self {
            LogLevel::Trace => ColorName::Cyan,
            LogLevel::Debug => ColorName::Gray,
            LogLevel::Info => ColorName::Blue,
            LogLevel::Warn => ColorName::YellowBright,
            LogLevel::Error => ColorName::RedBright,
            LogLevel::Fatal => ColorName::Magenta,
        }
    }

    pub fn default_icon(&self) -> &'static str {
        match self {
            LogLevel::Trace => "ৡ",
            LogLevel::Debug => "ø",
            LogLevel::Info => "ᐅ",
            LogLevel::Warn => "۩",
            LogLevel::Error => "ᘿ",
            LogLevel::Fatal => "ᙡ",
        }
    }

    /// Whether console output for this level belongs on stderr
    pub fn is_error(&self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Fatal)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
