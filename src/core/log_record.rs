//! Structured log record as emitted by pino-style loggers

use super::error::Result;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Key the message is stored under unless configured otherwise
pub const DEFAULT_MESSAGE_KEY: &str = "msg";

/// One log line, e.g.
///
/// ```json
/// {"level":30,"time":1736332245123,"pid":1234,
///  "hostname":"h","context":"AppModule","msg":"starting"}
/// ```
///
/// The well-known attributes are typed; every other key (the message
/// included) is kept in [`LogRecord::fields`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Milliseconds since the Unix epoch, UTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,

    /// Numeric level code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Application-assigned category, e.g. the emitting module
    ///
    /// Non-string values are kept as their JSON text.
    #[serde(
        default,
        deserialize_with = "deserialize_context",
        skip_serializing_if = "Option::is_none"
    )]
    pub context: Option<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl LogRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single JSON log line
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_time(mut self, millis: i64) -> Self {
        self.time = Some(millis);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.time = Some(timestamp.timestamp_millis());
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level.code());
        self
    }

    pub fn with_level_code(mut self, code: u64) -> Self {
        self.level = Some(code);
        self
    }

    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = Some(pid);
        self
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Store the message under [`DEFAULT_MESSAGE_KEY`]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message: String = message.into();
        self.with_field(DEFAULT_MESSAGE_KEY, message)
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Message stored under `key`, stringified when it is not a JSON string
    pub fn message(&self, key: &str) -> Option<String> {
        self.fields.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

fn deserialize_context<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|value| match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }))
}

/// Escape line breaks and tabs so a message cannot span several output lines
pub fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pino_line() {
        let line = concat!(
            r#"{"level":30,"time":1736332245123,"pid":1234,"hostname":"h","#,
            r#""context":"AppModule","msg":"starting","reqId":7}"#
        );
        let record = LogRecord::from_json(line).unwrap();

        assert_eq!(record.level, Some(30));
        assert_eq!(record.time, Some(1_736_332_245_123));
        assert_eq!(record.pid, Some(1234));
        assert_eq!(record.hostname.as_deref(), Some("h"));
        assert_eq!(record.context.as_deref(), Some("AppModule"));
        assert_eq!(record.message("msg").as_deref(), Some("starting"));
        assert_eq!(record.fields.get("reqId"), Some(&Value::from(7)));
    }

    #[test]
    fn test_missing_attributes_are_none() {
        let record = LogRecord::from_json(r#"{"msg":"bare"}"#).unwrap();
        assert_eq!(record.level, None);
        assert_eq!(record.time, None);
        assert_eq!(record.context, None);
    }

    #[test]
    fn test_non_string_context_is_stringified() {
        let record = LogRecord::from_json(r#"{"level":30,"context":42}"#).unwrap();
        assert_eq!(record.context.as_deref(), Some("42"));

        let record = LogRecord::from_json(r#"{"context":{"module":"Db"}}"#).unwrap();
        assert_eq!(record.context.as_deref(), Some(r#"{"module":"Db"}"#));

        let record = LogRecord::from_json(r#"{"context":null}"#).unwrap();
        assert_eq!(record.context, None);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(LogRecord::from_json("not json at all").is_err());
        assert!(LogRecord::from_json(r#"{"level":"info"}"#).is_err());
    }

    #[test]
    fn test_builder() {
        let record = LogRecord::new()
            .with_level(LogLevel::Warn)
            .with_time(0)
            .with_pid(1)
            .with_context("Db")
            .with_message("slow query");

        assert_eq!(record.level, Some(40));
        assert_eq!(record.message(DEFAULT_MESSAGE_KEY).as_deref(), Some("slow query"));
    }

    #[test]
    fn test_custom_message_key_and_non_string_message() {
        let record = LogRecord::new()
            .with_field("message", "hello")
            .with_field("count", 3);

        assert_eq!(record.message("message").as_deref(), Some("hello"));
        assert_eq!(record.message("count").as_deref(), Some("3"));
        assert_eq!(record.message("msg"), None);
    }

    #[test]
    fn test_json_roundtrip() {
        let record = LogRecord::new()
            .with_level(LogLevel::Error)
            .with_time(42)
            .with_hostname("box")
            .with_message("failed");

        let json = record.to_json().unwrap();
        assert!(!json.contains("pid"));
        assert_eq!(LogRecord::from_json(&json).unwrap(), record);
    }

    #[test]
    fn test_sanitize_message() {
        assert_eq!(
            sanitize_message("line one\nFAKE line\r\tend"),
            "line one\\nFAKE line\\r\\tend"
        );
        assert_eq!(sanitize_message("plain"), "plain");
    }
}
