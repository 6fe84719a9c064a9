//! Structured logging with catalog-session context.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use luz_commerce::SessionId;
use serde::{Deserialize, Serialize};

use crate::ObservabilityError;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ObservabilityError::InvalidLevel(other.to_string())),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    Json,
    /// Human-readable format (for the terminal).
    #[default]
    Human,
}

impl FromStr for LogFormat {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" | "pretty" | "text" => Ok(Self::Human),
            other => Err(ObservabilityError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Human => write!(f, "human"),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Catalog session for correlation.
    pub session_id: String,
    /// Storefront route being served.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Microseconds since the logger was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}", self.level, self.message);

        if let Some(route) = &self.route {
            s.push_str(&format!(" {}", route));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }

    /// Fields rendered as one JSON object, for the `tracing` event.
    fn fields_json(&self) -> String {
        serde_json::to_string(&self.fields).unwrap_or_default()
    }
}

/// Structured logger bound to one catalog session.
///
/// Entries go out as `tracing` events carrying the session id and route, so
/// the installed subscriber decides where and how they are written.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: SessionId,
    route: Option<String>,
    start_time: std::time::Instant,
    min_level: LogLevel,
}

impl StructuredLogger {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            route: None,
            start_time: std::time::Instant::now(),
            min_level: LogLevel::Info,
        }
    }

    /// Set the route path.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    /// Log at info level with fields.
    pub fn info_with(&self, message: &str, fields: &[(&str, &dyn fmt::Debug)]) {
        let fields = fields
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::json!(format!("{:?}", v))))
            .collect();
        self.log(LogLevel::Info, message, fields);
    }

    /// Build the entry that would be emitted, or `None` below the minimum level.
    pub fn entry(
        &self,
        level: LogLevel,
        message: &str,
        fields: BTreeMap<String, serde_json::Value>,
    ) -> Option<LogEntry> {
        if level < self.min_level {
            return None;
        }
        Some(LogEntry {
            level,
            message: message.to_string(),
            session_id: self.session_id.to_string(),
            route: self.route.clone(),
            fields,
            elapsed_us: Some(self.elapsed_us()),
        })
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        let Some(entry) = self.entry(level, message, fields) else {
            return;
        };

        let route = entry.route.as_deref().unwrap_or("-");
        let extra = entry.fields_json();
        match entry.level {
            LogLevel::Trace => tracing::trace!(session = %entry.session_id, route, fields = %extra, "{}", entry.message),
            LogLevel::Debug => tracing::debug!(session = %entry.session_id, route, fields = %extra, "{}", entry.message),
            LogLevel::Info => tracing::info!(session = %entry.session_id, route, fields = %extra, "{}", entry.message),
            LogLevel::Warn => tracing::warn!(session = %entry.session_id, route, fields = %extra, "{}", entry.message),
            LogLevel::Error => tracing::error!(session = %entry.session_id, route, fields = %extra, "{}", entry.message),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Get elapsed time since logger creation.
    pub fn elapsed_us(&self) -> u64 {
        self.start_time.elapsed().as_micros() as u64
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_u64(mut self, key: &str, value: u64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a duration field (in milliseconds).
    pub fn duration_ms(mut self, key: &str, duration: std::time::Duration) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(duration.as_millis() as u64));
        self
    }

    /// The entry as it would be emitted.
    pub fn build(&self) -> Option<LogEntry> {
        self.logger
            .entry(self.level, &self.message, self.fields.clone())
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger() -> StructuredLogger {
        StructuredLogger::new(SessionId::new("sess-1")).with_route("/catalogo")
    }

    #[test]
    fn test_level_filtering() {
        let log = logger().with_min_level(LogLevel::Warn);
        assert!(log.entry(LogLevel::Info, "skip", BTreeMap::new()).is_none());
        assert!(log.entry(LogLevel::Error, "keep", BTreeMap::new()).is_some());
    }

    #[test]
    fn test_builder_fields_in_json() {
        let log = logger();
        let entry = log
            .info_builder("catalog filtered")
            .field("search", "citr")
            .field_u64("matched", 1)
            .field_bool("exhausted", true)
            .build()
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(json["session_id"], "sess-1");
        assert_eq!(json["route"], "/catalogo");
        assert_eq!(json["search"], "citr");
        assert_eq!(json["matched"], 1);
        assert_eq!(json["exhausted"], true);
        assert_eq!(json["level"], "info");
    }

    #[test]
    fn test_human_format() {
        let entry = logger()
            .debug_builder("page clamped")
            .field_u64("page", 1)
            .build();
        // Default min level is info.
        assert!(entry.is_none());

        let entry = logger()
            .with_min_level(LogLevel::Debug)
            .debug_builder("page clamped")
            .field_u64("page", 1)
            .build()
            .unwrap();
        assert_eq!(entry.to_human(), "[DEBUG] page clamped /catalogo | page=1");
    }

    #[test]
    fn test_parse_level_and_format() {
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Human);
    }

    #[test]
    fn test_emit_without_subscriber_is_silent() {
        let log = logger();
        log.info("no subscriber installed");
        log.info_with("with fields", &[("page", &2)]);
        log.warn_builder("slow view").duration_ms("took", std::time::Duration::from_millis(12)).emit();
    }
}
