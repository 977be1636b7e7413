//! Event structure handed to formatters

use super::fields::{FieldValue, Fields};
use super::log_level::LogLevel;
use chrono::{DateTime, FixedOffset, Utc};

/// One log record as built by the host framework
///
/// The formatter only reads events. The message is kept verbatim: no
/// escaping or truncation happens here or during formatting.
#[derive(Debug, Clone)]
pub struct Event {
    pub timestamp: DateTime<FixedOffset>,
    pub level: LogLevel,
    pub message: String,
    pub fields: Fields,
}

impl Event {
    /// Create an event stamped with the current UTC time
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().fixed_offset(),
            level,
            message: message.into(),
            fields: Fields::new(),
        }
    }

    pub fn with_timestamp<Tz: Into<DateTime<FixedOffset>>>(mut self, timestamp: Tz) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key, value);
        self
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }
}
