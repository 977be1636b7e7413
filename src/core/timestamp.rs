//! Timestamp formatting utilities
//!
//! Resolves the configured timestamp pattern into a concrete format and
//! renders event instants with it. Supports RFC 3339 (the default), ISO 8601,
//! Unix timestamps, and custom strftime patterns.

use super::error::{FormatterError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use std::fmt::Write;
use std::time::SystemTime;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_log_formatter::core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap().fixed_offset();
/// let rendered = TimestampFormat::Rfc3339.format(&instant).unwrap();
/// assert_eq!(rendered, "2023-01-01T00:00:00Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// RFC 3339 with second precision: `2025-01-08T10:30:45Z`
    ///
    /// Zero offsets print as `Z`, anything else as `+hh:mm` / `-hh:mm`.
    #[default]
    Rfc3339,

    /// ISO 8601 in UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// ISO 8601 in UTC with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Unix timestamp in microseconds: `1736332245123456`
    UnixMicros,

    /// Custom strftime format, rendered in the event's own offset
    ///
    /// ```
    /// use rust_log_formatter::core::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Resolve a configured pattern string
    ///
    /// The names `RFC3339`, `ISO8601`, `ISO8601_MICROS`, `UNIX`,
    /// `UNIX_MILLIS` and `UNIX_MICROS` select the matching built-in format.
    /// Any other string is taken as a strftime pattern; it must parse and render.
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let format = match pattern {
            "RFC3339" => TimestampFormat::Rfc3339,
            "ISO8601" => TimestampFormat::Iso8601,
            "ISO8601_MICROS" => TimestampFormat::Iso8601Micros,
            "UNIX" => TimestampFormat::Unix,
            "UNIX_MILLIS" => TimestampFormat::UnixMillis,
            "UNIX_MICROS" => TimestampFormat::UnixMicros,
            custom => {
                validate_strftime(custom)?;
                TimestampFormat::Custom(custom.to_string())
            }
        };
        Ok(format)
    }

    /// Format an instant according to this format
    ///
    /// Only a `Custom` pattern that chrono cannot render produces an error.
    pub fn format(&self, datetime: &DateTime<FixedOffset>) -> Result<String> {
        let rendered = match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Iso8601 => datetime
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::Iso8601Micros => datetime
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.6fZ")
                .to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                write!(out, "{}", datetime.format(pattern)).map_err(|_| {
                    FormatterError::timestamp_pattern(pattern.as_str(), "pattern cannot be rendered")
                })?;
                out
            }
        };
        Ok(rendered)
    }
}

fn validate_strftime(pattern: &str) -> Result<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(FormatterError::timestamp_pattern(
            pattern,
            "unsupported strftime specifier",
        ));
    }

    // Some specifiers parse but are parse-only (`%#z`); render once to catch them
    let sample: DateTime<Utc> = SystemTime::UNIX_EPOCH.into();
    let mut out = String::new();
    write!(out, "{}", sample.fixed_offset().format(pattern)).map_err(|_| {
        FormatterError::timestamp_pattern(pattern, "pattern cannot be rendered")
    })
}
