//! Formatter configuration
//!
//! Holds the three user-facing strings. An empty string means "use the
//! built-in default"; defaults are resolved on every read and never written
//! back, so one configuration can be shared freely across threads.

use super::error::{FormatterError, Result};
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Default line template: `[INFO]: 2006-01-02T15:04:05Z07:00 - Log message key: value`
pub const DEFAULT_LINE_TEMPLATE: &str = "[%lvl%]: %time% - %msg% %fields%";

/// Default field template
pub const DEFAULT_FIELD_TEMPLATE: &str = "%k%: %v%";

/// Configuration for [`LineFormatter`](super::LineFormatter)
///
/// # Examples
///
/// ```
/// use rust_log_formatter::core::FormatterConfig;
///
/// let config = FormatterConfig::new()
///     .with_line_template("%time% %lvl% %msg% %fields%")
///     .with_timestamp_pattern("%H:%M:%S")
///     .with_field_template("%k%=%v%");
///
/// assert_eq!(config.effective_field_template(), "%k%=%v%");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Line template with `%time%`, `%msg%`, `%lvl%` and `%fields%` placeholders
    pub line_template: String,
    /// Timestamp pattern: a named format (`RFC3339`, `UNIX_MILLIS`, ...) or strftime
    pub timestamp_pattern: String,
    /// Per-field template with `%k%` and `%v%` placeholders
    pub field_template: String,
}

impl FormatterConfig {
    /// Create a configuration where every setting uses its default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_line_template(mut self, template: impl Into<String>) -> Self {
        self.line_template = template.into();
        self
    }

    #[must_use]
    pub fn with_timestamp_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_field_template(mut self, template: impl Into<String>) -> Self {
        self.field_template = template.into();
        self
    }

    /// Line template used for formatting
    pub fn effective_line_template(&self) -> &str {
        if self.line_template.is_empty() {
            DEFAULT_LINE_TEMPLATE
        } else {
            &self.line_template
        }
    }

    /// Timestamp format used for formatting
    ///
    /// Fails only when a custom strftime pattern is rejected.
    pub fn effective_timestamp_format(&self) -> Result<TimestampFormat> {
        if self.timestamp_pattern.is_empty() {
            Ok(TimestampFormat::default())
        } else {
            TimestampFormat::from_pattern(&self.timestamp_pattern)
        }
    }

    /// Field template used for formatting
    pub fn effective_field_template(&self) -> &str {
        if self.field_template.is_empty() {
            DEFAULT_FIELD_TEMPLATE
        } else {
            &self.field_template
        }
    }

    /// Check that the configuration can format events
    ///
    /// Templates are never rejected; only the timestamp pattern is checked.
    pub fn validate(&self) -> Result<()> {
        self.effective_timestamp_format().map(|_| ())
    }

    /// Load a configuration from JSON
    ///
    /// Missing keys fall back to defaults. The result is validated.
    ///
    /// ```
    /// use rust_log_formatter::core::FormatterConfig;
    ///
    /// let config = FormatterConfig::from_json(r#"{"line_template": "%lvl%|%msg%"}"#).unwrap();
    /// assert_eq!(config.effective_line_template(), "%lvl%|%msg%");
    /// assert_eq!(config.effective_field_template(), "%k%: %v%");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(FormatterError::from)
    }
}
