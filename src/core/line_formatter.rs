//! Template-driven line formatter
//!
//! Substitution order is fixed: `%time%`, `%msg%`, `%lvl%`, then `%fields%`.
//! Each step works on the output of the previous one and replaces only the
//! first occurrence of its token, so text injected by an earlier step (a
//! message containing `%lvl%`, say) is visible to the later ones.

use super::config::FormatterConfig;
use super::error::Result;
use super::event::Event;
use super::fields::{FieldValue, Fields};
use super::formatter::Formatter;
use super::metrics::FormatterMetrics;
use super::template::{
    replace_first, FIELDS_TOKEN, KEY_TOKEN, LEVEL_TOKEN, MSG_TOKEN, TIME_TOKEN, VALUE_TOKEN,
};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Substituted for a timestamp or field value that cannot be rendered
pub const ERROR_PLACEHOLDER: &str = "<error>";

/// Format one event with `config`
///
/// Stateless entry point; `config` is only read. A timestamp or field value
/// that cannot be rendered becomes [`ERROR_PLACEHOLDER`] and the rest of the
/// line is still produced.
///
/// ```
/// use rust_log_formatter::{format_event, Event, FormatterConfig, LogLevel};
/// use chrono::{TimeZone, Utc};
///
/// let event = Event::new(LogLevel::Info, "hello")
///     .with_timestamp(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
///
/// let line = format_event(&FormatterConfig::default(), &event).unwrap();
/// assert_eq!(line, "[INFO]: 2023-01-01T00:00:00Z - hello ");
/// ```
pub fn format_event(config: &FormatterConfig, event: &Event) -> Result<String> {
    Ok(render_line(config, event, None))
}

/// Formatter driven by a [`FormatterConfig`]
///
/// Immutable once built; share it across threads with `Arc`.
#[derive(Debug, Clone)]
pub struct LineFormatter {
    config: FormatterConfig,
    metrics: Arc<FormatterMetrics>,
}

impl LineFormatter {
    #[must_use]
    pub fn new(config: FormatterConfig) -> Self {
        Self::with_metrics(config, Arc::new(FormatterMetrics::new()))
    }

    /// Build a formatter, rejecting a timestamp pattern that cannot render
    pub fn try_new(config: FormatterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Build a formatter that reports into existing metrics
    #[must_use]
    pub fn with_metrics(config: FormatterConfig, metrics: Arc<FormatterMetrics>) -> Self {
        Self { config, metrics }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Arc<FormatterMetrics> {
        &self.metrics
    }

    /// Format an event into a line without framing
    pub fn format_line(&self, event: &Event) -> Result<String> {
        let line = render_line(&self.config, event, Some(self.metrics.as_ref()));
        self.metrics.record_line();
        Ok(line)
    }

    /// Render only the `%fields%` segment for `fields`
    pub fn format_fields(&self, fields: &Fields) -> String {
        render_fields(
            self.config.effective_field_template(),
            fields,
            Some(self.metrics.as_ref()),
        )
    }
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new(FormatterConfig::default())
    }
}

impl Formatter for LineFormatter {
    fn format(&self, event: &Event) -> Result<Vec<u8>> {
        self.format_line(event).map(String::into_bytes)
    }

    fn name(&self) -> &str {
        "line"
    }
}

fn render_line(
    config: &FormatterConfig,
    event: &Event,
    metrics: Option<&FormatterMetrics>,
) -> String {
    let template = config.effective_line_template();
    let output = if template.contains(TIME_TOKEN) {
        replace_first(template, TIME_TOKEN, &render_timestamp(config, event, metrics))
    } else {
        template.to_string()
    };
    let output = replace_first(&output, MSG_TOKEN, &event.message);

    let level = event.level.as_str().to_uppercase();
    let output = replace_first(&output, LEVEL_TOKEN, &level);

    let fields = render_fields(config.effective_field_template(), &event.fields, metrics);
    replace_first(&output, FIELDS_TOKEN, &fields)
}

fn render_timestamp(
    config: &FormatterConfig,
    event: &Event,
    metrics: Option<&FormatterMetrics>,
) -> String {
    let rendered = config
        .effective_timestamp_format()
        .and_then(|format| format.format(&event.timestamp));

    match rendered {
        Ok(timestamp) => timestamp,
        Err(e) => {
            eprintln!("[FORMATTER WARN] {}; using {}", e, ERROR_PLACEHOLDER);
            if let Some(metrics) = metrics {
                metrics.record_timestamp_fallback();
            }
            ERROR_PLACEHOLDER.to_string()
        }
    }
}

fn render_fields(template: &str, fields: &Fields, metrics: Option<&FormatterMetrics>) -> String {
    let mut rendered = String::new();
    for (key, value) in fields {
        if !rendered.is_empty() {
            rendered.push(' ');
        }
        // %k% first, then %v% in that result; the template itself is never modified
        let pair = replace_first(template, KEY_TOKEN, key);
        let pair = replace_first(&pair, VALUE_TOKEN, &stringify_value(key, value, metrics));
        rendered.push_str(&pair);
    }

    if let Some(metrics) = metrics {
        metrics.record_fields(fields.len() as u64);
    }
    rendered
}

fn stringify_value(key: &str, value: &FieldValue, metrics: Option<&FormatterMetrics>) -> String {
    let mut out = String::new();
    let result = catch_unwind(AssertUnwindSafe(|| value.stringify(&mut out)));

    match result {
        Ok(Ok(())) => out,
        Ok(Err(_)) | Err(_) => {
            eprintln!(
                "[FORMATTER WARN] Field '{}' could not be stringified; using {}",
                key, ERROR_PLACEHOLDER
            );
            if let Some(metrics) = metrics {
                metrics.record_stringify_fallback();
            }
            ERROR_PLACEHOLDER.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};
    use std::fmt;

    fn new_year() -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap().fixed_offset()
    }

    fn event(level: LogLevel, message: &str) -> Event {
        Event::new(level, message).with_timestamp(new_year())
    }

    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    struct Exploding;

    impl fmt::Display for Exploding {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            panic!("display exploded")
        }
    }

    #[test]
    fn test_defaults_end_to_end() {
        let line = format_event(&FormatterConfig::default(), &event(LogLevel::Info, "hello")).unwrap();
        assert_eq!(line, "[INFO]: 2023-01-01T00:00:00Z - hello ");
    }

    #[test]
    fn test_default_fields_rendering() {
        let e = event(LogLevel::Info, "login").with_field("user", "alice");
        let line = format_event(&FormatterConfig::default(), &e).unwrap();
        assert_eq!(line, "[INFO]: 2023-01-01T00:00:00Z - login user: alice");
    }

    #[test]
    fn test_fields_joined_by_single_space_in_key_order() {
        let e = event(LogLevel::Info, "m").with_field("b", 2).with_field("a", 1);
        let line = format_event(&FormatterConfig::new().with_line_template("%fields%"), &e).unwrap();
        assert_eq!(line, "a: 1 b: 2");
    }

    #[test]
    fn test_custom_line_template() {
        let config = FormatterConfig::new().with_line_template("%lvl%|%msg%");
        let line = format_event(&config, &event(LogLevel::Warn, "disk low")).unwrap();
        assert_eq!(line, "WARN|disk low");
    }

    #[test]
    fn test_repeated_token_only_first_replaced() {
        let config = FormatterConfig::new().with_line_template("%msg% %msg%");
        let line = format_event(&config, &event(LogLevel::Info, "hi")).unwrap();
        assert_eq!(line, "hi %msg%");
    }

    #[test]
    fn test_template_without_tokens() {
        let config = FormatterConfig::new().with_line_template("static text");
        let e = event(LogLevel::Error, "ignored").with_field("k", "v");
        assert_eq!(format_event(&config, &e).unwrap(), "static text");
    }

    #[test]
    fn test_message_inserted_before_level_is_visible_to_level_step() {
        let config = FormatterConfig::new().with_line_template("%msg% %lvl%");
        let line = format_event(&config, &event(LogLevel::Info, "a %lvl% b")).unwrap();
        assert_eq!(line, "a INFO b %lvl%");
    }

    #[test]
    fn test_time_token_in_message_stays_literal() {
        let config = FormatterConfig::new().with_line_template("%msg% %time%");
        let line = format_event(&config, &event(LogLevel::Info, "at %time%")).unwrap();
        assert_eq!(line, "at %time% 2023-01-01T00:00:00Z");
    }

    #[test]
    fn test_key_containing_value_token() {
        let e = event(LogLevel::Info, "m").with_field("x%v%", 1);
        let config = FormatterConfig::new().with_line_template("%fields%");
        assert_eq!(format_event(&config, &e).unwrap(), "x1: %v%");
    }

    #[test]
    fn test_value_containing_tokens_not_resubstituted() {
        let e = event(LogLevel::Info, "m")
            .with_field("a", "%k% and %v%")
            .with_field("b", "plain");
        let config = FormatterConfig::new().with_line_template("%fields%");
        assert_eq!(format_event(&config, &e).unwrap(), "a: %k% and %v% b: plain");
    }

    #[test]
    fn test_custom_field_template_applies_per_pair() {
        let e = event(LogLevel::Info, "m").with_field("a", 1).with_field("b", true);
        let config = FormatterConfig::new()
            .with_line_template("%fields%")
            .with_field_template("%k%=%v%");
        assert_eq!(format_event(&config, &e).unwrap(), "a=1 b=true");
    }

    #[test]
    fn test_empty_rendered_pair_skips_separator() {
        // A pair that renders empty leaves the accumulator empty
        let e = event(LogLevel::Info, "m").with_field("a", "").with_field("b", "x");
        let config = FormatterConfig::new()
            .with_line_template("[%fields%]")
            .with_field_template("%v%");
        assert_eq!(format_event(&config, &e).unwrap(), "[x]");
    }

    #[test]
    fn test_composite_values() {
        let e = event(LogLevel::Debug, "m")
            .with_field("ids", vec![1, 2])
            .with_field("none", Option::<i32>::None);
        let config = FormatterConfig::new().with_line_template("%fields%");
        assert_eq!(format_event(&config, &e).unwrap(), "ids: [1 2] none: <nil>");
    }

    #[test]
    fn test_custom_timestamp_pattern() {
        let config = FormatterConfig::new()
            .with_line_template("%time% %msg%")
            .with_timestamp_pattern("%Y/%m/%d");
        let line = format_event(&config, &event(LogLevel::Info, "x")).unwrap();
        assert_eq!(line, "2023/01/01 x");
    }

    #[test]
    fn test_unrenderable_timestamp_uses_placeholder() {
        let config = FormatterConfig::new().with_timestamp_pattern("%#z");
        assert!(LineFormatter::try_new(config.clone()).is_err());

        let formatter = LineFormatter::new(config);
        let line = formatter.format_line(&event(LogLevel::Info, "x")).unwrap();

        assert_eq!(line, "[INFO]: <error> - x ");
        assert_eq!(formatter.metrics().timestamp_fallbacks(), 1);
        assert_eq!(formatter.metrics().lines_formatted(), 1);
    }

    #[test]
    fn test_bad_pattern_ignored_without_time_token() {
        let config = FormatterConfig::new()
            .with_line_template("%lvl%|%msg%")
            .with_timestamp_pattern("100%");
        let formatter = LineFormatter::new(config);

        assert_eq!(formatter.format_line(&event(LogLevel::Info, "hello")).unwrap(), "INFO|hello");
        assert_eq!(formatter.metrics().timestamp_fallbacks(), 0);
    }

    #[test]
    fn test_failing_value_uses_placeholder() {
        let e = event(LogLevel::Info, "m")
            .with_field("bad", FieldValue::custom(Broken))
            .with_field("good", 7);
        let formatter = LineFormatter::new(FormatterConfig::new().with_line_template("%fields%"));

        assert_eq!(formatter.format_line(&e).unwrap(), "bad: <error> good: 7");
        assert_eq!(formatter.metrics().stringify_fallbacks(), 1);
    }

    #[test]
    fn test_panicking_value_uses_placeholder() {
        let e = event(LogLevel::Info, "m").with_field("boom", FieldValue::custom(Exploding));
        let formatter = LineFormatter::new(FormatterConfig::new().with_line_template("%fields%"));

        assert_eq!(formatter.format_line(&e).unwrap(), "boom: <error>");
        assert_eq!(formatter.metrics().stringify_fallbacks(), 1);
    }

    #[test]
    fn test_config_not_mutated_by_formatting() {
        let formatter = LineFormatter::default();
        let e = event(LogLevel::Info, "x").with_field("k", "v");
        formatter.format_line(&e).unwrap();

        assert!(formatter.config().field_template.is_empty());
        assert_eq!(formatter.config(), &FormatterConfig::default());
    }

    #[test]
    fn test_formatter_trait_returns_bytes_without_newline() {
        let formatter: Box<dyn Formatter> = Box::new(LineFormatter::default());
        let bytes = formatter.format(&event(LogLevel::Error, "oops")).unwrap();

        assert_eq!(bytes, b"[ERROR]: 2023-01-01T00:00:00Z - oops ".to_vec());
        assert_eq!(formatter.name(), "line");
    }

    #[test]
    fn test_all_levels_uppercased() {
        let config = FormatterConfig::new().with_line_template("%lvl%");
        for level in LogLevel::ALL {
            let line = format_event(&config, &event(level, "x")).unwrap();
            assert_eq!(line, level.as_str().to_uppercase());
        }
    }

    #[test]
    fn test_metrics_track_lines_and_fields() {
        let formatter = LineFormatter::default();
        let e = event(LogLevel::Info, "x").with_field("a", 1).with_field("b", 2);
        formatter.format_line(&e).unwrap();
        formatter.format_line(&event(LogLevel::Info, "y")).unwrap();

        assert_eq!(formatter.metrics().lines_formatted(), 2);
        assert_eq!(formatter.metrics().fields_rendered(), 2);
    }

    #[test]
    fn test_format_fields_segment() {
        let formatter = LineFormatter::new(FormatterConfig::new().with_field_template("<%k%|%v%>"));
        let fields = Fields::new().with_field("a", 1).with_field("b", "two");
        assert_eq!(formatter.format_fields(&fields), "<a|1> <b|two>");
        assert_eq!(formatter.format_fields(&Fields::new()), "");
    }
}
