//! # Rust Log Formatter
//!
//! A template-driven line formatter that plugs into an existing logging
//! pipeline as its formatting strategy.
//!
//! ## Features
//!
//! - **Templates**: `%time%`, `%msg%`, `%lvl%` and `%fields%` placeholders in
//!   the line, `%k%` and `%v%` in each field
//! - **Defaults**: empty settings fall back to built-in templates and RFC 3339
//! - **Pluggable**: implements the [`Formatter`] trait for host frameworks
//! - **Thread Safe**: formatting never mutates configuration
//!
//! ```
//! use rust_log_formatter::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! let formatter = LineFormatter::new(FormatterConfig::default());
//! let event = Event::new(LogLevel::Info, "login")
//!     .with_timestamp(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
//!     .with_field("user", "alice");
//!
//! assert_eq!(
//!     formatter.format_line(&event).unwrap(),
//!     "[INFO]: 2023-01-01T00:00:00Z - login user: alice"
//! );
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        format_event, Event, FieldValue, Fields, Formatter, FormatterConfig, FormatterError,
        FormatterMetrics, LineFormatter, LogLevel, Result, SharedFormatter, TimestampFormat,
    };
}

pub use crate::core::{
    format_event, Event, FieldValue, Fields, Formatter, FormatterConfig, FormatterError,
    FormatterMetrics, LineFormatter, LogLevel, Result, SharedFormatter, TimestampFormat,
    DEFAULT_FIELD_TEMPLATE, DEFAULT_LINE_TEMPLATE, ERROR_PLACEHOLDER,
};
