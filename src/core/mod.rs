//! Core formatter types and traits

pub mod config;
pub mod error;
pub mod event;
pub mod fields;
pub mod formatter;
pub mod line_formatter;
pub mod log_level;
pub mod metrics;
pub mod shared;
pub mod template;
pub mod timestamp;

pub use config::{FormatterConfig, DEFAULT_FIELD_TEMPLATE, DEFAULT_LINE_TEMPLATE};
pub use error::{FormatterError, Result};
pub use event::Event;
pub use fields::{FieldValue, Fields};
pub use formatter::Formatter;
pub use line_formatter::{format_event, LineFormatter, ERROR_PLACEHOLDER};
pub use log_level::LogLevel;
pub use metrics::FormatterMetrics;
pub use shared::SharedFormatter;
pub use timestamp::TimestampFormat;
