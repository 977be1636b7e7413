//! Construction macros for fields and events.
//!
//! # Examples
//!
//! ```
//! use rust_log_formatter::prelude::*;
//! use rust_log_formatter::{event, fields};
//!
//! let fields = fields! { "user" => "alice", "attempt" => 3 };
//! assert_eq!(fields.len(), 2);
//!
//! let event = event!(LogLevel::Warn, "retrying {}", "upload"; "attempt" => 3);
//! assert_eq!(event.message, "retrying upload");
//! ```

/// Build a [`Fields`](crate::Fields) map from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use rust_log_formatter::fields;
///
/// let empty = fields!();
/// assert!(empty.is_empty());
///
/// let fields = fields! { "a" => 1, "b" => true };
/// assert_eq!(fields.get("b").map(|v| v.to_string()), Some("true".to_string()));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert($key, $value);
        )+
        fields
    }};
}

/// Build an [`Event`](crate::Event) with a formatted message and optional fields.
///
/// Fields follow the message arguments after a `;`.
///
/// # Examples
///
/// ```
/// use rust_log_formatter::{event, LogLevel};
///
/// let plain = event!(LogLevel::Info, "Server started");
/// assert!(plain.fields.is_empty());
///
/// let port = 8080;
/// let event = event!(LogLevel::Info, "listening on {}", port; "port" => port);
/// assert_eq!(event.message, "listening on 8080");
/// assert_eq!(event.fields.len(), 1);
/// ```
#[macro_export]
macro_rules! event {
    ($level:expr, $fmt:literal $(, $arg:expr)* ; $($key:expr => $value:expr),+ $(,)?) => {
        $crate::Event::new($level, format!($fmt $(, $arg)*))
            .with_fields($crate::fields!($($key => $value),+))
    };
    ($level:expr, $fmt:literal $(, $arg:expr)*) => {
        $crate::Event::new($level, format!($fmt $(, $arg)*))
    };
}
