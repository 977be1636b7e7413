//! Formatter trait: the pluggable formatting strategy

use super::{error::Result, event::Event};

/// Turns one event into the bytes of one log line
///
/// Implementations never add line framing; the host appends `\n` (or
/// whatever its sink needs) before writing.
///
/// # Example
///
/// ```
/// use rust_log_formatter::core::{Event, Formatter, Result};
///
/// struct MessageOnly;
///
/// impl Formatter for MessageOnly {
///     fn format(&self, event: &Event) -> Result<Vec<u8>> {
///         Ok(event.message.clone().into_bytes())
///     }
///
///     fn name(&self) -> &str {
///         "message_only"
///     }
/// }
/// ```
pub trait Formatter: Send + Sync {
    fn format(&self, event: &Event) -> Result<Vec<u8>>;
    fn name(&self) -> &str;
}
