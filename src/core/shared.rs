//! Reconfigurable formatter handle
//!
//! Hosts that allow runtime reconfiguration keep one `SharedFormatter` and
//! swap its configuration in place. Formatting never holds the lock: it
//! clones the current `Arc<LineFormatter>` and releases the read guard first.

use super::config::FormatterConfig;
use super::error::Result;
use super::event::Event;
use super::formatter::Formatter;
use super::line_formatter::LineFormatter;
use super::metrics::FormatterMetrics;
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe, cheaply cloneable formatter whose configuration can change
///
/// # Example
///
/// ```
/// use rust_log_formatter::{Event, FormatterConfig, LogLevel, SharedFormatter};
///
/// let formatter = SharedFormatter::new(FormatterConfig::new().with_line_template("%msg%"));
/// let event = Event::new(LogLevel::Info, "ready");
/// assert_eq!(formatter.format_line(&event).unwrap(), "ready");
///
/// formatter.reconfigure(FormatterConfig::new().with_line_template("%lvl% %msg%")).unwrap();
/// assert_eq!(formatter.format_line(&event).unwrap(), "INFO ready");
/// ```
#[derive(Debug, Clone)]
pub struct SharedFormatter {
    current: Arc<RwLock<Arc<LineFormatter>>>,
    metrics: Arc<FormatterMetrics>,
}

impl SharedFormatter {
    #[must_use]
    pub fn new(config: FormatterConfig) -> Self {
        let metrics = Arc::new(FormatterMetrics::new());
        let formatter = LineFormatter::with_metrics(config, Arc::clone(&metrics));
        Self {
            current: Arc::new(RwLock::new(Arc::new(formatter))),
            metrics,
        }
    }

    /// Replace the configuration used by subsequent calls
    ///
    /// The new configuration is validated first; on error the current one
    /// stays in place. Metrics carry over.
    pub fn reconfigure(&self, config: FormatterConfig) -> Result<()> {
        config.validate()?;
        let formatter = LineFormatter::with_metrics(config, Arc::clone(&self.metrics));
        *self.current.write() = Arc::new(formatter);
        Ok(())
    }

    /// Snapshot of the active configuration
    pub fn config(&self) -> FormatterConfig {
        self.current.read().config().clone()
    }

    /// The formatter that the next call will use
    pub fn current(&self) -> Arc<LineFormatter> {
        Arc::clone(&*self.current.read())
    }

    pub fn metrics(&self) -> &Arc<FormatterMetrics> {
        &self.metrics
    }

    pub fn format_line(&self, event: &Event) -> Result<String> {
        self.current().format_line(event)
    }
}

impl Default for SharedFormatter {
    fn default() -> Self {
        Self::new(FormatterConfig::default())
    }
}

impl Formatter for SharedFormatter {
    fn format(&self, event: &Event) -> Result<Vec<u8>> {
        self.format_line(event).map(String::into_bytes)
    }

    fn name(&self) -> &str {
        "shared_line"
    }
}
