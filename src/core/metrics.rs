//! Formatter metrics for observability
//!
//! Counters for lines produced, fields rendered, and the fallbacks taken
//! when a value or timestamp could not be rendered.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for formatter observability
///
/// # Example
///
/// ```
/// use rust_log_formatter::FormatterMetrics;
///
/// let metrics = FormatterMetrics::new();
///
/// metrics.record_line();
/// metrics.record_stringify_fallback();
///
/// assert_eq!(metrics.lines_formatted(), 1);
/// assert_eq!(metrics.stringify_fallbacks(), 1);
/// ```
#[derive(Debug)]
pub struct FormatterMetrics {
    /// Lines successfully formatted
    lines_formatted: AtomicU64,

    /// Field pairs rendered into `%fields%`
    fields_rendered: AtomicU64,

    /// Field values replaced by the error placeholder
    stringify_fallbacks: AtomicU64,

    /// Timestamps replaced by the error placeholder
    timestamp_fallbacks: AtomicU64,
}

impl FormatterMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_formatted: AtomicU64::new(0),
            fields_rendered: AtomicU64::new(0),
            stringify_fallbacks: AtomicU64::new(0),
            timestamp_fallbacks: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_formatted(&self) -> u64 {
        self.lines_formatted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn fields_rendered(&self) -> u64 {
        self.fields_rendered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn stringify_fallbacks(&self) -> u64 {
        self.stringify_fallbacks.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn timestamp_fallbacks(&self) -> u64 {
        self.timestamp_fallbacks.load(Ordering::Relaxed)
    }

    /// Record a formatted line
    #[inline]
    pub fn record_line(&self) -> u64 {
        self.lines_formatted.fetch_add(1, Ordering::Relaxed)
    }

    /// Record `count` rendered field pairs
    #[inline]
    pub fn record_fields(&self, count: u64) -> u64 {
        self.fields_rendered.fetch_add(count, Ordering::Relaxed)
    }

    /// Record a value replaced by the placeholder
    #[inline]
    pub fn record_stringify_fallback(&self) -> u64 {
        self.stringify_fallbacks.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a timestamp replaced by the placeholder
    #[inline]
    pub fn record_timestamp_fallback(&self) -> u64 {
        self.timestamp_fallbacks.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.lines_formatted.store(0, Ordering::Relaxed);
        self.fields_rendered.store(0, Ordering::Relaxed);
        self.stringify_fallbacks.store(0, Ordering::Relaxed);
        self.timestamp_fallbacks.store(0, Ordering::Relaxed);
    }
}

impl Default for FormatterMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FormatterMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_formatted: AtomicU64::new(self.lines_formatted()),
            fields_rendered: AtomicU64::new(self.fields_rendered()),
            stringify_fallbacks: AtomicU64::new(self.stringify_fallbacks()),
            timestamp_fallbacks: AtomicU64::new(self.timestamp_fallbacks()),
        }
    }
}
