//! Render metrics
//!
//! Counts how many records produced a line and how many were dropped by the
//! silent-drop policy of the renderer.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for renderer observability
///
/// # Example
///
/// ```
/// use nest_pretty_formatter::RenderMetrics;
///
/// let metrics = RenderMetrics::new();
///
/// metrics.record_dropped();
/// metrics.record_rendered();
///
/// assert_eq!(metrics.dropped_count(), 1);
/// assert_eq!(metrics.rendered_count(), 1);
/// ```
#[derive(Debug)]
pub struct RenderMetrics {
    /// Records that produced an output line
    rendered_count: AtomicU64,

    /// Records dropped because rendering failed
    dropped_count: AtomicU64,
}

impl RenderMetrics {
    pub const fn new() -> Self {
        Self {
            rendered_count: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn rendered_count(&self) -> u64 {
        self.rendered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    /// Record a rendered line, returning the previous count
    #[inline]
    pub fn record_rendered(&self) -> u64 {
        self.rendered_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a dropped record, returning the previous count
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Drop rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been rendered yet.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.rendered_count() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.rendered_count.store(0, Ordering::Relaxed);
        self.dropped_count.store(0, Ordering::Relaxed);
    }
}

impl Default for RenderMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RenderMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            rendered_count: AtomicU64::new(self.rendered_count()),
            dropped_count: AtomicU64::new(self.dropped_count()),
        }
    }
}
