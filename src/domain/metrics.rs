use std::sync::Arc;

/// Abstraction for response metrics (counters per intent and status).
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in Prometheus text format.
    fn render(&self) -> String;

    /// Record one envelope written for `intent` with HTTP `status`.
    fn record_response(&self, intent: &'static str, status: u16);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
