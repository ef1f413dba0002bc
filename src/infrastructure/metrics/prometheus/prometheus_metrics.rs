//! Prometheus metrics implementation.
//!
//! Provides a concrete implementation of the `Metrics` trait using the
//! Prometheus text format. It delegates to utility functions in sibling
//! modules (`counters.rs`, `recorder.rs`) which talk to the global `metrics`
//! crate registry.

use crate::domain::Metrics;

/// Prometheus-based metrics implementation.
///
/// Empty because counters are registered on the global `metrics` registry
/// and rendered through the handle stored in `recorder.rs`.
pub struct PrometheusMetrics {
    // Empty - uses global metrics registry pattern
}

impl PrometheusMetrics {
    pub fn new() -> Self {
        tracing::info!("Creating Prometheus metrics");
        PrometheusMetrics {}
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        super::render_metrics()
    }

    fn record_response(&self, intent: &'static str, status: u16) {
        tracing::trace!(intent, status, "Recording envelope response");
        super::increment_response(intent, status);

        if status >= 400 {
            super::increment_error(status);
        }
    }
}
