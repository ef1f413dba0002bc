mod counters;
mod prometheus_metrics;
mod recorder;

pub use prometheus_metrics::PrometheusMetrics;
use std::sync::Arc;

// Re-export utilities for internal use within this module
pub(crate) use counters::{increment_error, increment_response};
pub(crate) use recorder::{init_metrics, render_metrics};

/// Creates a new Prometheus metrics implementation.
///
/// Installs the global recorder on first use; responses are then counted
/// and can be scraped through `/metrics`.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    tracing::info!("Initializing Prometheus metrics");
    init_metrics()?;

    Ok(Arc::new(PrometheusMetrics::new()))
}
