// src/infrastructure/metrics/noop/mod.rs
mod noop_metrics;

pub use noop_metrics::NoopMetrics;
use std::sync::Arc;

/// Creates a new no-op metrics implementation.
///
/// All response events are ignored and `render()` returns an empty string.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    Ok(Arc::new(NoopMetrics::new()))
}
