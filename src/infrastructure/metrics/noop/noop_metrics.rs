use crate::domain::Metrics;

/// No-op metrics implementation for testing.
#[derive(Default)]
pub struct NoopMetrics;

impl NoopMetrics {
    pub fn new() -> Self {
        NoopMetrics
    }
}

impl Metrics for NoopMetrics {
    // ---
    fn render(&self) -> String {
        String::new()
    }
    fn record_response(&self, _: &'static str, _: u16) {}
}
