use anyhow::{anyhow, Context};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::{Mutex, OnceLock};

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Serializes the first install so concurrent callers don't race the global recorder.
static INSTALL: Mutex<()> = Mutex::new(());

/// Install the Prometheus recorder globally and store the handle.
///
/// Safe to call more than once, from any thread; later calls reuse the
/// installed recorder.
pub fn init_metrics() -> anyhow::Result<()> {
    // ---
    if HANDLE.get().is_some() {
        return Ok(());
    }

    let _guard = INSTALL
        .lock()
        .map_err(|_| anyhow!("Prometheus recorder install lock poisoned"))?;

    // Another caller may have finished installing while we waited
    if HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("failed to install Prometheus recorder")?;

    let _ = HANDLE.set(handle);
    Ok(())
}

/// Render the current metrics in Prometheus text format.
///
/// Empty until `init_metrics()` has run.
pub fn render_metrics() -> String {
    HANDLE.get().map(PrometheusHandle::render).unwrap_or_default()
}
