use std::sync::OnceLock;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{info, warn};

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

pub const MATCH_REQUESTS_TOTAL: &str = "tm_match_requests_total";
pub const GIG_MATCH_REQUESTS_TOTAL: &str = "tm_gig_match_requests_total";
pub const MATCH_RESULTS_TOTAL: &str = "tm_match_results_total";

/// Install the Prometheus recorder as the global `metrics` recorder.
///
/// The returned handle renders the text exposition format; the API serves it on
/// `/metrics`. Repeated calls return the handle of the first successful install.
pub fn init_metrics() -> Option<&'static PrometheusHandle> {
    if let Some(existing) = PROMETHEUS_HANDLE.get() {
        return Some(existing);
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            let _ = PROMETHEUS_HANDLE.set(handle);
            info!("installed prometheus recorder");
            PROMETHEUS_HANDLE.get()
        }
        Err(err) => {
            warn!(error = %err, "failed to install prometheus recorder");
            PROMETHEUS_HANDLE.get()
        }
    }
}

/// Render the current metrics, or an empty body when no recorder is installed.
pub fn render() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let first = init_metrics().map(|h| h as *const PrometheusHandle);
        let second = init_metrics().map(|h| h as *const PrometheusHandle);
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
