pub mod gigs;
pub mod health;
pub mod matches;
pub mod pagination;

/// Prometheus text exposition
pub async fn render_metrics() -> String {
    tm_metrics::render()
}
