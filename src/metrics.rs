use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics() -> PrometheusHandle {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // Pre-register counters so they appear even before the first increment.
    counter!("stats_recomputes_total").absolute(0);
    counter!("leaderboard_calculations_total").absolute(0);
    counter!("feed_events_total").absolute(0);

    // Pre-register gauges at zero.
    gauge!("ranked_users").set(0.0);

    handle
}
