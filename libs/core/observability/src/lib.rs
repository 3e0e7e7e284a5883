//! Prometheus metrics for the advocates services.
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_handler, SearchMetrics};
//!
//! init_metrics();
//! SearchMetrics::record_search(true, 20, Duration::from_millis(4));
//!
//! let app = Router::new().route("/metrics", get(metrics_handler));
//! ```

pub mod middleware;
pub mod search;

pub use middleware::metrics_middleware;
pub use search::SearchMetrics;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::{info, warn};

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder once per process.
///
/// Returns `None` if another global recorder was installed first; metric
/// macros keep working against that recorder, only `/metrics` stays empty.
pub fn init_metrics() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE
        .get_or_try_init(|| {
            let handle = PrometheusBuilder::new().install_recorder()?;
            describe_metrics();
            info!("Prometheus metrics recorder initialized");
            Ok::<_, metrics_exporter_prometheus::BuildError>(handle)
        })
        .inspect_err(|e| warn!("Metrics recorder not installed: {}", e))
        .ok()
}

pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for `/metrics`.
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn describe_metrics() {
    use metrics::{describe_counter, describe_histogram};

    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP requests answered with 4xx or 5xx"
    );

    describe_counter!(
        "advocate_searches_total",
        "Advocate searches by whether a term was supplied"
    );
    describe_histogram!(
        "advocate_search_results",
        "Number of advocates returned per search page"
    );
    describe_histogram!(
        "advocate_search_duration_seconds",
        "Time spent in the repository per search"
    );
    describe_counter!(
        "advocate_seed_inserted_total",
        "Advocates inserted by seeding"
    );
}
