//! Metrics for advocate search and seeding.

use metrics::{counter, histogram};
use std::time::Duration;

pub struct SearchMetrics;

impl SearchMetrics {
    /// Record one search page. `filtered` is true when a non-empty term was used.
    pub fn record_search(filtered: bool, results: usize, elapsed: Duration) {
        let kind = if filtered { "term" } else { "all" };

        counter!("advocate_searches_total", "kind" => kind).increment(1);
        histogram!("advocate_search_results", "kind" => kind).record(results as f64);
        histogram!("advocate_search_duration_seconds", "kind" => kind)
            .record(elapsed.as_secs_f64());

        tracing::debug!(
            kind,
            results,
            duration_ms = elapsed.as_millis() as u64,
            "Recorded search metrics"
        );
    }

    /// Record a seeding run. Re-seeding records zero.
    pub fn record_seed(inserted: usize) {
        counter!("advocate_seed_inserted_total").increment(inserted as u64);
    }
}
