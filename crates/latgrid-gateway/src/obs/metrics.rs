//! Minimal metrics registry for the gateway.
//!
//! Three counters: total requests, validation failures, and per-region query
//! counts keyed by the requested region name. Rendered in Prometheus text
//! exposition format.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

#[derive(Default)]
pub struct GatewayMetrics {
    requests_total: AtomicU64,
    validation_failures: AtomicU64,
    region_queries: DashMap<String, AtomicU64>,
}

impl GatewayMetrics {
    /// Count one POST `/` request (accepted or rejected).
    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one rejected request body.
    pub fn record_validation_failure(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one metrics query for `region`.
    pub fn record_region_query(&self, region: &str) {
        let counter = self
            .region_queries
            .entry(region.to_string())
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Render all counters in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "# TYPE latgrid_requests_total counter");
        let _ = writeln!(
            out,
            "latgrid_requests_total {}",
            self.requests_total.load(Ordering::Relaxed)
        );

        let _ = writeln!(out, "# TYPE latgrid_validation_failures_total counter");
        let _ = writeln!(
            out,
            "latgrid_validation_failures_total {}",
            self.validation_failures.load(Ordering::Relaxed)
        );

        let _ = writeln!(out, "# TYPE latgrid_region_queries_total counter");
        for r in self.region_queries.iter() {
            let _ = writeln!(
                out,
                "latgrid_region_queries_total{{region=\"{}\"}} {}",
                escape_label(r.key()),
                r.value().load(Ordering::Relaxed)
            );
        }

        out
    }
}
