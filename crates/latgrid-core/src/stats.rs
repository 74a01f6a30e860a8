//! Per-region metric statistics.
//!
//! Pure functions over one region's observations. Rounding is part of the
//! contract: latency figures carry 2 decimal places, uptime carries 3.

use serde::Serialize;

use crate::model::Observation;

/// Computed metrics for one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionMetrics {
    /// Mean latency in ms, 2 decimal places.
    pub avg_latency: f64,
    /// Higher-rank 95th percentile latency in ms, 2 decimal places.
    pub p95_latency: f64,
    /// Mean uptime percentage, 3 decimal places.
    pub avg_uptime: f64,
    /// Observations with `latency_ms >= threshold` (inclusive).
    pub breaches: u64,
}

impl RegionMetrics {
    /// Fixed result for a region with no observations.
    pub const ZERO: RegionMetrics = RegionMetrics {
        avg_latency: 0.0,
        p95_latency: 0.0,
        avg_uptime: 0.0,
        breaches: 0,
    };
}

/// Compute metrics over one region's observations.
///
/// An empty subset short-circuits to [`RegionMetrics::ZERO`]; statistics over
/// zero elements are never attempted.
pub fn region_metrics(observations: &[&Observation], threshold_ms: f64) -> RegionMetrics {
    if observations.is_empty() {
        return RegionMetrics::ZERO;
    }

    let latencies: Vec<f64> = observations.iter().map(|o| o.latency_ms).collect();
    let uptimes: Vec<f64> = observations.iter().map(|o| o.uptime_pct).collect();

    let breaches = latencies.iter().filter(|&&l| l >= threshold_ms).count() as u64;

    RegionMetrics {
        avg_latency: round_to(mean(&latencies), 2),
        p95_latency: round_to(percentile_higher(&latencies, 95.0), 2),
        avg_uptime: round_to(mean(&uptimes), 3),
        breaches,
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Nearest-rank percentile, rounding the rank up: the smallest observed value
/// such that at least `pct`% of all values are <= it. No interpolation.
fn percentile_higher(values: &[f64], pct: f64) -> f64 {
    let mut ordered = values.to_vec();
    ordered.sort_by(|a, b| a.total_cmp(b));
    let rank = ((pct / 100.0) * ordered.len() as f64).ceil() as usize;
    let idx = rank.clamp(1, ordered.len()) - 1;
    ordered[idx]
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
