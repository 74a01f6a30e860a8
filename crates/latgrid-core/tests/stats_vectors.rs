//! Metric computation vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use latgrid_core::model::{Dataset, Observation};
use latgrid_core::stats::{region_metrics, RegionMetrics};

fn load(name: &str) -> String {
    fs::read_to_string(format!("tests/vectors/{name}")).unwrap()
}

fn obs(region: &str, latency_ms: f64, uptime_pct: f64) -> Observation {
    let raw = format!(
        r#"{{"region":"{region}","latency_ms":{latency_ms},"uptime_pct":{uptime_pct}}}"#
    );
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn parse_dataset_vector() {
    let ds = Dataset::from_json_str(&load("latency_small.json")).unwrap();
    assert_eq!(ds.len(), 5);

    // Selection is exact-match and keeps dataset order.
    let us_east = ds.region_observations("us-east");
    let latencies: Vec<f64> = us_east.iter().map(|o| o.latency_ms).collect();
    assert_eq!(latencies, vec![100.0, 160.0, 200.0]);

    // Extra fields in records are tolerated.
    let apac = ds.region_observations("apac");
    assert_eq!(apac.len(), 2);
}

#[test]
fn region_match_is_case_sensitive() {
    let ds = Dataset::from_json_str(&load("latency_small.json")).unwrap();
    assert!(ds.region_observations("US-EAST").is_empty());
    assert!(ds.region_observations("us-east ").is_empty());
}

#[test]
fn empty_subset_is_zero_record() {
    let m = region_metrics(&[], 180.0);
    assert_eq!(m, RegionMetrics::ZERO);
    assert_eq!(m.avg_latency, 0.0);
    assert_eq!(m.p95_latency, 0.0);
    assert_eq!(m.avg_uptime, 0.0);
    assert_eq!(m.breaches, 0);
}

#[test]
fn p95_higher_rank_worked_example() {
    // [100, 110, 120, 200, 500]: rank = ceil(0.95 * 5) = 5 -> 500.
    let subset = [
        obs("r", 100.0, 99.0),
        obs("r", 110.0, 99.0),
        obs("r", 120.0, 99.0),
        obs("r", 200.0, 99.0),
        obs("r", 500.0, 99.0),
    ];
    let refs: Vec<&Observation> = subset.iter().collect();
    let m = region_metrics(&refs, 180.0);
    assert_eq!(m.p95_latency, 500.0);
}

#[test]
fn p95_is_an_observed_value_not_interpolated() {
    let subset = [obs("r", 100.0, 99.0), obs("r", 300.0, 99.0)];
    let refs: Vec<&Observation> = subset.iter().collect();
    // rank = ceil(0.95 * 2) = 2 -> the larger of the two, never a midpoint.
    assert_eq!(region_metrics(&refs, 180.0).p95_latency, 300.0);

    let single = [obs("r", 42.5, 99.0)];
    let refs: Vec<&Observation> = single.iter().collect();
    assert_eq!(region_metrics(&refs, 180.0).p95_latency, 42.5);
}

#[test]
fn breaches_inclusive_threshold() {
    let subset = [
        obs("r", 100.0, 99.0),
        obs("r", 150.0, 99.0),
        obs("r", 180.0, 99.0),
        obs("r", 240.0, 99.0),
    ];
    let refs: Vec<&Observation> = subset.iter().collect();

    // latency_ms == threshold counts as a breach.
    assert_eq!(region_metrics(&refs, 180.0).breaches, 2);
    // Nothing at or above a high threshold.
    assert_eq!(region_metrics(&refs, 1000.0).breaches, 0);
    // Everything at or above a low threshold, bounded by subset size.
    assert_eq!(region_metrics(&refs, 0.0).breaches, 4);
}

#[test]
fn rounding_places() {
    let subset = [
        obs("r", 100.004, 99.1234),
        obs("r", 100.004, 99.1236),
        obs("r", 100.006, 99.1234),
    ];
    let refs: Vec<&Observation> = subset.iter().collect();
    let m = region_metrics(&refs, 180.0);

    // avg = 100.004666... -> 100.0 at 2 places.
    assert_eq!(m.avg_latency, 100.0);
    // p95 picks the raw 100.006 observation, then rounds to 2 places.
    assert_eq!(m.p95_latency, 100.01);
    // uptime mean = 99.123466... -> 3 places.
    assert_eq!(m.avg_uptime, 99.123);
}

#[test]
fn dataset_vector_end_to_end_metrics() {
    let ds = Dataset::from_json_str(&load("latency_small.json")).unwrap();

    let us_east = ds.region_observations("us-east");
    let m = region_metrics(&us_east, 150.0);
    assert_eq!(m.avg_latency, 153.33);
    assert_eq!(m.p95_latency, 200.0);
    assert_eq!(m.avg_uptime, 99.375);
    assert_eq!(m.breaches, 2);

    // Unknown region -> zero record, not an error.
    let nowhere = ds.region_observations("eu-west");
    assert_eq!(region_metrics(&nowhere, 150.0), RegionMetrics::ZERO);
}

#[test]
fn corrupt_dataset_is_an_error() {
    let err = Dataset::from_json_str("{\"not\": \"an array\"}").unwrap_err();
    assert_eq!(err.client_code().as_str(), "INTERNAL");

    let err = Dataset::from_json_str("[{\"region\": 7}]").unwrap_err();
    assert!(err.to_string().contains("dataset"));
}
