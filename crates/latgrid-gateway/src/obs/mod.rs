//! Lightweight in-process metrics.
//!
//! Counters are stored as atomics (a `DashMap` for the per-region counter)
//! and rendered by the `/metrics` handler. No metrics framework involved.

pub mod metrics;

pub use metrics::GatewayMetrics;
