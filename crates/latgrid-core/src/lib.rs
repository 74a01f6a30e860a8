//! latgrid core: dataset model, metric statistics, and error types.
//!
//! This crate defines the domain contracts shared by the gateway and any
//! tooling built on top of it: the observation/dataset model, the per-region
//! metric computation, and the error surface. It intentionally carries no
//! transport or runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `LatGridError`/`Result` so production
//! processes do not crash on malformed input or bad traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod stats;

/// Shared result type.
pub use error::{LatGridError, Result};
pub use model::{Dataset, Observation};
pub use stats::{region_metrics, RegionMetrics};
