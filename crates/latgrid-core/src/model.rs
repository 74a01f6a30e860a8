//! Observation and dataset model.
//!
//! The dataset file is third-party input, so `Observation` tolerates unknown
//! extra fields instead of rejecting them; only the three fields below are
//! contractual.

use serde::Deserialize;

use crate::error::{LatGridError, Result};

/// One latency/uptime sample for a region.
#[derive(Debug, Clone, Deserialize)]
pub struct Observation {
    /// Grouping key, matched exactly (case-sensitive).
    pub region: String,
    /// Observed request latency in milliseconds.
    pub latency_ms: f64,
    /// Observed uptime percentage for the sampling window.
    pub uptime_pct: f64,
}

/// Ordered, immutable collection of observations.
///
/// Built once at startup and shared read-only for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    /// Empty dataset (used when no data file is present).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_observations(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Parse a JSON array of observation records.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let observations: Vec<Observation> = serde_json::from_str(s)
            .map_err(|e| LatGridError::Dataset(format!("invalid dataset json: {e}")))?;
        Ok(Self { observations })
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// All observations for `region`, exact match, original order preserved.
    pub fn region_observations<'a>(&'a self, region: &str) -> Vec<&'a Observation> {
        self.observations
            .iter()
            .filter(|o| o.region == region)
            .collect()
    }
}
