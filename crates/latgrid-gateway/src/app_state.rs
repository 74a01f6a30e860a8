//! Shared application state for the latgrid gateway.
//!
//! The dataset is loaded once before the router is built and never written
//! afterwards, so handlers share it read-only through an `Arc` with no
//! locking.

use std::sync::Arc;

use latgrid_core::model::Dataset;

use crate::config::GatewayConfig;
use crate::obs::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    dataset: Dataset,
    metrics: GatewayMetrics,
}

impl AppState {
    pub fn new(cfg: GatewayConfig, dataset: Dataset) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                dataset,
                metrics: GatewayMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn dataset(&self) -> &Dataset {
        &self.inner.dataset
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }
}
