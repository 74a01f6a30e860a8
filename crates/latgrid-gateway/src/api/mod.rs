//! HTTP contracts and handlers for the metrics endpoint.
//!
//! Responsibilities:
//! - Validate the request body at the boundary (strict schema, defaulted
//!   threshold); the calculator never sees a malformed request.
//! - Select each requested region's observations (exact match) and run the
//!   metric computation in caller order.
//! - Regions with no observations map to the zero record, never omitted.

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use latgrid_core::error::ClientCode;
use latgrid_core::model::Dataset;
use latgrid_core::stats::{region_metrics, RegionMetrics};

use crate::app_state::AppState;

/// Breach threshold applied when the caller omits `threshold_ms`.
pub const DEFAULT_THRESHOLD_MS: f64 = 180.0;

/// POST `/` request body.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsRequest {
    /// Regions to report on.
    pub regions: Vec<String>,
    /// Breach threshold in ms.
    #[serde(default = "default_threshold_ms")]
    pub threshold_ms: f64,
}

fn default_threshold_ms() -> f64 {
    DEFAULT_THRESHOLD_MS
}

/// POST `/` response body: the per-region mapping, wrapped under `regions`.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub regions: BTreeMap<String, RegionMetrics>,
}

/// Run the calculator for every requested region, in caller order.
///
/// Duplicate region names collapse to one entry; unmatched regions still get
/// an entry (the zero record).
pub fn assemble_metrics(
    dataset: &Dataset,
    req: &MetricsRequest,
) -> BTreeMap<String, RegionMetrics> {
    let mut out = BTreeMap::new();
    for region in &req.regions {
        let subset = dataset.region_observations(region);
        out.insert(region.clone(), region_metrics(&subset, req.threshold_ms));
    }
    out
}

/// POST `/` handler.
pub async fn metrics_handler(
    State(app): State<AppState>,
    body: Result<Json<MetricsRequest>, JsonRejection>,
) -> Response {
    app.metrics().record_request();

    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => {
            app.metrics().record_validation_failure();
            return validation_error(rejection);
        }
    };

    for region in &req.regions {
        app.metrics().record_region_query(region);
    }

    let regions = assemble_metrics(app.dataset(), &req);
    Json(MetricsResponse { regions }).into_response()
}

/// GET `/` handler: static informational message, usable as a liveness probe.
pub async fn root_info() -> impl IntoResponse {
    Json(json!({
        "message": "POST a JSON body {\"regions\": [..], \"threshold_ms\": 180} to retrieve per-region latency metrics."
    }))
}

/// Stable JSON error body for rejected request bodies.
///
/// Status comes from the rejection (400 for syntax faults, 422 for schema
/// faults); the body shape is ours.
fn validation_error(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    let body = json!({
        "error": {
            "code": ClientCode::BadRequest.as_str(),
            "msg": rejection.body_text(),
        }
    });
    (status, Json(body)).into_response()
}
