//! Dashboard metrics endpoint.

use std::time::Instant;

use axum::extract::{Query, State};
use axum::response::Response;
use chrono::Utc;
use serde::Deserialize;

use salespulse_core::{compute_dashboard_metrics, Timeframe};

use crate::app_state::AppState;
use crate::response::{self, ApiError};

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    #[serde(default)]
    pub timeframe: Option<String>,
}

/// GET /api/v1/dashboard/metrics?timeframe=week|month|quarter
///
/// Recomputes the snapshot from the current lead collection on every call;
/// "now" is captured once so all derived fields agree.
pub async fn metrics(
    State(state): State<AppState>,
    Query(q): Query<MetricsQuery>,
) -> Result<Response, ApiError> {
    state.metrics().http_requests.inc(&[("route", "dashboard_metrics")]);

    let timeframe = match q.timeframe.as_deref() {
        Some(s) => s.parse::<Timeframe>()?,
        None => state.cfg().dashboard.default_timeframe,
    };

    let leads = state.leads().snapshot();
    let started = Instant::now();
    let snapshot = compute_dashboard_metrics(&leads, timeframe, Utc::now());
    state
        .metrics()
        .recompute_duration
        .observe(&[("timeframe", timeframe.as_str())], started.elapsed());

    Ok(response::ok(snapshot))
}
