//! Lead collection endpoints.

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use salespulse_core::{Lead, SalesPulseError};

use crate::app_state::AppState;
use crate::response::{self, ApiError};

/// GET /api/v1/leads
pub async fn list(State(state): State<AppState>) -> Response {
    state.metrics().http_requests.inc(&[("route", "leads_list")]);
    response::ok(state.leads().snapshot())
}

/// PUT /api/v1/leads
///
/// Replaces the working set wholesale. The upstream data layer owns lead
/// lifecycle; this service only validates the basics it depends on
/// (collection size, finite non-negative values).
pub async fn replace(
    State(state): State<AppState>,
    Json(leads): Json<Vec<Lead>>,
) -> Result<Response, ApiError> {
    state.metrics().http_requests.inc(&[("route", "leads_replace")]);

    let max_leads = state.cfg().dashboard.max_leads;
    if leads.len() > max_leads {
        state
            .metrics()
            .lead_replacements
            .inc(&[("outcome", "rejected")]);
        tracing::warn!(count = leads.len(), max_leads, "lead collection rejected: too large");
        return Err(SalesPulseError::BadRequest(format!(
            "lead collection exceeds dashboard.max_leads ({max_leads})"
        ))
        .into());
    }

    if let Some(bad) = leads
        .iter()
        .find(|l| !l.value.is_finite() || l.value < 0.0)
    {
        state
            .metrics()
            .lead_replacements
            .inc(&[("outcome", "rejected")]);
        return Err(SalesPulseError::BadRequest(format!(
            "lead {} has a negative or non-finite value",
            bad.id
        ))
        .into());
    }

    let count = state.leads().replace_all(leads);
    state.metrics().lead_replacements.inc(&[("outcome", "ok")]);
    state.metrics().leads_loaded.set(count as i64);

    Ok(response::ok(json!({ "count": count })))
}
