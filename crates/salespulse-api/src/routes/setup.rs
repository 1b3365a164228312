//! Setup validation endpoints (thin wrappers over the probe registry).

use axum::extract::State;
use axum::response::Response;
use serde_json::json;

use crate::app_state::AppState;
use crate::response::{self, ApiError};

/// GET /api/v1/setup/status — readiness summary.
pub async fn status(State(state): State<AppState>) -> Result<Response, ApiError> {
    state.metrics().http_requests.inc(&[("route", "setup_status")]);

    let report = state.validator().run_all().await?;
    state.metrics().setup_checks.inc(&[(
        "ready",
        if report.setup_ready { "true" } else { "false" },
    )]);

    Ok(response::ok(json!({
        "setup_ready": report.setup_ready,
        "required_issues": report.required_issues,
        "total_checks": report.total_checks,
        "summary": report.summary,
    })))
}

/// GET /api/v1/setup/validate — full per-check report.
pub async fn validate(State(state): State<AppState>) -> Result<Response, ApiError> {
    state.metrics().http_requests.inc(&[("route", "setup_validate")]);

    let report = state.validator().run_all().await?;
    Ok(response::ok(report))
}

/// GET /api/v1/setup/requirements — static setup template rendered from the
/// configured variable lists.
pub async fn requirements(State(state): State<AppState>) -> Response {
    state.metrics().http_requests.inc(&[("route", "setup_requirements")]);

    let setup = &state.cfg().setup;
    let env_entry = |spec: &crate::config::EnvVarSpec, required: bool| {
        json!({
            "name": spec.name,
            "description": spec.description,
            "example": spec.example,
            "required": required,
        })
    };

    response::ok(json!({
        "required_environment_variables": setup
            .required_env
            .iter()
            .map(|s| env_entry(s, true))
            .collect::<Vec<_>>(),
        "optional_environment_variables": setup
            .optional_env
            .iter()
            .map(|s| env_entry(s, false))
            .collect::<Vec<_>>(),
        "expected_files": setup.expected_files,
        "setup_steps": [
            "Configure required environment variables",
            "Place the service config file next to the binary",
            "Run the setup validation endpoint",
            "Load a lead collection and open the dashboard",
        ],
    }))
}
