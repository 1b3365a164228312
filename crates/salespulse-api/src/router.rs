//! Axum router wiring.

use axum::routing::get;
use axum::Router;

use crate::{app_state::AppState, ops, routes};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/dashboard/metrics", get(routes::dashboard::metrics))
        .route(
            "/api/v1/leads",
            get(routes::leads::list).put(routes::leads::replace),
        )
        .route("/api/v1/setup/status", get(routes::setup::status))
        .route("/api/v1/setup/validate", get(routes::setup::validate))
        .route(
            "/api/v1/setup/requirements",
            get(routes::setup::requirements),
        )
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
