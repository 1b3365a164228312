//! SalesPulse API service.
//!
//! - JSON API under /api/v1: dashboard metrics, lead collection, setup
//!   validation
//! - Ops endpoints: /healthz, /readyz, /metrics

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use salespulse_api::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("salespulse.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("app state init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "salespulse-api starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
