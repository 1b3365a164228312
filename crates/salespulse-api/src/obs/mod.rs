//! Lightweight in-process metrics (dependency-free).
//!
//! Minimal Prometheus-compatible counters for the API service without
//! pulling in an external metrics crate. Values live in atomics and are
//! rendered by the `/metrics` handler.

pub mod metrics;

pub use metrics::ApiMetrics;
