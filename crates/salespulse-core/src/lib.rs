//! SalesPulse core: lead domain model, timeframe windows, and the dashboard
//! metrics aggregation.
//!
//! This crate defines the data shapes and the derivation rules shared by the
//! API service and report tooling. It intentionally carries no transport or
//! runtime dependencies so the aggregation can be reused from any driver.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SalesPulseError`/`Result`, and the
//! aggregation itself is total: malformed lead data degrades to defaults
//! instead of crashing a serving process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;
pub mod model;

/// Shared result type.
pub use error::{Result, SalesPulseError};
pub use metrics::{compute_dashboard_metrics, DashboardMetrics};
pub use model::{Lead, Priority, Stage, Timeframe};
