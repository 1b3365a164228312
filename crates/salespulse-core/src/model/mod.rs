//! Domain model (leads, pipeline stages, dashboard timeframes).
//!
//! Lead records arrive from an upstream data-fetching layer as JSON; parsing
//! here is deliberately lenient (unknown stage labels are preserved, bad
//! timestamps degrade to `None`) so a single malformed record cannot take
//! down the metrics surface.

pub mod lead;
pub mod timeframe;

pub use lead::{Lead, Priority, Stage};
pub use timeframe::Timeframe;
