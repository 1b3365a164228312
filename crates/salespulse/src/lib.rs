//! Top-level facade crate for SalesPulse.
//!
//! Re-exports the core types and the API library so users can depend on a single crate.

pub mod core {
    pub use salespulse_core::*;
}

pub mod api {
    pub use salespulse_api::*;
}
