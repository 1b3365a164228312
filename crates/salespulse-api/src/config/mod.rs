//! Service config loader (strict parsing).

pub mod schema;

use std::fs;

use salespulse_core::error::{Result, SalesPulseError};

pub use schema::{ApiConfig, DashboardSection, EnvVarSpec, ServerSection, SetupSection};

pub fn load_from_file(path: &str) -> Result<ApiConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SalesPulseError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ApiConfig> {
    let cfg: ApiConfig = serde_yaml::from_str(s)
        .map_err(|e| SalesPulseError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
