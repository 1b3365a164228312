//! Shared application state for the SalesPulse API.
//!
//! Owns the config, the in-memory lead store, the setup validator with its
//! registered probes, and the metrics registry. Startup errors are explicit
//! (Result instead of panic).

use std::collections::HashSet;
use std::sync::Arc;

use salespulse_core::error::{Result, SalesPulseError};

use crate::config::ApiConfig;
use crate::obs::ApiMetrics;
use crate::setup::{EnvProbe, FileProbe, SetupValidator};
use crate::store::LeadStore;

const FAIL_FAST_ON_DUPLICATES: bool = false; // if changed to true, boot fails.

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ApiConfig,
    leads: LeadStore,
    validator: SetupValidator,
    metrics: ApiMetrics,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: ApiConfig) -> Result<Self> {
        // Config sanity: a variable listed twice would double-report checks
        // and skew the readiness summary.
        {
            let mut seen = HashSet::new();
            for spec in cfg
                .setup
                .required_env
                .iter()
                .chain(cfg.setup.optional_env.iter())
            {
                if !seen.insert(spec.name.clone()) {
                    tracing::warn!(var = %spec.name, "env var listed more than once in setup config");
                    if FAIL_FAST_ON_DUPLICATES {
                        return Err(SalesPulseError::BadRequest(format!(
                            "setup config lists {} more than once",
                            spec.name
                        )));
                    }
                }
            }
        }

        let mut validator = SetupValidator::new();
        validator.register(Arc::new(EnvProbe::from_process_env(
            cfg.setup.required_env.clone(),
            cfg.setup.optional_env.clone(),
        )));
        validator.register(Arc::new(FileProbe::new(
            ".",
            cfg.setup.expected_files.clone(),
        )));

        tracing::debug!(probes = ?validator.probe_names(), "setup validator ready");

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                leads: LeadStore::new(),
                validator,
                metrics: ApiMetrics::default(),
            }),
        })
    }

    pub fn cfg(&self) -> &ApiConfig {
        &self.inner.cfg
    }

    pub fn leads(&self) -> &LeadStore {
        &self.inner.leads
    }

    pub fn validator(&self) -> &SetupValidator {
        &self.inner.validator
    }

    pub fn metrics(&self) -> &ApiMetrics {
        &self.inner.metrics
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }
}
