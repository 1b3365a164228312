//! Probe registry and report assembly.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use salespulse_core::error::Result;

use super::probes::{CheckResult, CheckStatus, SetupProbe};

/// Registry of setup probes; all registered probes run per validation pass.
#[derive(Default)]
pub struct SetupValidator {
    probes: Vec<Arc<dyn SetupProbe>>,
}

/// Full validation report, assembled fresh on every run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// No required check is invalid or missing.
    pub setup_ready: bool,
    pub required_issues: usize,
    pub total_checks: usize,
    /// Checks per probe, keyed by probe name.
    pub summary: BTreeMap<String, usize>,
    pub checks: Vec<CheckResult>,
    pub recommendations: Vec<String>,
}

impl SetupValidator {
    pub fn new() -> Self {
        Self { probes: Vec::new() }
    }

    pub fn register(&mut self, probe: Arc<dyn SetupProbe>) {
        self.probes.push(probe);
    }

    pub fn probe_names(&self) -> Vec<&'static str> {
        self.probes.iter().map(|p| p.name()).collect()
    }

    /// Run every probe and fold the results into a report.
    pub async fn run_all(&self) -> Result<ValidationReport> {
        let mut checks = Vec::new();
        let mut summary = BTreeMap::new();

        for probe in &self.probes {
            let results = probe.run().await?;
            summary.insert(probe.name().to_string(), results.len());
            checks.extend(results);
        }

        let required_issues = checks.iter().filter(|c| c.is_blocking()).count();
        let recommendations = recommendations_for(&checks);

        Ok(ValidationReport {
            setup_ready: required_issues == 0,
            required_issues,
            total_checks: checks.len(),
            summary,
            checks,
            recommendations,
        })
    }
}

fn recommendations_for(checks: &[CheckResult]) -> Vec<String> {
    let mut out = Vec::new();

    if checks.iter().any(|c| c.required && c.status == CheckStatus::Missing) {
        out.push("Configure missing required environment variables before proceeding".to_string());
    }
    if checks.iter().any(|c| c.status == CheckStatus::Invalid) {
        out.push("Verify API keys and credentials for external services".to_string());
    }
    if checks.iter().any(|c| !c.required && c.status == CheckStatus::Missing) {
        out.push("Consider configuring optional services like Redis for better performance".to_string());
    }
    if checks.iter().any(|c| c.status == CheckStatus::Warning) {
        out.push("Review warnings: some configured values look unusual".to_string());
    }
    if out.is_empty() {
        out.push("Your setup looks good".to_string());
    }

    out
}
