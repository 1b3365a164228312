//! Built-in setup probes.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use salespulse_core::error::{Result, SalesPulseError};

use crate::config::EnvVarSpec;

/// Outcome vocabulary for a single check (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Valid,
    Invalid,
    Missing,
    Warning,
}

/// Result of one validation check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub component: String,
    pub status: CheckStatus,
    pub message: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckResult {
    fn new(component: &str, status: CheckStatus, message: String, required: bool) -> Self {
        Self {
            component: component.to_string(),
            status,
            message,
            required,
            detail: None,
        }
    }

    /// Counts against `setup_ready` when required.
    pub fn is_blocking(&self) -> bool {
        self.required && matches!(self.status, CheckStatus::Invalid | CheckStatus::Missing)
    }
}

/// A setup probe produces a batch of check results.
#[async_trait]
pub trait SetupProbe: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self) -> Result<Vec<CheckResult>>;
}

type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Checks configured environment variables for presence and format.
pub struct EnvProbe {
    required: Vec<EnvVarSpec>,
    optional: Vec<EnvVarSpec>,
    lookup: EnvLookup,
}

impl EnvProbe {
    /// Probe backed by the process environment.
    pub fn from_process_env(required: Vec<EnvVarSpec>, optional: Vec<EnvVarSpec>) -> Self {
        Self::with_lookup(required, optional, Arc::new(|name| std::env::var(name).ok()))
    }

    /// Probe backed by an injected lookup (tests avoid mutating the process
    /// environment).
    pub fn with_lookup(
        required: Vec<EnvVarSpec>,
        optional: Vec<EnvVarSpec>,
        lookup: EnvLookup,
    ) -> Self {
        Self {
            required,
            optional,
            lookup,
        }
    }

    fn check_one(&self, spec: &EnvVarSpec, required: bool) -> CheckResult {
        let value = match (self.lookup)(&spec.name) {
            Some(v) if !v.is_empty() => v,
            _ => {
                let message = if required {
                    format!("missing required environment variable: {}", spec.name)
                } else {
                    format!("optional variable {} not configured", spec.name)
                };
                let mut r = CheckResult::new(&spec.name, CheckStatus::Missing, message, required);
                r.detail = Some(spec.description.clone());
                return r;
            }
        };

        if let Some(prefix) = &spec.starts_with {
            if !value.starts_with(prefix.as_str()) {
                let mut r = CheckResult::new(
                    &spec.name,
                    CheckStatus::Invalid,
                    format!("{} format appears invalid (should start with '{prefix}')", spec.name),
                    required,
                );
                r.detail = Some(spec.description.clone());
                return r;
            }
        }

        if !spec.contains_any.is_empty()
            && !spec.contains_any.iter().any(|host| value.contains(host.as_str()))
        {
            let mut r = CheckResult::new(
                &spec.name,
                CheckStatus::Warning,
                format!("{} format may be invalid", spec.name),
                required,
            );
            r.detail = Some(spec.description.clone());
            return r;
        }

        CheckResult::new(
            &spec.name,
            CheckStatus::Valid,
            format!("{} is configured", spec.name),
            required,
        )
    }
}

#[async_trait]
impl SetupProbe for EnvProbe {
    fn name(&self) -> &'static str {
        "environment"
    }

    async fn run(&self) -> Result<Vec<CheckResult>> {
        let mut results = Vec::with_capacity(self.required.len() + self.optional.len());
        for spec in &self.required {
            results.push(self.check_one(spec, true));
        }
        for spec in &self.optional {
            results.push(self.check_one(spec, false));
        }
        Ok(results)
    }
}

/// Checks that expected files exist under the probe root.
pub struct FileProbe {
    root: PathBuf,
    expected: Vec<String>,
}

impl FileProbe {
    pub fn new(root: impl Into<PathBuf>, expected: Vec<String>) -> Self {
        Self {
            root: root.into(),
            expected,
        }
    }
}

#[async_trait]
impl SetupProbe for FileProbe {
    fn name(&self) -> &'static str {
        "files"
    }

    async fn run(&self) -> Result<Vec<CheckResult>> {
        if !self.root.is_dir() {
            return Err(SalesPulseError::Internal(format!(
                "file probe root is not a directory: {}",
                self.root.display()
            )));
        }

        let mut results = Vec::with_capacity(self.expected.len());
        for rel in &self.expected {
            let path = self.root.join(rel);
            let result = if path.exists() {
                CheckResult::new(rel, CheckStatus::Valid, format!("{rel} is present"), true)
            } else {
                CheckResult::new(rel, CheckStatus::Missing, format!("{rel} not found"), true)
            };
            results.push(result);
        }
        Ok(results)
    }
}
