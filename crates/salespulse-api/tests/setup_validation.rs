//! Setup validator tests driving probes through an injected environment.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::fs;
use std::sync::Arc;

use salespulse_api::config::EnvVarSpec;
use salespulse_api::setup::{CheckStatus, EnvProbe, FileProbe, SetupProbe, SetupValidator};

fn spec(name: &str) -> EnvVarSpec {
    spec_with(name, None, &[])
}

fn spec_with(name: &str, starts_with: Option<&str>, contains_any: &[&str]) -> EnvVarSpec {
    EnvVarSpec {
        name: name.to_string(),
        description: format!("{name} for tests"),
        example: None,
        starts_with: starts_with.map(|s| s.to_string()),
        contains_any: contains_any.iter().map(|s| s.to_string()).collect(),
    }
}

fn env_probe(required: Vec<EnvVarSpec>, optional: Vec<EnvVarSpec>, vars: &[(&str, &str)]) -> EnvProbe {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    EnvProbe::with_lookup(required, optional, Arc::new(move |name| map.get(name).cloned()))
}

#[tokio::test]
async fn missing_required_var_blocks_readiness() {
    let probe = env_probe(vec![spec("APP_SECRET")], vec![], &[]);
    let mut validator = SetupValidator::new();
    validator.register(Arc::new(probe));

    let report = validator.run_all().await.unwrap();
    assert!(!report.setup_ready);
    assert_eq!(report.required_issues, 1);
    assert_eq!(report.checks[0].status, CheckStatus::Missing);
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("required environment variables")));
}

#[tokio::test]
async fn all_required_present_is_ready() {
    let probe = env_probe(
        vec![spec("APP_SECRET"), spec("DB_URL")],
        vec![spec("CACHE_URL")],
        &[("APP_SECRET", "shh"), ("DB_URL", "postgres://x")],
    );
    let mut validator = SetupValidator::new();
    validator.register(Arc::new(probe));

    let report = validator.run_all().await.unwrap();
    // Missing optional var does not block readiness.
    assert!(report.setup_ready);
    assert_eq!(report.required_issues, 0);
    assert_eq!(report.total_checks, 3);
    assert_eq!(report.summary.get("environment"), Some(&3));
}

#[tokio::test]
async fn prefix_rule_violation_is_invalid() {
    let probe = env_probe(
        vec![spec_with("SERVICE_KEY", Some("sk-"), &[])],
        vec![],
        &[("SERVICE_KEY", "wrong-format")],
    );
    let mut validator = SetupValidator::new();
    validator.register(Arc::new(probe));

    let report = validator.run_all().await.unwrap();
    assert!(!report.setup_ready);
    assert_eq!(report.checks[0].status, CheckStatus::Invalid);
}

#[tokio::test]
async fn host_rule_violation_is_warning_only() {
    let probe = env_probe(
        vec![spec_with("SERVICE_URL", None, &["service.example", "localhost"])],
        vec![],
        &[("SERVICE_URL", "https://elsewhere.test")],
    );
    let mut validator = SetupValidator::new();
    validator.register(Arc::new(probe));

    let report = validator.run_all().await.unwrap();
    // A warning is surfaced but does not block readiness.
    assert!(report.setup_ready);
    assert_eq!(report.checks[0].status, CheckStatus::Warning);
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("warnings")));
}

#[tokio::test]
async fn file_probe_reports_present_and_missing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("app.yaml"), "version: 1\n").unwrap();

    let probe = FileProbe::new(
        dir.path(),
        vec!["app.yaml".to_string(), "absent.yaml".to_string()],
    );
    let results = probe.run().await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].status, CheckStatus::Valid);
    assert_eq!(results[1].status, CheckStatus::Missing);
}

#[tokio::test]
async fn file_probe_bad_root_is_internal_error() {
    let probe = FileProbe::new("/definitely/not/a/real/root", vec!["x".to_string()]);
    let err = probe.run().await.unwrap_err();
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

#[tokio::test]
async fn summary_spans_all_registered_probes() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("app.yaml"), "version: 1\n").unwrap();

    let mut validator = SetupValidator::new();
    validator.register(Arc::new(env_probe(
        vec![spec("APP_SECRET")],
        vec![],
        &[("APP_SECRET", "shh")],
    )));
    validator.register(Arc::new(FileProbe::new(
        dir.path(),
        vec!["app.yaml".to_string()],
    )));

    let report = validator.run_all().await.unwrap();
    assert!(report.setup_ready);
    assert_eq!(report.summary.get("environment"), Some(&1));
    assert_eq!(report.summary.get("files"), Some(&1));
    assert_eq!(report.total_checks, 2);
}
