//! Lead record parsing vectors (lenient JSON intake).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::str::FromStr;

use salespulse_core::model::{Lead, Priority, Stage, Timeframe};

#[test]
fn parse_lead_full() {
    let s = r#"{
        "id": "lead-1",
        "name": "Dana Reyes",
        "company": "Northwind",
        "email": "dana@northwind.example",
        "phone": "+1-555-0101",
        "value": 42000.5,
        "stage": "negotiation",
        "lastContact": "2025-06-10T09:30:00Z",
        "notes": "asked for revised quote",
        "assignedTo": "rep-7",
        "priority": "high",
        "source": "referral",
        "createdAt": "2025-05-01T00:00:00Z"
    }"#;
    let lead: Lead = serde_json::from_str(s).unwrap();
    assert_eq!(lead.id, "lead-1");
    assert_eq!(lead.stage, Stage::Negotiation);
    assert_eq!(lead.priority, Priority::High);
    assert_eq!(lead.value, 42000.5);
    assert!(lead.last_contact.is_some());
    assert!(lead.created_at.is_some());
}

#[test]
fn parse_lead_minimal_applies_defaults() {
    let s = r#"{"id": "lead-2", "name": "Sam Ortiz", "stage": "new"}"#;
    let lead: Lead = serde_json::from_str(s).unwrap();
    assert_eq!(lead.value, 0.0);
    assert_eq!(lead.priority, Priority::Medium);
    assert_eq!(lead.company, "");
    assert!(lead.last_contact.is_none());
    assert!(lead.created_at.is_none());
}

#[test]
fn malformed_timestamp_degrades_to_none() {
    let s = r#"{
        "id": "lead-3",
        "name": "Kim Lund",
        "stage": "contacted",
        "lastContact": "not-a-date",
        "createdAt": true
    }"#;
    let lead: Lead = serde_json::from_str(s).unwrap();
    assert!(lead.last_contact.is_none());
    assert!(lead.created_at.is_none());
}

#[test]
fn epoch_millis_timestamp_accepted() {
    // 2025-06-01T00:00:00Z
    let s = r#"{
        "id": "lead-4",
        "name": "Ada Voss",
        "stage": "qualified",
        "lastContact": 1748736000000
    }"#;
    let lead: Lead = serde_json::from_str(s).unwrap();
    let ts = lead.last_contact.unwrap();
    assert_eq!(ts.to_rfc3339(), "2025-06-01T00:00:00+00:00");
}

#[test]
fn unknown_stage_round_trips() {
    let s = r#"{"id": "lead-5", "name": "Lee Park", "stage": "pilot-running"}"#;
    let lead: Lead = serde_json::from_str(s).unwrap();
    assert_eq!(lead.stage, Stage::Other("pilot-running".to_string()));
    assert!(!lead.stage.is_terminal());

    let v = serde_json::to_value(&lead).unwrap();
    assert_eq!(v["stage"], "pilot-running");
}

#[test]
fn terminal_stage_classification() {
    assert!(Stage::from("closed-won").is_terminal());
    assert!(Stage::from("closed-lost").is_terminal());
    assert!(!Stage::from("proposal").is_terminal());
    assert!(!Stage::from("anything-else").is_terminal());
}

#[test]
fn timeframe_parses_and_maps_to_day_windows() {
    assert_eq!(Timeframe::from_str("week").unwrap().window_days(), 7);
    assert_eq!(Timeframe::from_str("Month").unwrap().window_days(), 30);
    assert_eq!(Timeframe::from_str("quarter").unwrap().window_days(), 90);

    let err = Timeframe::from_str("year").unwrap_err();
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}
