//! Dashboard metrics aggregation.
//!
//! A [`DashboardMetrics`] snapshot is a pure function of the lead collection,
//! the selected [`Timeframe`], and a single evaluation instant supplied by
//! the caller. The caller captures "now" once per computation so every
//! derived field is measured against the same instant. Snapshots are
//! recomputed in full on every call and never partially updated.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::model::{Lead, Stage, Timeframe};

/// Open deals at or above this value count as at-risk once contact goes stale.
pub const AT_RISK_VALUE_THRESHOLD: f64 = 25_000.0;
/// Whole days without contact before a high-value open deal is at risk.
pub const AT_RISK_STALE_DAYS: i64 = 7;
/// Whole days without contact before a follow-up is due on an open deal.
pub const FOLLOW_UP_DUE_DAYS: i64 = 3;

/// Derived dashboard counters. Stateless; lifecycle is
/// create-on-request, discard-on-next-recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Leads whose effective creation time falls inside the window.
    pub new_leads: u64,
    /// Total value of leads still in the active pipeline (non-terminal stage).
    pub active_pipeline_value: f64,
    /// Open, high-value leads with no recent contact.
    pub at_risk_deals: u64,
    /// Closed-won leads whose last contact falls inside the window.
    pub closed_deals: u64,
    /// Percentage of in-window leads that closed, in `[0, 100]`.
    pub conversion_rate: f64,
    /// Mean value across all closed-won leads; 0 when none exist.
    pub average_deal_size: f64,
    /// Open leads whose last contact is older than the follow-up threshold.
    pub follow_ups_due: u64,
    /// Always 0: there is no activity feed to derive this from yet.
    pub activities_completed: u64,
}

/// Whole days elapsed between `then` and `now`, truncated. A `then` in the
/// future counts as zero elapsed days.
fn whole_days_since(now: DateTime<Utc>, then: DateTime<Utc>) -> i64 {
    let elapsed = now.signed_duration_since(then);
    if elapsed < Duration::zero() {
        0
    } else {
        elapsed.num_days()
    }
}

/// Compute a dashboard snapshot for `leads` over the given `timeframe`.
///
/// Total for every input: the empty collection yields all-zero counters, a
/// zero denominator yields a zero rate, and missing timestamps fall back to
/// `now`. No field is ever NaN or infinite for finite lead values.
pub fn compute_dashboard_metrics(
    leads: &[Lead],
    timeframe: Timeframe,
    now: DateTime<Utc>,
) -> DashboardMetrics {
    let window_start = now - Duration::days(timeframe.window_days());

    let mut new_leads = 0u64;
    let mut active_pipeline_value = 0.0f64;
    let mut at_risk_deals = 0u64;
    let mut closed_deals = 0u64;
    let mut follow_ups_due = 0u64;
    let mut won_value = 0.0f64;
    let mut won_count = 0u64;

    for lead in leads {
        let last_contact = lead.last_contact.unwrap_or(now);
        let idle_days = whole_days_since(now, last_contact);

        if lead.effective_created_at(now) >= window_start {
            new_leads += 1;
        }

        if lead.stage.is_terminal() {
            if lead.stage == Stage::ClosedWon {
                won_value += lead.value;
                won_count += 1;
                if last_contact >= window_start {
                    closed_deals += 1;
                }
            }
        } else {
            active_pipeline_value += lead.value;
            if idle_days >= AT_RISK_STALE_DAYS && lead.value >= AT_RISK_VALUE_THRESHOLD {
                at_risk_deals += 1;
            }
            if idle_days >= FOLLOW_UP_DUE_DAYS {
                follow_ups_due += 1;
            }
        }
    }

    // Closed deals are windowed by last contact while the denominator is
    // windowed by creation time, so the raw ratio can exceed 100 when an old
    // lead closes inside the window. Clamp to keep the published range.
    let conversion_rate = if new_leads == 0 {
        0.0
    } else {
        (closed_deals as f64 / new_leads as f64 * 100.0).clamp(0.0, 100.0)
    };

    let average_deal_size = if won_count == 0 {
        0.0
    } else {
        won_value / won_count as f64
    };

    tracing::debug!(
        leads = leads.len(),
        timeframe = timeframe.as_str(),
        new_leads,
        closed_deals,
        "dashboard metrics recomputed"
    );

    DashboardMetrics {
        new_leads,
        active_pipeline_value,
        at_risk_deals,
        closed_deals,
        conversion_rate,
        average_deal_size,
        follow_ups_due,
        activities_completed: 0,
    }
}
