//! In-memory lead collection.
//!
//! The service does not own lead data: an upstream data-fetching layer hands
//! the working set over wholesale (`PUT /api/v1/leads`) and the dashboard
//! aggregates against a point-in-time snapshot of it. Nothing here persists.

use dashmap::DashMap;

use salespulse_core::Lead;

/// Shared lead collection keyed by lead id.
#[derive(Default)]
pub struct LeadStore {
    leads: DashMap<String, Lead>,
}

impl LeadStore {
    pub fn new() -> Self {
        Self {
            leads: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Point-in-time copy of the collection, ordered by lead id for stable
    /// listings. Aggregation runs against the copy, never the live map.
    pub fn snapshot(&self) -> Vec<Lead> {
        let mut leads: Vec<Lead> = self.leads.iter().map(|e| e.value().clone()).collect();
        leads.sort_by(|a, b| a.id.cmp(&b.id));
        leads
    }

    /// Replace the collection wholesale; duplicate ids keep the last record.
    /// Returns the resulting collection size.
    ///
    /// The swap is clear-then-insert: a snapshot taken concurrently with a
    /// replacement may observe a partially loaded set, which the next
    /// recomputation corrects.
    pub fn replace_all(&self, leads: Vec<Lead>) -> usize {
        self.leads.clear();
        for lead in leads {
            self.leads.insert(lead.id.clone(), lead);
        }
        self.leads.len()
    }
}
