//! Minimal metrics registry for the API service.
//!
//! Counter/gauge/histogram primitives with dynamic labels backed by
//! `DashMap`. Label sets are flattened into sorted key vectors for
//! deterministic ordering; histogram buckets are fixed in microseconds so
//! rendering stays integer-only.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::time::Duration;

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

type LabelKey = Vec<(String, String)>;

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn label_body(key: &LabelKey) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        for entry in self.map.iter() {
            let val = entry.value().load(Ordering::Relaxed);
            let _ = writeln!(out, "{name}{{{}}} {val}", label_body(entry.key()));
        }
    }
}

/// Unlabeled gauge.
#[derive(Default)]
pub struct Gauge {
    value: AtomicI64,
}

impl Gauge {
    pub fn set(&self, v: i64) {
        self.value.store(v, Ordering::Relaxed);
    }

    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} gauge");
        let _ = writeln!(out, "{name} {}", self.get());
    }
}

// Fixed buckets in microseconds: aggregation over an in-memory collection is
// expected to land in the low-millisecond range even at max_leads.
const BUCKETS_MICROS: [u64; 7] = [50, 250, 1_000, 5_000, 25_000, 100_000, 500_000];

struct AtomicHistogram {
    count: AtomicU64,
    sum: AtomicU64,
    buckets: [AtomicU64; BUCKETS_MICROS.len()],
}

impl Default for AtomicHistogram {
    fn default() -> Self {
        Self {
            count: AtomicU64::new(0),
            sum: AtomicU64::new(0),
            buckets: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }
}

#[derive(Default)]
pub struct HistogramVec {
    map: DashMap<LabelKey, AtomicHistogram>,
}

impl HistogramVec {
    /// Observe a duration (microsecond scale, cumulative buckets).
    pub fn observe(&self, labels: &[(&str, &str)], duration: Duration) {
        let hist = self
            .map
            .entry(label_key(labels))
            .or_insert_with(AtomicHistogram::default);
        let micros = duration.as_micros() as u64;

        hist.count.fetch_add(1, Ordering::Relaxed);
        hist.sum.fetch_add(micros, Ordering::Relaxed);
        for (i, &le) in BUCKETS_MICROS.iter().enumerate() {
            if micros <= le {
                hist.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} histogram");
        for entry in self.map.iter() {
            let hist = entry.value();
            let body = label_body(entry.key());
            let prefix = if body.is_empty() {
                String::new()
            } else {
                format!("{body},")
            };

            for (i, &le) in BUCKETS_MICROS.iter().enumerate() {
                let count = hist.buckets[i].load(Ordering::Relaxed);
                let _ = writeln!(out, "{name}_bucket{{{prefix}le=\"{le}\"}} {count}");
            }
            let count = hist.count.load(Ordering::Relaxed);
            let _ = writeln!(out, "{name}_bucket{{{prefix}le=\"+Inf\"}} {count}");
            let _ = writeln!(out, "{name}_sum{{{body}}} {}", hist.sum.load(Ordering::Relaxed));
            let _ = writeln!(out, "{name}_count{{{body}}} {count}");
        }
    }
}

#[derive(Default)]
pub struct ApiMetrics {
    /// HTTP requests by route.
    pub http_requests: CounterVec,
    /// Lead collection replacements by outcome (ok / rejected).
    pub lead_replacements: CounterVec,
    /// Setup validation passes by readiness outcome.
    pub setup_checks: CounterVec,
    /// Dashboard recompute latency by timeframe (microseconds).
    pub recompute_duration: HistogramVec,
    /// Size of the currently loaded lead collection.
    pub leads_loaded: Gauge,
    draining: AtomicBool,
}

impl ApiMetrics {
    /// Mark draining state.
    pub fn set_draining(&self) {
        self.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.draining.load(Ordering::Relaxed)
    }

    /// Render all registered metrics in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.http_requests.render("salespulse_http_requests_total", &mut out);
        self.lead_replacements
            .render("salespulse_lead_replacements_total", &mut out);
        self.setup_checks.render("salespulse_setup_checks_total", &mut out);
        self.recompute_duration
            .render("salespulse_recompute_duration_micros", &mut out);
        self.leads_loaded.render("salespulse_leads_loaded", &mut out);

        let _ = writeln!(
            out,
            "# TYPE salespulse_draining gauge\nsalespulse_draining {}",
            if self.is_draining() { 1 } else { 0 }
        );
        out
    }
}
