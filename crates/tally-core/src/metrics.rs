//! Counter primitives with Prometheus text exposition.
//!
//! No metrics framework is used; a counter family is a `DashMap` of label
//! value -> atomic cell, rendered on demand by the scrape handler. A series
//! is created lazily on the first increment for its label value and lives
//! for the process lifetime.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// A named counter family partitioned by a single label dimension.
///
/// The family itself is nameless; callers pass the metric name, help text,
/// and label key at render time so one mechanism serves any counter.
#[derive(Default)]
pub struct CounterVec {
    series: DashMap<String, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, label: &str) {
        self.add(label, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, label: &str, v: u64) {
        let cell = self
            .series
            .entry(label.to_string())
            .or_insert_with(|| AtomicU64::new(0));
        cell.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for a label, 0 if the series was never incremented.
    pub fn get(&self, label: &str) -> u64 {
        self.series
            .get(label)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    ///
    /// Series are sorted by label value: an unchanged family renders
    /// byte-identically across scrapes. Each cell is read with a single
    /// atomic load; cross-series consistency at one instant is not promised.
    pub fn render(&self, name: &str, help: &str, label_key: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);

        let mut rows: Vec<(String, u64)> = self
            .series
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        rows.sort();

        for (label, val) in rows {
            let _ = writeln!(
                out,
                "{}{{{}=\"{}\"}} {}",
                name,
                label_key,
                escape_label(&label),
                val
            );
        }
    }
}
