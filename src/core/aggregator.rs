//! Single-pass accumulation of log entries into frequency tables
//!
//! The entry sequence is forward-only and consumed exactly once; all three
//! tables and the total are filled in the same pass, so every later query
//! sees the same fully-populated data.

use crate::core::types::{FrequencyTable, LogEntry};

/// Per-dimension frequency tables plus totals, built in one pass.
#[derive(Debug, Clone)]
pub(crate) struct Aggregator {
    hours: FrequencyTable,
    days: FrequencyTable,
    months: FrequencyTable,
    total: u64,
    skipped: u64,
}

impl Aggregator {
    /// Drain `entries` once, tallying hour, day and month buckets.
    ///
    /// Entries carrying an out-of-range field are not written to any table;
    /// they are counted in `skipped` instead. An empty sequence yields an
    /// all-zero aggregator with total 0.
    pub(crate) fn from_entries(entries: impl IntoIterator<Item = LogEntry>) -> Self {
        let mut hours = FrequencyTable::hours();
        let mut days = FrequencyTable::days();
        let mut months = FrequencyTable::months();
        let mut total = 0u64;
        let mut skipped = 0u64;

        for entry in entries {
            let (h, d, m) = (entry.hour as usize, entry.day as usize, entry.month as usize);
            // Validate all three fields before touching any table, so the
            // tables never disagree with each other or with `total`.
            if hours.contains(h) && days.contains(d) && months.contains(m) {
                hours.record(h);
                days.record(d);
                months.record(m);
                total += 1;
            } else {
                skipped += 1;
            }
        }

        Aggregator {
            hours,
            days,
            months,
            total,
            skipped,
        }
    }

    pub(crate) fn hour_counts(&self) -> &FrequencyTable {
        &self.hours
    }

    pub(crate) fn day_counts(&self) -> &FrequencyTable {
        &self.days
    }

    pub(crate) fn month_counts(&self) -> &FrequencyTable {
        &self.months
    }

    /// Total number of accesses tallied.
    pub(crate) fn total(&self) -> u64 {
        self.total
    }

    /// Entries rejected for an out-of-range field.
    pub(crate) fn skipped(&self) -> u64 {
        self.skipped
    }
}
