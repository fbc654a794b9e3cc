//! Core data types for the aggregation engine
//!
//! A `LogEntry` is the unified record every source parses into; the
//! `FrequencyTable` is the fixed-capacity counter the aggregator fills.

use serde::Serialize;

/// One parsed access-log record. Field ranges are enforced by the parser;
/// the aggregation core never constructs or mutates entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct LogEntry {
    pub(crate) year: i32,
    /// Month of year, 1-12
    pub(crate) month: u32,
    /// Day of month, 1-31
    pub(crate) day: u32,
    /// Hour of day, 0-23
    pub(crate) hour: u32,
    /// Minute, 0-59 (carried for display, not aggregated)
    pub(crate) minute: u32,
}

/// Fixed-capacity count table keyed by a validated index range.
///
/// Day and month tables keep an unused slot 0 so that indices line up with
/// calendar values; `first_valid` marks where the meaningful range starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FrequencyTable {
    counts: Box<[u64]>,
    first_valid: usize,
}

impl FrequencyTable {
    /// 24 buckets, all valid (hour 0-23).
    pub(crate) fn hours() -> Self {
        FrequencyTable {
            counts: vec![0; 24].into_boxed_slice(),
            first_valid: 0,
        }
    }

    /// 32 buckets, slot 0 unused (day 1-31).
    pub(crate) fn days() -> Self {
        FrequencyTable {
            counts: vec![0; 32].into_boxed_slice(),
            first_valid: 1,
        }
    }

    /// 13 buckets, slot 0 unused (month 1-12).
    pub(crate) fn months() -> Self {
        FrequencyTable {
            counts: vec![0; 13].into_boxed_slice(),
            first_valid: 1,
        }
    }

    /// Increment the bucket at `index`. Returns false without writing if
    /// the index falls outside the valid range.
    pub(crate) fn record(&mut self, index: usize) -> bool {
        if index < self.first_valid || index >= self.counts.len() {
            return false;
        }
        self.counts[index] += 1;
        true
    }

    /// Whether `index` falls inside the valid range.
    pub(crate) fn contains(&self, index: usize) -> bool {
        index >= self.first_valid && index < self.counts.len()
    }

    /// Count for a bucket, 0 for out-of-range indices.
    pub(crate) fn get(&self, index: usize) -> u64 {
        if index < self.first_valid {
            return 0;
        }
        self.counts.get(index).copied().unwrap_or(0)
    }

    pub(crate) fn first_valid(&self) -> usize {
        self.first_valid
    }

    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }

    /// Ordered (index, count) pairs over the valid range, for display.
    pub(crate) fn buckets(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .skip(self.first_valid)
            .map(|(i, &c)| (i, c))
    }

    /// Sum over valid indices.
    pub(crate) fn sum(&self) -> u64 {
        self.counts[self.first_valid..].iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_table_shape() {
        let t = FrequencyTable::hours();
        assert_eq!(t.len(), 24);
        assert_eq!(t.first_valid(), 0);
        assert_eq!(t.buckets().count(), 24);
    }

    #[test]
    fn day_table_skips_slot_zero() {
        let t = FrequencyTable::days();
        assert_eq!(t.len(), 32);
        assert_eq!(t.first_valid(), 1);
        assert_eq!(t.buckets().next(), Some((1, 0)));
        assert_eq!(t.buckets().count(), 31);
    }

    #[test]
    fn month_table_skips_slot_zero() {
        let t = FrequencyTable::months();
        assert_eq!(t.len(), 13);
        assert_eq!(t.buckets().count(), 12);
    }

    #[test]
    fn record_increments_valid_index() {
        let mut t = FrequencyTable::hours();
        assert!(t.record(0));
        assert!(t.record(23));
        assert!(t.record(23));
        assert_eq!(t.get(0), 1);
        assert_eq!(t.get(23), 2);
        assert_eq!(t.sum(), 3);
    }

    #[test]
    fn record_rejects_out_of_range() {
        let mut t = FrequencyTable::days();
        assert!(!t.record(0)); // unused slot
        assert!(!t.record(32));
        assert_eq!(t.sum(), 0);
    }

    #[test]
    fn get_out_of_range_is_zero() {
        let t = FrequencyTable::months();
        assert_eq!(t.get(0), 0);
        assert_eq!(t.get(13), 0);
        assert_eq!(t.get(usize::MAX), 0);
    }

    #[test]
    fn sum_excludes_slot_zero() {
        let mut t = FrequencyTable::months();
        t.record(1);
        t.record(12);
        assert_eq!(t.sum(), 2);
    }
}
