//! Aggregate queries over populated frequency tables
//!
//! All scans run in ascending index order with strict comparisons, so the
//! first bucket to reach the extreme value wins ties. Every function is
//! total: an all-zero table returns the deterministic initial index rather
//! than failing.

use crate::core::types::FrequencyTable;

/// Initial "best" value for quietest scans. A bucket only wins by dropping
/// strictly below it, so on an all-zero table the first valid index wins.
const QUIET_THRESHOLD: u64 = 100_000;

/// Index of the bucket with the highest count (first wins ties).
///
/// Returns 0 when no bucket exceeds zero: for day/month tables that is the
/// unused slot, signalling "no data".
pub(crate) fn busiest(table: &FrequencyTable) -> usize {
    let mut best_index = 0;
    let mut best = 0u64;
    for (index, count) in table.buckets() {
        if count > best {
            best_index = index;
            best = count;
        }
    }
    best_index
}

/// Index of the bucket with the lowest count (first wins ties).
pub(crate) fn quietest(table: &FrequencyTable) -> usize {
    let mut best_index = 0;
    let mut best = QUIET_THRESHOLD;
    for (index, count) in table.buckets() {
        if count < best {
            best_index = index;
            best = count;
        }
    }
    best_index
}

/// Starting hour of the busiest contiguous two-hour window, scanning the
/// even starts 0, 2, .., 22 and comparing each window's summed count.
pub(crate) fn busiest_two_hour(hours: &FrequencyTable) -> usize {
    let mut best_start = 0;
    let mut best = 0u64;
    let mut h = 0;
    while h + 1 < hours.len() {
        let window = hours.get(h) + hours.get(h + 1);
        if window > best {
            best_start = h;
            best = window;
        }
        h += 2;
    }
    best_start
}

/// Average accesses per month over the 12 valid buckets, truncating.
pub(crate) fn average_per_month(months: &FrequencyTable) -> u64 {
    months.sum() / 12
}

/// Count for a single month (1-12); out-of-range months read as 0.
pub(crate) fn total_for_month(months: &FrequencyTable, month: usize) -> u64 {
    months.get(month)
}
