//! JSON output for all commands

use serde_json::json;

use crate::cli::SortOrder;
use crate::core::{Aggregator, FrequencyTable, query};
use crate::output::Dimension;

pub(crate) fn output_distribution_json(
    dimension: Dimension,
    counts: &FrequencyTable,
    order: SortOrder,
) -> String {
    let mut buckets: Vec<(usize, u64)> = counts.buckets().collect();
    if order == SortOrder::Desc {
        buckets.reverse();
    }
    let buckets: Vec<serde_json::Value> = buckets
        .into_iter()
        .map(|(index, count)| json!({ "index": index, "count": count }))
        .collect();

    let value = json!({
        "dimension": dimension.key(),
        "total": counts.sum(),
        "buckets": buckets,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

pub(crate) fn output_summary_json(agg: &Aggregator, skipped_lines: u64) -> String {
    let hours = agg.hour_counts();
    let days = agg.day_counts();
    let months = agg.month_counts();
    let two_hour_start = query::busiest_two_hour(hours);

    let value = json!({
        "busiest_hour": query::busiest(hours),
        "quietest_hour": query::quietest(hours),
        "busiest_two_hour_start": two_hour_start,
        "busiest_two_hour_count": hours.get(two_hour_start) + hours.get(two_hour_start + 1),
        "busiest_day": query::busiest(days),
        "quietest_day": query::quietest(days),
        "busiest_month": query::busiest(months),
        "quietest_month": query::quietest(months),
        "average_per_month": query::average_per_month(months),
        "total": agg.total(),
        "skipped_lines": skipped_lines,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

pub(crate) fn output_total_json(total: u64) -> String {
    json!({ "total": total }).to_string()
}

pub(crate) fn output_month_count_json(month: u32, count: u64) -> String {
    json!({ "month": month, "count": count }).to_string()
}
