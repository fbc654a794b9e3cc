//! Table rendering for distributions and the summary report

use comfy_table::Color;

use crate::cli::SortOrder;
use crate::core::{Aggregator, FrequencyTable, query};
use crate::output::Dimension;
use crate::output::format::{NumberFormat, create_styled_table, format_number, header_cell, right_cell};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
    pub(crate) number_format: NumberFormat,
}

const MONTH_NAMES: [&str; 13] = [
    "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub(super) fn bucket_label(dimension: Dimension, index: usize) -> String {
    match dimension {
        Dimension::Hour => format!("{index:02}:00"),
        Dimension::Day => index.to_string(),
        Dimension::Month => MONTH_NAMES
            .get(index)
            .copied()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Print one dimension's (bucket, count, share) table. The busiest bucket
/// is highlighted when color is on.
pub(crate) fn print_distribution_table(
    dimension: Dimension,
    counts: &FrequencyTable,
    opts: TableOptions,
) {
    let total = counts.sum();
    let busiest = query::busiest(counts);

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell(dimension.label(), opts.use_color),
        header_cell("Accesses", opts.use_color),
        header_cell("Share", opts.use_color),
    ]);

    let mut buckets: Vec<(usize, u64)> = counts.buckets().collect();
    if opts.order == SortOrder::Desc {
        buckets.reverse();
    }

    for (index, count) in buckets {
        let share = if total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total as f64
        };
        let highlight = opts.use_color && count > 0 && index == busiest;
        let color = highlight.then_some(Color::Green);
        table.add_row(vec![
            right_cell(&bucket_label(dimension, index), color, highlight),
            right_cell(&format_number(count, opts.number_format), color, highlight),
            right_cell(&format!("{share:.1}%"), color, false),
        ]);
    }

    println!("{table}");
}

/// Print the busiest/quietest report across all three dimensions.
pub(crate) fn print_summary_table(agg: &Aggregator, opts: TableOptions) {
    let hours = agg.hour_counts();
    let days = agg.day_counts();
    let months = agg.month_counts();

    let two_hour_start = query::busiest_two_hour(hours);
    let window = format!("{:02}:00-{:02}:00", two_hour_start, two_hour_start + 2);

    let rows: Vec<(&str, String, u64)> = vec![
        (
            "Busiest hour",
            bucket_label(Dimension::Hour, query::busiest(hours)),
            hours.get(query::busiest(hours)),
        ),
        (
            "Quietest hour",
            bucket_label(Dimension::Hour, query::quietest(hours)),
            hours.get(query::quietest(hours)),
        ),
        (
            "Busiest 2-hour window",
            window,
            hours.get(two_hour_start) + hours.get(two_hour_start + 1),
        ),
        (
            "Busiest day",
            bucket_label(Dimension::Day, query::busiest(days)),
            days.get(query::busiest(days)),
        ),
        (
            "Quietest day",
            bucket_label(Dimension::Day, query::quietest(days)),
            days.get(query::quietest(days)),
        ),
        (
            "Busiest month",
            bucket_label(Dimension::Month, query::busiest(months)),
            months.get(query::busiest(months)),
        ),
        (
            "Quietest month",
            bucket_label(Dimension::Month, query::quietest(months)),
            months.get(query::quietest(months)),
        ),
    ];

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Metric", opts.use_color),
        header_cell("Bucket", opts.use_color),
        header_cell("Accesses", opts.use_color),
    ]);
    for (metric, bucket, count) in rows {
        table.add_row(vec![
            right_cell(metric, None, false),
            right_cell(&bucket, None, true),
            right_cell(&format_number(count, opts.number_format), None, false),
        ]);
    }
    table.add_row(vec![
        right_cell("Average per month", None, false),
        right_cell("", None, false),
        right_cell(
            &format_number(query::average_per_month(months), opts.number_format),
            None,
            false,
        ),
    ]);
    table.add_row(vec![
        right_cell("Total accesses", None, false),
        right_cell("", None, false),
        right_cell(&format_number(agg.total(), opts.number_format), None, true),
    ]);

    println!("{table}");
}

/// Print the trailing stats line below a table.
pub(crate) fn print_summary_line(
    total: u64,
    skipped_lines: u64,
    file_count: usize,
    number_format: NumberFormat,
    use_color: bool,
) {
    let stats_text = format!(
        "{} accesses across {} file(s) ({} malformed lines skipped)",
        format_number(total, number_format),
        file_count,
        format_number(skipped_lines, number_format)
    );

    if use_color {
        println!("\n  \x1b[36m{stats_text}\x1b[0m\n");
    } else {
        println!("\n  {stats_text}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_labels_are_zero_padded() {
        assert_eq!(bucket_label(Dimension::Hour, 0), "00:00");
        assert_eq!(bucket_label(Dimension::Hour, 23), "23:00");
    }

    #[test]
    fn month_labels_use_names() {
        assert_eq!(bucket_label(Dimension::Month, 1), "Jan");
        assert_eq!(bucket_label(Dimension::Month, 12), "Dec");
    }

    #[test]
    fn day_labels_are_plain_numbers() {
        assert_eq!(bucket_label(Dimension::Day, 5), "5");
        assert_eq!(bucket_label(Dimension::Day, 31), "31");
    }
}
