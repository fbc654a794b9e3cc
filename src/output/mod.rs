mod format;
mod json;
mod table;

pub(crate) use format::NumberFormat;
pub(crate) use json::{
    output_distribution_json, output_month_count_json, output_summary_json, output_total_json,
};
pub(crate) use table::{
    TableOptions, print_distribution_table, print_summary_line, print_summary_table,
};

/// Which time unit a distribution covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dimension {
    Hour,
    Day,
    Month,
}

impl Dimension {
    pub(crate) fn key(self) -> &'static str {
        match self {
            Dimension::Hour => "hour",
            Dimension::Day => "day",
            Dimension::Month => "month",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Dimension::Hour => "Hour",
            Dimension::Day => "Day",
            Dimension::Month => "Month",
        }
    }
}
