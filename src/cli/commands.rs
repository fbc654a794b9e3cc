//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Clone, Copy, Subcommand, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Show the hourly access distribution (default)
    Hourly,
    /// Show the daily access distribution
    Daily,
    /// Show the monthly access distribution
    Monthly {
        /// Print only the count for this month (1-12)
        #[arg(short, long, value_name = "MONTH")]
        month: Option<u32>,
    },
    /// Show busiest/quietest buckets, peak window and overall figures
    Summary,
    /// Print the total number of accesses
    Total,
}
