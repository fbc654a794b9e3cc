//! Command dispatch: load entries, aggregate once, render per command

use crate::cli::{Cli, Commands};
use crate::core::{Aggregator, query};
use crate::error::AppError;
use crate::output::{
    Dimension, NumberFormat, TableOptions, output_distribution_json, output_month_count_json,
    output_summary_json, output_total_json, print_distribution_table, print_summary_line,
    print_summary_table,
};
use crate::source::{AccessLogSource, Source, load_entries};

struct CommandContext<'a> {
    cli: &'a Cli,
    number_format: NumberFormat,
    skipped_lines: u64,
    file_count: usize,
}

impl CommandContext<'_> {
    fn table_options(&self) -> TableOptions {
        TableOptions {
            order: self.cli.order,
            use_color: self.cli.use_color(),
            number_format: self.number_format,
        }
    }
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;

    let source = AccessLogSource::new(cli.file.clone(), cli.log_dir.clone());
    // JSON consumers get a clean stream; progress stays off stderr too.
    let quiet = cli.quiet || cli.json;
    let loaded = load_entries(&source, quiet)?;

    if !quiet && loaded.entries.is_empty() {
        eprintln!("No entries found in {} {} file(s).", loaded.file_count, source.display_name());
    }

    let ctx = CommandContext {
        cli,
        number_format,
        skipped_lines: loaded.skipped_lines,
        file_count: loaded.file_count,
    };
    let agg = Aggregator::from_entries(loaded.entries);

    match cli.command {
        Some(Commands::Daily) => handle_distribution(&agg, Dimension::Day, &ctx),
        Some(Commands::Monthly { month: Some(m) }) => handle_month_lookup(&agg, m, &ctx)?,
        Some(Commands::Monthly { month: None }) => {
            handle_distribution(&agg, Dimension::Month, &ctx)
        }
        Some(Commands::Summary) => handle_summary(&agg, &ctx),
        Some(Commands::Total) => handle_total(&agg, &ctx),
        // Hourly is the default
        Some(Commands::Hourly) | None => handle_distribution(&agg, Dimension::Hour, &ctx),
    }

    Ok(())
}

fn handle_distribution(agg: &Aggregator, dimension: Dimension, ctx: &CommandContext<'_>) {
    let counts = match dimension {
        Dimension::Hour => agg.hour_counts(),
        Dimension::Day => agg.day_counts(),
        Dimension::Month => agg.month_counts(),
    };
    if ctx.cli.json {
        println!(
            "{}",
            output_distribution_json(dimension, counts, ctx.cli.order)
        );
    } else {
        print_distribution_table(dimension, counts, ctx.table_options());
        print_summary_line(
            agg.total(),
            ctx.skipped_lines + agg.skipped(),
            ctx.file_count,
            ctx.number_format,
            ctx.cli.use_color(),
        );
    }
}

fn handle_month_lookup(agg: &Aggregator, month: u32, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidMonth {
            input: month.to_string(),
        });
    }
    let count = query::total_for_month(agg.month_counts(), month as usize);
    if ctx.cli.json {
        println!("{}", output_month_count_json(month, count));
    } else {
        println!("{count}");
    }
    Ok(())
}

fn handle_summary(agg: &Aggregator, ctx: &CommandContext<'_>) {
    if ctx.cli.json {
        println!("{}", output_summary_json(agg, ctx.skipped_lines));
    } else {
        print_summary_table(agg, ctx.table_options());
        print_summary_line(
            agg.total(),
            ctx.skipped_lines + agg.skipped(),
            ctx.file_count,
            ctx.number_format,
            ctx.cli.use_color(),
        );
    }
}

fn handle_total(agg: &Aggregator, ctx: &CommandContext<'_>) {
    if ctx.cli.json {
        println!("{}", output_total_json(agg.total()));
    } else {
        println!("{}", agg.total());
    }
}
