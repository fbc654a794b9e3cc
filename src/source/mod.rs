//! Log-entry source abstraction
//!
//! A source knows how to discover its backing files and parse one file into
//! `LogEntry` values. The loader drives discovery and parsing, handing the
//! aggregation core a single forward-only sequence it consumes exactly once.

pub(crate) mod accesslog;
pub(crate) mod loader;

use std::path::{Path, PathBuf};

use crate::core::LogEntry;
use crate::error::AppError;

/// Entries parsed from one file plus the malformed-line count.
#[derive(Debug, Default)]
pub(crate) struct ParsedFile {
    pub(crate) entries: Vec<LogEntry>,
    pub(crate) skipped_lines: u64,
}

/// A discoverable, file-backed supply of log entries.
pub(crate) trait Source: Send + Sync {
    /// Display name for progress output
    fn display_name(&self) -> &'static str;

    /// Find all data files for this source
    fn find_files(&self) -> Result<Vec<PathBuf>, AppError>;

    /// Parse a single file into entries, skipping malformed lines
    fn parse_file(&self, path: &Path) -> Result<ParsedFile, AppError>;
}

pub(crate) use accesslog::AccessLogSource;
pub(crate) use loader::load_entries;
