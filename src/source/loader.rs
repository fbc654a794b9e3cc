//! Entry loader: discover, parse in parallel, flatten
//!
//! Parsing fans out across files with rayon; the result is a single
//! in-memory sequence the aggregation core drains in one sequential pass.

use rayon::prelude::*;
use std::time::Instant;

use crate::core::LogEntry;
use crate::error::AppError;
use crate::source::{ParsedFile, Source};

/// Everything the loader learned in one load.
#[derive(Debug)]
pub(crate) struct LoadedEntries {
    pub(crate) entries: Vec<LogEntry>,
    pub(crate) skipped_lines: u64,
    pub(crate) file_count: usize,
}

/// Load all entries for a source. Fails when an explicitly named file is
/// missing or unreadable; directory discovery finding nothing is reported
/// as `NoLogFiles` so the caller can print a useful message.
pub(crate) fn load_entries(source: &dyn Source, quiet: bool) -> Result<LoadedEntries, AppError> {
    let discovery_start = Instant::now();
    let files = source.find_files()?;
    let discovery_ms = discovery_start.elapsed().as_secs_f64() * 1000.0;

    if files.is_empty() {
        return Err(AppError::NoLogFiles);
    }

    if !quiet {
        eprintln!(
            "Scanning {} {} files... ({:.2}ms)",
            files.len(),
            source.display_name(),
            discovery_ms
        );
    }

    let parse_start = Instant::now();
    let parsed: Vec<ParsedFile> = files
        .par_iter()
        .map(|path| source.parse_file(path))
        .collect::<Result<_, _>>()?;
    let parse_ms = parse_start.elapsed().as_secs_f64() * 1000.0;

    let mut entries = Vec::new();
    let mut skipped_lines = 0;
    for file in parsed {
        entries.extend(file.entries);
        skipped_lines += file.skipped_lines;
    }

    if !quiet {
        eprintln!("Parsed {} files ({:.2}ms)", files.len(), parse_ms);
    }

    Ok(LoadedEntries {
        entries,
        skipped_lines,
        file_count: files.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::AccessLogSource;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_across_multiple_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("one.log"), "2024 3 5 9 30\n2024 3 5 9 45\n").unwrap();
        fs::write(dir.path().join("two.log"), "2024 4 6 14 00\nbroken\n").unwrap();

        let source = AccessLogSource::new(Vec::new(), Some(dir.path().to_path_buf()));
        let loaded = load_entries(&source, true).unwrap();
        assert_eq!(loaded.file_count, 2);
        assert_eq!(loaded.entries.len(), 3);
        assert_eq!(loaded.skipped_lines, 1);
    }

    #[test]
    fn empty_directory_is_no_log_files() {
        let dir = TempDir::new().unwrap();
        let source = AccessLogSource::new(Vec::new(), Some(dir.path().to_path_buf()));
        assert!(matches!(
            load_entries(&source, true),
            Err(AppError::NoLogFiles)
        ));
    }
}
