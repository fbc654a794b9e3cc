//! File-backed access-log source
//!
//! Reads plain-text web server logs, either from explicitly named files or
//! by scanning a directory for `*.log` files.

pub(crate) mod parser;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::source::{ParsedFile, Source};
use crate::utils::line_debug_enabled;

pub(crate) struct AccessLogSource {
    files: Vec<PathBuf>,
    log_dir: PathBuf,
}

impl AccessLogSource {
    /// Explicit files take priority; otherwise `log_dir` is scanned.
    pub(crate) fn new(files: Vec<PathBuf>, log_dir: Option<PathBuf>) -> Self {
        AccessLogSource {
            files,
            log_dir: log_dir.unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    fn discover(&self) -> Vec<PathBuf> {
        let pattern = format!("{}/**/*.log", self.log_dir.display());
        let mut found = Vec::new();
        if let Ok(paths) = glob::glob(&pattern) {
            for path in paths.flatten() {
                found.push(path);
            }
        }
        found.sort();
        found
    }
}

impl Source for AccessLogSource {
    fn display_name(&self) -> &'static str {
        "access log"
    }

    fn find_files(&self) -> Result<Vec<PathBuf>, AppError> {
        if !self.files.is_empty() {
            // Explicitly named files must exist; discovery failures there
            // should not be silent.
            for path in &self.files {
                if !path.is_file() {
                    return Err(AppError::Io {
                        path: path.display().to_string(),
                        source: std::io::Error::new(
                            std::io::ErrorKind::NotFound,
                            "no such file",
                        ),
                    });
                }
            }
            return Ok(self.files.clone());
        }
        Ok(self.discover())
    }

    fn parse_file(&self, path: &Path) -> Result<ParsedFile, AppError> {
        let file = File::open(path).map_err(|err| AppError::Io {
            path: path.display().to_string(),
            source: err,
        })?;
        let reader = BufReader::new(file);

        let mut parsed = ParsedFile::default();
        for (line_no, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    if line_debug_enabled() {
                        eprintln!(
                            "Failed to read line {} in {}: {}",
                            line_no + 1,
                            path.display(),
                            err
                        );
                    }
                    parsed.skipped_lines += 1;
                    continue;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match parser::parse_line(&line) {
                Ok(entry) => parsed.entries.push(entry),
                Err(err) => {
                    if line_debug_enabled() {
                        eprintln!("Bad line at {}:{}: {}", path.display(), line_no + 1, err);
                    }
                    parsed.skipped_lines += 1;
                }
            }
        }
        Ok(parsed)
    }
}
