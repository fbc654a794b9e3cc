use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No log files found. Pass --file or point --log-dir at a directory with *.log files.")]
    NoLogFiles,

    #[error("Invalid month \"{input}\" (expected 1-12)")]
    InvalidMonth { input: String },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_io() {
        let e = AppError::Io {
            path: "access.log".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(e.to_string(), "Failed to read access.log: no such file");
    }

    #[test]
    fn app_error_display_month() {
        let e = AppError::InvalidMonth {
            input: "13".to_string(),
        };
        assert_eq!(e.to_string(), r#"Invalid month "13" (expected 1-12)"#);
    }

    #[test]
    fn app_error_display_locale() {
        let e = AppError::UnsupportedLocale {
            input: "xx".to_string(),
        };
        assert_eq!(e.to_string(), "Unsupported locale: xx");
    }

    #[test]
    fn app_error_display_no_files() {
        assert!(AppError::NoLogFiles.to_string().starts_with("No log files"));
    }
}
