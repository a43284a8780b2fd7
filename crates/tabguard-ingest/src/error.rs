//! Error types for CSV loading.

use std::path::PathBuf;

use tabguard_validate::Violation;
use thiserror::Error;

/// Broad failure class of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input path does not resolve to a file.
    NotFound,
    /// Input holds no data, or the loaded table broke a rule.
    DataValidation,
    /// Input could not be read, parsed, or coerced.
    ParseFailure,
}

/// Errors that can occur while loading a CSV file.
#[derive(Debug, Error)]
pub enum LoadError {
    // === Not found ===
    #[error("CSV file not found at: {}", .path.display())]
    FileNotFound { path: PathBuf },

    // === Data validation ===
    /// No header, or no data rows.
    #[error("The CSV file is empty")]
    EmptyCsv,

    /// The loaded table failed its rule set.
    #[error("{}", join_lines(.violations))]
    RuleViolations { violations: Vec<Violation> },

    // === Parse failures ===
    #[error("Error reading CSV file: failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading CSV file: {message}")]
    CsvParse { path: PathBuf, message: String },

    #[error("Error reading CSV file: date column '{column}' not found in header")]
    MissingDateColumn { column: String },

    #[error(
        "Error reading CSV file: could not parse '{value}' as a date in column '{column}' (row {row})"
    )]
    DateParse {
        column: String,
        /// 1-based data row, header excluded.
        row: usize,
        value: String,
    },

    #[error("Error reading CSV file: {message}")]
    DataFrame { message: String },
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::FileNotFound { .. } => ErrorKind::NotFound,
            LoadError::EmptyCsv | LoadError::RuleViolations { .. } => ErrorKind::DataValidation,
            LoadError::FileRead { .. }
            | LoadError::CsvParse { .. }
            | LoadError::MissingDateColumn { .. }
            | LoadError::DateParse { .. }
            | LoadError::DataFrame { .. } => ErrorKind::ParseFailure,
        }
    }

    /// Rule violations carried by a [`LoadError::RuleViolations`].
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            LoadError::RuleViolations { violations } => Some(violations),
            _ => None,
        }
    }
}

impl From<polars::prelude::PolarsError> for LoadError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

fn join_lines(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type for load operations.
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found at: /path/to/file.csv");
        assert_eq!(err.kind(), ErrorKind::NotFound);

        assert_eq!(LoadError::EmptyCsv.to_string(), "The CSV file is empty");
        assert_eq!(LoadError::EmptyCsv.kind(), ErrorKind::DataValidation);
    }

    #[test]
    fn test_rule_violations_join_with_newlines() {
        let err = LoadError::RuleViolations {
            violations: vec![
                Violation::MissingColumn {
                    column: "region".to_string(),
                },
                Violation::NullValues {
                    column: "id".to_string(),
                    null_count: 1,
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "Required column 'region' is missing\nColumn 'id' contains null values"
        );
        assert_eq!(err.violations().map(<[Violation]>::len), Some(2));
    }

    #[test]
    fn test_parse_failures_are_prefixed() {
        let err = LoadError::DateParse {
            column: "order_date".to_string(),
            row: 2,
            value: "not-a-date".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::ParseFailure);
        assert!(err.to_string().starts_with("Error reading CSV file: "));
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let load_err: LoadError = polars_err.into();
        assert!(matches!(load_err, LoadError::DataFrame { .. }));
        assert_eq!(load_err.kind(), ErrorKind::ParseFailure);
    }
}
