//! CSV header sniffing.
//!
//! The header row is read ahead of the Polars parse so that date and type
//! hints can be checked against the real column names.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{LoadError, Result};

/// Column names from the first row of a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeader {
    pub columns: Vec<String>,
}

impl CsvHeader {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

/// Strips a UTF-8 byte order mark from a header value.
fn normalize_header(value: &str) -> String {
    value.strip_prefix('\u{feff}').unwrap_or(value).to_string()
}

/// Reads the header row of a CSV file.
///
/// Returns `None` when the file has no header row at all.
pub fn read_header(path: &Path) -> Result<Option<CsvHeader>> {
    let csv_error = |e: csv::Error| LoadError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let mut record = StringRecord::new();
    if !reader.read_record(&mut record).map_err(csv_error)? {
        return Ok(None);
    }

    let columns: Vec<String> = record.iter().map(normalize_header).collect();
    if columns.iter().all(String::is_empty) {
        return Ok(None);
    }

    for (idx, column) in columns.iter().enumerate() {
        if columns[..idx].contains(column) {
            return Err(LoadError::CsvParse {
                path: path.to_path_buf(),
                message: format!("duplicate column name '{column}' in header"),
            });
        }
    }

    Ok(Some(CsvHeader { columns }))
}
