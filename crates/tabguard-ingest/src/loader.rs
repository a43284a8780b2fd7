//! The load pipeline: read, parse dates, check for data, clean up, validate.

use std::path::Path;

use polars::prelude::*;
use tabguard_validate::validate;
use tracing::{debug, info, info_span, warn};

use crate::cleanup::drop_empty;
use crate::csv::{ensure_file, read_frame, read_header};
use crate::dates::parse_date_column;
use crate::error::{LoadError, Result};
use crate::options::LoadOptions;
use crate::summary::LoadSummary;

/// Loads a CSV file into a cleaned DataFrame.
///
/// Prints a [`LoadSummary`] to stdout on success.
///
/// # Errors
///
/// - [`LoadError::FileNotFound`] if `path` is not a file.
/// - [`LoadError::EmptyCsv`] if the file has no header or no data rows.
/// - [`LoadError::RuleViolations`] if the cleaned table fails `options.rules`.
/// - A parse failure for anything that cannot be read, parsed, or coerced.
pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<DataFrame> {
    let (df, summary) = load_with_summary(path.as_ref(), options)?;
    println!("{summary}");
    Ok(df)
}

/// Runs the load pipeline and returns the summary instead of printing it.
pub fn load_with_summary(path: &Path, options: &LoadOptions) -> Result<(DataFrame, LoadSummary)> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();

    ensure_file(path)?;

    let Some(header) = read_header(path)? else {
        return Err(LoadError::EmptyCsv);
    };
    debug!(columns = header.len(), "read header");

    let date_columns = options.resolved_date_columns();
    if let Some(missing) = date_columns.iter().find(|c| !header.contains(c)) {
        return Err(LoadError::MissingDateColumn {
            column: missing.clone(),
        });
    }
    for column in options.column_types.keys() {
        if !header.contains(column) {
            warn!(column = %column, "ignoring type hint for column not in header");
        }
    }

    let overrides: Vec<(String, DataType)> = header
        .columns
        .iter()
        .filter_map(|column| {
            options
                .read_dtype(column, &date_columns)
                .map(|dtype| (column.clone(), dtype))
        })
        .collect();

    let mut df = read_frame(path, &overrides)?;
    debug!(rows = df.height(), columns = df.width(), "parsed csv");

    let mut date_ranges = Vec::new();
    for column in &date_columns {
        if let Some(range) = parse_date_column(&mut df, column)? {
            date_ranges.push(range);
        }
    }
    debug!(columns = date_columns.len(), "parsed date columns");

    if df.height() == 0 || df.width() == 0 {
        return Err(LoadError::EmptyCsv);
    }

    let df = drop_empty(&df)?;
    debug!(rows = df.height(), columns = df.width(), "dropped empty rows and columns");

    if let Some(rules) = &options.rules {
        let report = validate(&df, rules);
        if !report.passed() {
            debug!(violations = report.len(), "rule set failed");
            return Err(LoadError::RuleViolations {
                violations: report.into_violations(),
            });
        }
    }

    let summary = LoadSummary::from_frame(&df, date_ranges);
    info!(rows = summary.rows, columns = summary.columns, "load finished");
    Ok((df, summary))
}
