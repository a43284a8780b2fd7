//! Load summary printed after a successful load.

use std::fmt;

use chrono::NaiveDateTime;
use polars::prelude::DataFrame;
use tabguard_common::format_bytes;

/// Earliest and latest value of a parsed date column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub column: String,
    pub min: NaiveDateTime,
    pub max: NaiveDateTime,
}

/// Shape and footprint of a loaded table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows: usize,
    pub columns: usize,
    /// Estimated in-memory size of the table.
    pub memory_bytes: usize,
    pub date_ranges: Vec<DateRange>,
}

impl LoadSummary {
    /// Summarises `df`. Ranges for date columns the cleanup dropped are
    /// left out.
    pub fn from_frame(df: &DataFrame, date_ranges: Vec<DateRange>) -> Self {
        let date_ranges = date_ranges
            .into_iter()
            .filter(|range| df.column(&range.column).is_ok())
            .collect();
        Self {
            rows: df.height(),
            columns: df.width(),
            memory_bytes: df.estimated_size(),
            date_ranges,
        }
    }
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully loaded {} rows and {} columns\nMemory usage: {}",
            self.rows,
            self.columns,
            format_bytes(self.memory_bytes)
        )?;
        for range in &self.date_ranges {
            write!(
                f,
                "\nDate range for {}: {} to {}",
                range.column, range.min, range.max
            )?;
        }
        Ok(())
    }
}
