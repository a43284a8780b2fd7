//! Polars helper functions.
//!
//! Maps between [`ScalarType`] and Polars dtypes, computes numeric column
//! ranges, and formats numbers and byte counts for messages.

use polars::prelude::{Column, DataType, PolarsResult, TimeUnit};
use tabguard_model::ScalarType;

/// Polars dtype a column is coerced to for the given scalar type.
///
/// Datetime columns use millisecond precision without a time zone.
pub fn dtype_for(scalar: ScalarType) -> DataType {
    match scalar {
        ScalarType::Integer => DataType::Int64,
        ScalarType::Float => DataType::Float64,
        ScalarType::String => DataType::String,
        ScalarType::Datetime => DataType::Datetime(TimeUnit::Milliseconds, None),
        ScalarType::Boolean => DataType::Boolean,
    }
}

/// Scalar type of a Polars dtype, or `None` for dtypes outside the model
/// (lists, structs, categoricals, durations, ...).
pub fn scalar_type_of(dtype: &DataType) -> Option<ScalarType> {
    if dtype.is_integer() {
        return Some(ScalarType::Integer);
    }
    if dtype.is_float() {
        return Some(ScalarType::Float);
    }
    match dtype {
        DataType::String => Some(ScalarType::String),
        DataType::Boolean => Some(ScalarType::Boolean),
        DataType::Date | DataType::Datetime(_, _) => Some(ScalarType::Datetime),
        _ => None,
    }
}

/// One extreme of a numeric column, kept in the column's number domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Integer(i128),
    Float(f64),
}

impl NumericValue {
    /// True when the value is strictly less than `bound`.
    ///
    /// Integers compare exactly: `v < b` holds iff `v < ceil(b)`.
    pub fn is_below(self, bound: f64) -> bool {
        match self {
            NumericValue::Integer(_) if bound.is_nan() => false,
            NumericValue::Integer(value) => value < bound.ceil() as i128,
            NumericValue::Float(value) => value < bound,
        }
    }

    /// True when the value is strictly greater than `bound`.
    pub fn is_above(self, bound: f64) -> bool {
        match self {
            NumericValue::Integer(_) if bound.is_nan() => false,
            NumericValue::Integer(value) => value > bound.floor() as i128,
            NumericValue::Float(value) => value > bound,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            NumericValue::Integer(value) => value as f64,
            NumericValue::Float(value) => value,
        }
    }
}

/// Minimum and maximum of a numeric column, ignoring nulls and NaN.
///
/// Integer columns keep their exact values. Returns `None` when the column
/// has no non-null values.
pub fn numeric_range(column: &Column) -> PolarsResult<Option<(NumericValue, NumericValue)>> {
    let series = column.as_materialized_series();
    let dtype = series.dtype();

    if dtype.is_unsigned_integer() {
        let values = series.cast(&DataType::UInt64)?;
        let range = extremes(values.u64()?.into_iter().flatten().map(i128::from));
        return Ok(range.map(|(lo, hi)| (NumericValue::Integer(lo), NumericValue::Integer(hi))));
    }
    if dtype.is_integer() {
        let values = series.cast(&DataType::Int64)?;
        let range = extremes(values.i64()?.into_iter().flatten().map(i128::from));
        return Ok(range.map(|(lo, hi)| (NumericValue::Integer(lo), NumericValue::Integer(hi))));
    }

    let values = series.cast(&DataType::Float64)?;
    let range = values
        .f64()?
        .into_iter()
        .flatten()
        .filter(|value| !value.is_nan())
        .fold(None, |acc: Option<(f64, f64)>, value| match acc {
            None => Some((value, value)),
            Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
        });
    Ok(range.map(|(lo, hi)| (NumericValue::Float(lo), NumericValue::Float(hi))))
}

fn extremes(values: impl Iterator<Item = i128>) -> Option<(i128, i128)> {
    values.fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
    })
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use tabguard_common::format_numeric;
///
/// assert_eq!(format_numeric(100.0), "100");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Human-readable byte count (`512 B`, `1.5 KiB`, `2.0 MiB`).
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
