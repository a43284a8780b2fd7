//! Date column parsing.
//!
//! Date columns are read as text and converted here, so the accepted formats
//! do not depend on Polars' inference.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::*;
use tabguard_common::dtype_for;
use tabguard_model::ScalarType;

use crate::error::{LoadError, Result};
use crate::summary::DateRange;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%Y%m%d"];

/// Parses one date or date-time value. The first matching format wins.
///
/// RFC 3339 values with an offset are converted to UTC; bare dates become
/// midnight.
///
/// ```
/// use tabguard_ingest::parse_datetime;
///
/// let parsed = parse_datetime("2024-03-01").unwrap();
/// assert_eq!(parsed.to_string(), "2024-03-01 00:00:00");
/// assert!(parse_datetime("yesterday").is_none());
/// ```
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Replaces a text column with its parsed datetime equivalent.
///
/// Null and blank values stay null. Returns the range of parsed values, or
/// `None` when the column holds no dates.
pub fn parse_date_column(df: &mut DataFrame, name: &str) -> Result<Option<DateRange>> {
    let text = df.column(name)?.cast(&DataType::String)?;

    let mut millis = Vec::with_capacity(text.len());
    let mut range: Option<(NaiveDateTime, NaiveDateTime)> = None;
    for (idx, value) in text.str()?.into_iter().enumerate() {
        let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
            millis.push(None);
            continue;
        };
        let parsed = parse_datetime(raw).ok_or_else(|| LoadError::DateParse {
            column: name.to_string(),
            row: idx + 1,
            value: raw.to_string(),
        })?;
        range = Some(match range {
            None => (parsed, parsed),
            Some((lo, hi)) => (lo.min(parsed), hi.max(parsed)),
        });
        millis.push(Some(parsed.and_utc().timestamp_millis()));
    }

    let series =
        Series::new(name.into(), millis).cast(&dtype_for(ScalarType::Datetime))?;
    df.with_column(series)?;

    Ok(range.map(|(min, max)| DateRange {
        column: name.to_string(),
        min,
        max,
    }))
}
