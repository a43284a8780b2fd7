//! Empty row and column removal.

use polars::prelude::*;

/// Drops rows in which every value is null.
pub fn drop_empty_rows(df: &DataFrame) -> PolarsResult<DataFrame> {
    let mut keep = BooleanChunked::full("keep".into(), false, df.height());
    for column in df.get_columns() {
        keep = &keep | &column.is_not_null();
    }
    df.filter(&keep)
}

/// Drops columns in which every value is null.
///
/// A frame with no rows left has no non-null values, so every column goes.
pub fn drop_empty_columns(df: &DataFrame) -> PolarsResult<DataFrame> {
    let keep: Vec<PlSmallStr> = df
        .get_columns()
        .iter()
        .filter(|column| column.null_count() < column.len())
        .map(|column| column.name().clone())
        .collect();
    df.select(keep)
}

/// Drops empty rows, then empty columns.
pub fn drop_empty(df: &DataFrame) -> PolarsResult<DataFrame> {
    drop_empty_columns(&drop_empty_rows(df)?)
}
