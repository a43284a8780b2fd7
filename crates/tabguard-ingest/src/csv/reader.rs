//! CSV file reading with per-column dtype overrides.

use std::path::Path;
use std::sync::Arc;

use polars::prelude::*;

use crate::error::{LoadError, Result};

/// Field values read as null, in addition to empty fields.
pub const NULL_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Checks that `path` names a readable regular file.
///
/// Directories and missing paths both count as not found.
pub fn ensure_file(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(()),
        Ok(_) => Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(LoadError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Reads a CSV file into a DataFrame.
///
/// Columns listed in `overrides` are read as the given dtype; all other
/// dtypes are inferred from the whole file. A value that cannot be read as
/// its override dtype fails the read. Empty fields and [`NULL_TOKENS`] are
/// null.
pub fn read_frame(path: &Path, overrides: &[(String, DataType)]) -> Result<DataFrame> {
    let schema: Schema = overrides
        .iter()
        .map(|(name, dtype)| (PlSmallStr::from(name.as_str()), dtype.clone()))
        .collect();

    let csv_error = |e: PolarsError| match e {
        PolarsError::NoData(_) => LoadError::EmptyCsv,
        other => LoadError::CsvParse {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    };

    let null_values = NullValues::AllColumns(
        NULL_TOKENS
            .iter()
            .map(|token| PlSmallStr::from(*token))
            .collect(),
    );

    CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_null_values(Some(null_values)))
        .with_infer_schema_length(None)
        .with_schema_overwrite(Some(Arc::new(schema)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(csv_error)?
        .finish()
        .map_err(csv_error)
}
