//! Parsers for structured command line values.

use tabguard_model::ScalarType;

/// Parses a `COLUMN=TYPE` type hint.
///
/// The column name is kept verbatim; the type accepts any name or alias
/// listed by `tabguard types`.
///
/// ```
/// use tabguard_cli::args::parse_column_type;
/// use tabguard_model::ScalarType;
///
/// assert_eq!(
///     parse_column_type("customer_id=int").unwrap(),
///     ("customer_id".to_string(), ScalarType::Integer)
/// );
/// assert!(parse_column_type("customer_id").is_err());
/// ```
pub fn parse_column_type(value: &str) -> Result<(String, ScalarType), String> {
    let Some((column, ty)) = value.rsplit_once('=') else {
        return Err(format!("expected COLUMN=TYPE, got '{value}'"));
    };
    if column.is_empty() {
        return Err(format!("missing column name in '{value}'"));
    }
    let ty = ty.parse::<ScalarType>().map_err(|e| e.to_string())?;
    Ok((column.to_string(), ty))
}
