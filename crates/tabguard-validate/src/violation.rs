//! Rule violation types.
//!
//! Each variant carries only the data its message needs; `Display` renders
//! the one-line description reported to users.

use std::fmt;

use tabguard_common::format_numeric;
use tabguard_model::ScalarType;

#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// Rule names a column the table does not have
    MissingColumn { column: String },
    /// Column dtype differs from the rule's required type
    TypeMismatch {
        column: String,
        expected: ScalarType,
        actual: Option<ScalarType>,
    },
    /// Required column has null values
    NullValues { column: String, null_count: usize },
    /// Column minimum is below the rule's lower bound
    BelowMinimum {
        column: String,
        minimum: f64,
        found: f64,
    },
    /// Column maximum is above the rule's upper bound
    AboveMaximum {
        column: String,
        maximum: f64,
        found: f64,
    },
}

impl Violation {
    pub fn column(&self) -> &str {
        match self {
            Violation::MissingColumn { column }
            | Violation::TypeMismatch { column, .. }
            | Violation::NullValues { column, .. }
            | Violation::BelowMinimum { column, .. }
            | Violation::AboveMaximum { column, .. } => column,
        }
    }

    /// Short name of the check that produced this violation.
    pub fn check(&self) -> &'static str {
        match self {
            Violation::MissingColumn { .. } => "presence",
            Violation::TypeMismatch { .. } => "type",
            Violation::NullValues { .. } => "nulls",
            Violation::BelowMinimum { .. } => "minimum",
            Violation::AboveMaximum { .. } => "maximum",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingColumn { column } => {
                write!(f, "Required column '{column}' is missing")
            }
            Violation::TypeMismatch {
                column, expected, ..
            } => write!(f, "Column '{column}' should be of type {expected}"),
            Violation::NullValues { column, .. } => {
                write!(f, "Column '{column}' contains null values")
            }
            Violation::BelowMinimum {
                column, minimum, ..
            } => write!(
                f,
                "Column '{column}' contains values below minimum {}",
                format_numeric(*minimum)
            ),
            Violation::AboveMaximum {
                column, maximum, ..
            } => write!(
                f,
                "Column '{column}' contains values above maximum {}",
                format_numeric(*maximum)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let cases = [
            (
                Violation::MissingColumn {
                    column: "region".to_string(),
                },
                "Required column 'region' is missing",
            ),
            (
                Violation::TypeMismatch {
                    column: "id".to_string(),
                    expected: ScalarType::Integer,
                    actual: Some(ScalarType::String),
                },
                "Column 'id' should be of type integer",
            ),
            (
                Violation::NullValues {
                    column: "id".to_string(),
                    null_count: 2,
                },
                "Column 'id' contains null values",
            ),
            (
                Violation::BelowMinimum {
                    column: "amount".to_string(),
                    minimum: 0.0,
                    found: -3.0,
                },
                "Column 'amount' contains values below minimum 0",
            ),
            (
                Violation::AboveMaximum {
                    column: "ratio".to_string(),
                    maximum: 0.75,
                    found: 0.9,
                },
                "Column 'ratio' contains values above maximum 0.75",
            ),
        ];
        for (violation, expected) in cases {
            assert_eq!(violation.to_string(), expected);
        }
    }

    #[test]
    fn column_and_check() {
        let violation = Violation::NullValues {
            column: "email".to_string(),
            null_count: 1,
        };
        assert_eq!(violation.column(), "email");
        assert_eq!(violation.check(), "nulls");
    }
}
