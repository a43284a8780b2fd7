//! Column type check.

use polars::prelude::Column;
use tabguard_common::scalar_type_of;
use tabguard_model::ColumnRule;

use crate::violation::Violation;

/// Report a mismatch when the rule requires a type the column does not have.
pub fn check(name: &str, rule: &ColumnRule, column: &Column) -> Option<Violation> {
    let expected = rule.dtype?;
    let actual = scalar_type_of(column.dtype());
    if actual == Some(expected) {
        return None;
    }
    Some(Violation::TypeMismatch {
        column: name.to_string(),
        expected,
        actual,
    })
}
