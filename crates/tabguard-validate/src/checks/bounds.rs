//! Numeric bound checks.
//!
//! Bounds only apply to integer and float columns. Nulls are ignored, so a
//! column without values never violates a bound.

use polars::prelude::Column;
use tabguard_common::{numeric_range, scalar_type_of};
use tabguard_model::ColumnRule;
use tracing::debug;

use crate::violation::Violation;

/// Compare the column minimum and maximum against the rule's bounds.
pub fn check(name: &str, rule: &ColumnRule, column: &Column) -> Vec<Violation> {
    let mut violations = Vec::new();
    if rule.min.is_none() && rule.max.is_none() {
        return violations;
    }

    if !scalar_type_of(column.dtype()).is_some_and(|ty| ty.is_numeric()) {
        debug!(column = name, dtype = %column.dtype(), "skipping bound checks on non-numeric column");
        return violations;
    }

    let (lowest, highest) = match numeric_range(column) {
        Ok(Some(range)) => range,
        Ok(None) => return violations,
        Err(error) => {
            debug!(column = name, %error, "could not compute column range");
            return violations;
        }
    };

    if let Some(minimum) = rule.min
        && lowest.is_below(minimum)
    {
        violations.push(Violation::BelowMinimum {
            column: name.to_string(),
            minimum,
            found: lowest.as_f64(),
        });
    }
    if let Some(maximum) = rule.max
        && highest.is_above(maximum)
    {
        violations.push(Violation::AboveMaximum {
            column: name.to_string(),
            maximum,
            found: highest.as_f64(),
        });
    }
    violations
}
