//! Per-column checks.
//!
//! For one rule, checks run in this order:
//! 1. Presence (a missing column stops here)
//! 2. Data type, or, when the type matches, null values
//! 3. Minimum bound
//! 4. Maximum bound

mod bounds;
mod datatype;
mod required;

use polars::prelude::DataFrame;
use tabguard_model::ColumnRule;

use crate::violation::Violation;

/// Run every check of `rule` against column `name` of `df`.
pub fn run_all(name: &str, rule: &ColumnRule, df: &DataFrame) -> Vec<Violation> {
    let Ok(column) = df.column(name) else {
        return vec![Violation::MissingColumn {
            column: name.to_string(),
        }];
    };

    let mut violations = Vec::new();

    // A type mismatch suppresses the null check but not the bound checks.
    if let Some(violation) = datatype::check(name, rule, column) {
        violations.push(violation);
    } else if let Some(violation) = required::check(name, rule, column) {
        violations.push(violation);
    }

    violations.extend(bounds::check(name, rule, column));
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};
    use tabguard_model::ScalarType;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("id".into(), vec![Some("a"), None]).into_column(),
            Series::new("n".into(), vec![Some(1i64), None]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn missing_column_short_circuits() {
        let rule = ColumnRule::new()
            .with_type(ScalarType::Integer)
            .required()
            .with_min(0.0)
            .with_max(1.0);
        let violations = run_all("region", &rule, &frame());
        assert_eq!(
            violations,
            vec![Violation::MissingColumn {
                column: "region".to_string()
            }]
        );
    }

    #[test]
    fn type_mismatch_suppresses_null_check() {
        let rule = ColumnRule::new().with_type(ScalarType::Integer).required();
        let violations = run_all("id", &rule, &frame());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].check(), "type");
    }

    #[test]
    fn null_check_runs_when_type_matches() {
        let rule = ColumnRule::new().with_type(ScalarType::Integer).required();
        let violations = run_all("n", &rule, &frame());
        assert_eq!(
            violations,
            vec![Violation::NullValues {
                column: "n".to_string(),
                null_count: 1
            }]
        );
    }

    #[test]
    fn bounds_run_after_type_mismatch() {
        let rule = ColumnRule::new()
            .with_type(ScalarType::String)
            .required()
            .with_min(5.0);
        let violations = run_all("n", &rule, &frame());
        let checks: Vec<&str> = violations.iter().map(Violation::check).collect();
        assert_eq!(checks, vec!["type", "minimum"]);
    }
}
