//! Null-value check for required columns.

use polars::prelude::Column;
use tabguard_model::ColumnRule;

use crate::violation::Violation;

/// Report nulls in a column the rule marks as required.
pub fn check(name: &str, rule: &ColumnRule, column: &Column) -> Option<Violation> {
    if !rule.required {
        return None;
    }
    let null_count = column.null_count();
    if null_count == 0 {
        return None;
    }
    Some(Violation::NullValues {
        column: name.to_string(),
        null_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn counts_nulls() {
        let column = Series::new("email".into(), vec![Some("a@b"), None, None]).into_column();
        let rule = ColumnRule::new().required();
        assert_eq!(
            check("email", &rule, &column),
            Some(Violation::NullValues {
                column: "email".to_string(),
                null_count: 2,
            })
        );
    }

    #[test]
    fn optional_columns_may_have_nulls() {
        let column = Series::new("email".into(), vec![None::<&str>]).into_column();
        assert_eq!(check("email", &ColumnRule::new(), &column), None);
    }

    #[test]
    fn complete_columns_pass() {
        let column = Series::new("email".into(), vec!["a@b", "c@d"]).into_column();
        assert_eq!(check("email", &ColumnRule::new().required(), &column), None);
    }
}
