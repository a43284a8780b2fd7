//! Column validation against a [`RuleSet`].
//!
//! [`validate`] never fails: it reports every violation it finds, in rule
//! order, and leaves the decision of what to do with them to the caller.
//!
//! # Example
//!
//! ```
//! use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
//! use tabguard_model::{ColumnRule, RuleSet};
//! use tabguard_validate::validate;
//!
//! let df = DataFrame::new(vec![
//!     Series::new("customer_id".into(), vec![120i64, 50]).into_column(),
//! ])
//! .unwrap();
//! let rules = RuleSet::new().with_rule("customer_id", ColumnRule::new().with_min(100.0));
//!
//! let (passed, messages) = validate(&df, &rules).into_parts();
//! assert!(!passed);
//! assert_eq!(messages, vec!["Column 'customer_id' contains values below minimum 100"]);
//! ```

mod checks;
mod report;
mod violation;

pub use report::ValidationReport;
pub use violation::Violation;

use polars::prelude::DataFrame;
use tabguard_model::RuleSet;
use tracing::{debug, debug_span};

/// Check `df` against every rule in `rules`, in rule order.
pub fn validate(df: &DataFrame, rules: &RuleSet) -> ValidationReport {
    let _span = debug_span!("validate", rules = rules.len()).entered();
    let mut report = ValidationReport::new();
    for (column, rule) in rules.iter() {
        for violation in checks::run_all(column, rule, df) {
            report.add(violation);
        }
    }
    debug!(violations = report.len(), "validation finished");
    report
}
