//! Property tests for the validator.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;
use tabguard_model::{ColumnRule, RuleSet, ScalarType};
use tabguard_validate::validate;

fn frame(values: &[Option<i64>]) -> DataFrame {
    DataFrame::new(vec![
        Series::new("value".into(), values.to_vec()).into_column(),
        Series::new(
            "label".into(),
            values
                .iter()
                .map(|v| v.map(|n| format!("n{n}")))
                .collect::<Vec<_>>(),
        )
        .into_column(),
    ])
    .unwrap()
}

fn rule_strategy() -> impl Strategy<Value = ColumnRule> {
    (
        prop::option::of(prop::sample::select(ScalarType::ALL.to_vec())),
        any::<bool>(),
        prop::option::of(-100i64..100),
        prop::option::of(-100i64..100),
    )
        .prop_map(|(dtype, required, min, max)| ColumnRule {
            dtype,
            required,
            min: min.map(|v| v as f64),
            max: max.map(|v| v as f64),
        })
}

fn rules_strategy() -> impl Strategy<Value = RuleSet> {
    prop::collection::vec(
        (prop::sample::select(vec!["value", "label", "absent"]), rule_strategy()),
        0..4,
    )
    .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn validate_is_idempotent(
        values in prop::collection::vec(prop::option::of(-1000i64..1000), 0..20),
        rules in rules_strategy(),
    ) {
        let df = frame(&values);
        let first = validate(&df, &rules);
        let second = validate(&df, &rules);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn empty_rules_always_pass(
        values in prop::collection::vec(prop::option::of(any::<i64>()), 0..20),
    ) {
        let df = frame(&values);
        prop_assert_eq!(validate(&df, &RuleSet::new()).into_parts(), (true, Vec::new()));
    }

    #[test]
    fn bounds_enclosing_the_data_never_fire(
        values in prop::collection::vec(-1000i64..1000, 1..20),
    ) {
        let lo = *values.iter().min().unwrap() as f64;
        let hi = *values.iter().max().unwrap() as f64;
        let df = frame(&values.iter().copied().map(Some).collect::<Vec<_>>());
        let rules = RuleSet::new().with_rule(
            "value",
            ColumnRule::new().with_type(ScalarType::Integer).required().with_min(lo).with_max(hi),
        );
        prop_assert!(validate(&df, &rules).passed());
    }

    #[test]
    fn one_message_per_missing_column(rules in rules_strategy()) {
        let df = frame(&[Some(1)]);
        let report = validate(&df, &rules);
        let missing = report
            .violations()
            .iter()
            .filter(|v| v.check() == "presence")
            .count();
        let absent_rules = rules.iter().filter(|(name, _)| *name == "absent").count();
        prop_assert_eq!(missing, absent_rules);
    }
}
