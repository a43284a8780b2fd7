//! Load options.

use std::collections::BTreeMap;

use polars::prelude::DataType;
use tabguard_common::dtype_for;
use tabguard_model::{RuleSet, ScalarType};

/// Hints and rules applied by [`load`](crate::load).
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Columns parsed as datetimes.
    pub date_columns: Vec<String>,

    /// Column name -> scalar type the column is read as.
    pub column_types: BTreeMap<String, ScalarType>,

    /// Rules the cleaned table must satisfy.
    pub rules: Option<RuleSet>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a date column.
    pub fn with_date_column(mut self, column: impl Into<String>) -> Self {
        self.date_columns.push(column.into());
        self
    }

    /// Add several date columns.
    pub fn with_date_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Set the type of one column, replacing any earlier hint for it.
    pub fn with_column_type(mut self, column: impl Into<String>, ty: ScalarType) -> Self {
        self.column_types.insert(column.into(), ty);
        self
    }

    /// Set column types from `(column, type)` pairs.
    pub fn with_column_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = (S, ScalarType)>,
        S: Into<String>,
    {
        self.column_types
            .extend(types.into_iter().map(|(column, ty)| (column.into(), ty)));
        self
    }

    /// Set the rule set.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Every column to parse as a datetime: the explicit date columns, then
    /// columns typed `datetime`. Duplicates are dropped.
    pub fn resolved_date_columns(&self) -> Vec<String> {
        let typed = self
            .column_types
            .iter()
            .filter(|(_, ty)| **ty == ScalarType::Datetime)
            .map(|(column, _)| column);

        let mut columns: Vec<String> = Vec::new();
        for column in self.date_columns.iter().chain(typed) {
            if !columns.contains(column) {
                columns.push(column.clone());
            }
        }
        columns
    }

    /// Dtype a header column is read as, if it has a hint.
    ///
    /// Date columns are read as text and parsed afterwards.
    pub(crate) fn read_dtype(&self, column: &str, date_columns: &[String]) -> Option<DataType> {
        if date_columns.iter().any(|c| c == column) {
            return Some(DataType::String);
        }
        self.column_types.get(column).map(|ty| dtype_for(*ty))
    }
}
