//! Declarative column rules.
//!
//! A [`RuleSet`] maps column names to [`ColumnRule`]s and keeps the order in
//! which columns were first added; validation reports follow that order.
//!
//! Rule files are JSON objects keyed by column name:
//!
//! ```
//! use tabguard_model::{RuleSet, ScalarType};
//!
//! let rules = RuleSet::from_json_str(
//!     r#"{ "customer_id": { "type": "integer", "required": true, "min": 100 } }"#,
//! )
//! .unwrap();
//! let rule = rules.get("customer_id").unwrap();
//! assert_eq!(rule.dtype, Some(ScalarType::Integer));
//! assert_eq!(rule.min, Some(100.0));
//! ```

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ModelError, Result};
use crate::scalar::ScalarType;

/// Checks applied to a single column. Unset fields are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnRule {
    /// Required column type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub dtype: Option<ScalarType>,
    /// Column must not contain nulls.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Inclusive lower bound on the column minimum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Inclusive upper bound on the column maximum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl ColumnRule {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(mut self, dtype: ScalarType) -> Self {
        self.dtype = Some(dtype);
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Ordered mapping from column name to [`ColumnRule`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    entries: Vec<(String, ColumnRule)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rule for `column`.
    ///
    /// A replaced rule keeps the column's original position.
    pub fn insert(&mut self, column: impl Into<String>, rule: ColumnRule) {
        let column = column.into();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = rule,
            None => self.entries.push((column, rule)),
        }
    }

    /// Builder form of [`RuleSet::insert`].
    #[must_use]
    pub fn with_rule(mut self, column: impl Into<String>, rule: ColumnRule) -> Self {
        self.insert(column, rule);
        self
    }

    pub fn get(&self, column: &str) -> Option<&ColumnRule> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, rule)| rule)
    }

    /// Rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnRule)> {
        self.entries
            .iter()
            .map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

impl<S: Into<String>> FromIterator<(S, ColumnRule)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (S, ColumnRule)>>(iter: I) -> Self {
        let mut rules = RuleSet::new();
        for (column, rule) in iter {
            rules.insert(column, rule);
        }
        rules
    }
}

impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (column, rule) in &self.entries {
            map.serialize_entry(column, rule)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(RuleSetVisitor)
    }
}

struct RuleSetVisitor;

impl<'de> Visitor<'de> for RuleSetVisitor {
    type Value = RuleSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of column names to column rules")
    }

    // Document order is rule order, so entries are taken straight off the map.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<RuleSet, A::Error> {
        let mut rules = RuleSet::new();
        while let Some((column, rule)) = access.next_entry::<String, ColumnRule>()? {
            rules.insert(column, rule);
        }
        Ok(rules)
    }
}
