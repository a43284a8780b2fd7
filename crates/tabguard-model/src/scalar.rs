//! Scalar column types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Uniform value type of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScalarType {
    Integer,
    Float,
    String,
    Datetime,
    Boolean,
}

impl ScalarType {
    /// Every type, in display order.
    pub const ALL: [ScalarType; 5] = [
        ScalarType::Integer,
        ScalarType::Float,
        ScalarType::String,
        ScalarType::Datetime,
        ScalarType::Boolean,
    ];

    /// Canonical lowercase name, as used in rule files and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Integer => "integer",
            ScalarType::Float => "float",
            ScalarType::String => "string",
            ScalarType::Datetime => "datetime",
            ScalarType::Boolean => "boolean",
        }
    }

    /// Alternative spellings accepted by [`FromStr`].
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            ScalarType::Integer => &["int", "int64", "i64"],
            ScalarType::Float => &["float64", "f64", "double"],
            ScalarType::String => &["str", "text", "object"],
            ScalarType::Datetime => &["date", "datetime64", "timestamp"],
            ScalarType::Boolean => &["bool"],
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ScalarType::Integer | ScalarType::Float)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarType {
    type Err = ModelError;

    /// Case-insensitive; accepts the canonical name or any alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ScalarType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == normalized || ty.aliases().contains(&normalized.as_str()))
            .ok_or_else(|| ModelError::UnknownScalarType(s.to_string()))
    }
}

impl TryFrom<String> for ScalarType {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScalarType> for String {
    fn from(value: ScalarType) -> Self {
        value.as_str().to_string()
    }
}
