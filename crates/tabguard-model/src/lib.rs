//! Data model for tabguard.
//!
//! - [`ScalarType`]: the column types a load can coerce to and a rule can require
//! - [`ColumnRule`] / [`RuleSet`]: ordered, declarative per-column checks

pub mod error;
pub mod rules;
pub mod scalar;

pub use error::{ModelError, Result};
pub use rules::{ColumnRule, RuleSet};
pub use scalar::ScalarType;
