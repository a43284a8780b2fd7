//! CSV loading for tabguard.
//!
//! Reads a CSV file into a Polars DataFrame, applies date and type hints,
//! drops empty rows and columns, and checks the result against an optional
//! [`RuleSet`](tabguard_model::RuleSet).
//!
//! # Example
//!
//! ```ignore
//! use tabguard_ingest::{LoadOptions, load};
//! use tabguard_model::{ColumnRule, RuleSet, ScalarType};
//!
//! let rules = RuleSet::new().with_rule("customer_id", ColumnRule::new().required().with_min(100.0));
//! let options = LoadOptions::new()
//!     .with_date_column("order_date")
//!     .with_column_type("customer_id", ScalarType::Integer)
//!     .with_rules(rules);
//!
//! let df = load("orders.csv", &options)?;
//! ```

mod cleanup;
mod csv;
mod dates;
mod error;
mod loader;
mod options;
mod summary;

// === Error Types ===
pub use error::{ErrorKind, LoadError, Result};

// === Loading ===
pub use loader::{load, load_with_summary};
pub use options::LoadOptions;
pub use summary::{DateRange, LoadSummary};

// === Building Blocks ===
pub use cleanup::{drop_empty, drop_empty_columns, drop_empty_rows};
pub use crate::csv::{CsvHeader, NULL_TOKENS, read_header};
pub use dates::parse_datetime;
