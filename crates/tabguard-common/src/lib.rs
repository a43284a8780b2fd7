//! Shared utilities for tabguard crates.
//!
//! This crate bridges the tabguard model and Polars: dtype mapping,
//! numeric column ranges, and value formatting.

pub mod polars;

pub use crate::polars::{
    NumericValue, dtype_for, format_bytes, format_numeric, numeric_range, scalar_type_of,
};
