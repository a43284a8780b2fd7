//! CLI library components for tabguard.

pub mod args;
pub mod logging;
