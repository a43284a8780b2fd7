//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tabguard_cli::args::parse_column_type;
use tabguard_model::ScalarType;

#[derive(Parser)]
#[command(
    name = "tabguard",
    version,
    about = "Load a CSV file, clean it up, and check it against column rules",
    long_about = "Load a CSV file into a table, parse date columns, apply column type hints,\n\
                  drop empty rows and columns, and optionally validate the result against\n\
                  a JSON rule set."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a CSV file and preview the cleaned table.
    Load(LoadArgs),

    /// List the accepted column type names.
    Types,
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Path to the CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Parse a column as dates (repeatable).
    #[arg(long = "date-column", value_name = "COL")]
    pub date_columns: Vec<String>,

    /// Read a column as the given type, e.g. `customer_id=integer` (repeatable).
    #[arg(long = "column-type", value_name = "COL=TYPE", value_parser = parse_column_type)]
    pub column_types: Vec<(String, ScalarType)>,

    /// JSON rule set the cleaned table must satisfy.
    #[arg(long = "rules", value_name = "RULES.json")]
    pub rules: Option<PathBuf>,

    /// Number of rows to preview.
    #[arg(long = "head", value_name = "N", default_value_t = 5)]
    pub head: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
