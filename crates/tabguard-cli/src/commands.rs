use anyhow::{Context, Result};
use comfy_table::Table;
use polars::prelude::DataFrame;
use tabguard_ingest::{LoadOptions, load};
use tabguard_model::{RuleSet, ScalarType};
use tracing::{debug, info_span};

use crate::cli::LoadArgs;
use crate::summary::{apply_table_style, header_cell};

pub fn run_types() -> Result<()> {
    println!("{}", types_table());
    Ok(())
}

pub fn types_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Type"), header_cell("Aliases")]);
    apply_table_style(&mut table);
    for ty in ScalarType::ALL {
        table.add_row(vec![ty.as_str().to_string(), ty.aliases().join(", ")]);
    }
    table
}

pub fn run_load(args: &LoadArgs) -> Result<DataFrame> {
    let span = info_span!("cli_load", file = %args.file.display());
    let _guard = span.enter();

    let options = load_options(args)?;
    let df = load(&args.file, &options)?;
    Ok(df)
}

fn load_options(args: &LoadArgs) -> Result<LoadOptions> {
    let mut options = LoadOptions::new()
        .with_date_columns(args.date_columns.iter().cloned())
        .with_column_types(args.column_types.iter().cloned());
    if let Some(path) = &args.rules {
        let rules = RuleSet::from_path(path)
            .with_context(|| format!("load rules from {}", path.display()))?;
        debug!(rules = rules.len(), "loaded rule set");
        options = options.with_rules(rules);
    }
    Ok(options)
}
