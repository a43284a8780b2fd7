use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use polars::prelude::DataFrame;
use tabguard_validate::Violation;

/// Prints the first `rows` rows of the table.
pub fn print_preview(df: &DataFrame, rows: usize) {
    println!("{}", df.head(Some(rows)));
}

/// Prints a table of rule violations to stderr.
pub fn print_violations(violations: &[Violation]) {
    eprintln!("Validation failed:");
    eprintln!("{}", violation_table(violations));
}

pub fn violation_table(violations: &[Violation]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Check"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for violation in violations {
        table.add_row(vec![
            Cell::new(violation.column())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(violation.check()).fg(Color::Red),
            Cell::new(violation),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_table_has_one_row_per_violation() {
        let violations = vec![
            Violation::BelowMinimum {
                column: "customer_id".to_string(),
                minimum: 100.0,
                found: 99.0,
            },
            Violation::MissingColumn {
                column: "region".to_string(),
            },
        ];
        let table = violation_table(&violations);

        assert_eq!(table.row_count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("Column 'customer_id' contains values below minimum 100"));
        assert!(rendered.contains("presence"));
    }
}
