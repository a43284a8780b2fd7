//! Rendering of the load summary.

use chrono::NaiveDate;
use tabguard_ingest::{DateRange, LoadSummary};

fn midnight(year: i32, month: u32, day: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn summary_with_date_ranges() {
    let summary = LoadSummary {
        rows: 3,
        columns: 4,
        memory_bytes: 2048,
        date_ranges: vec![
            DateRange {
                column: "order_date".to_string(),
                min: midnight(2024, 1, 1),
                max: midnight(2024, 3, 5),
            },
            DateRange {
                column: "ship_date".to_string(),
                min: midnight(2024, 1, 2),
                max: NaiveDate::from_ymd_opt(2024, 3, 9)
                    .unwrap()
                    .and_hms_opt(14, 30, 0)
                    .unwrap(),
            },
        ],
    };

    insta::assert_snapshot!(summary.to_string(), @r"
    Successfully loaded 3 rows and 4 columns
    Memory usage: 2.0 KiB
    Date range for order_date: 2024-01-01 00:00:00 to 2024-03-05 00:00:00
    Date range for ship_date: 2024-01-02 00:00:00 to 2024-03-09 14:30:00
    ");
}

#[test]
fn summary_without_dates() {
    let summary = LoadSummary {
        rows: 0,
        columns: 0,
        memory_bytes: 0,
        date_ranges: Vec::new(),
    };

    insta::assert_snapshot!(summary.to_string(), @r"
    Successfully loaded 0 rows and 0 columns
    Memory usage: 0 B
    ");
}
