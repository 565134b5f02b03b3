use chrono::NaiveDate;
use linepay_core::{parse_records, DateRange};
use linepay_report::{spreadsheet_bytes, total, write_csv, write_spreadsheet, write_table};
use std::path::PathBuf;

fn chat_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("sample_chat.txt")
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn september_records() -> Vec<linepay_core::Record> {
    let text = std::fs::read_to_string(chat_path()).unwrap();
    parse_records(&text, DateRange::new(day(2025, 9, 1), day(2025, 9, 30)))
}

/// Real-fixture regression over the whole pipeline. Date attribution follows
/// the close-time rule: a block closes when the next transaction header
/// arrives, so the last purchase of each day carries the date header that
/// has already advanced to the following day by then.
#[test]
fn test_parse_sample_chat_september() {
    let records = september_records();
    assert_eq!(records.len(), 4);

    // Aug 31 coffee closes after the Mon, 09/01 header and lands in range.
    assert_eq!(records[0].time, "09:12AM");
    assert_eq!(records[0].date, "Mon, 09/01/2025");
    assert_eq!(records[0].amount, Some(320));

    assert_eq!(records[1].merchant, "PChome 24h");
    assert_eq!(records[1].amount, Some(1500));

    assert_eq!(records[2].merchant, "7-ELEVEN");
    assert_eq!(records[2].amount, Some(-89));

    assert_eq!(records[3].merchant, "夜市滷味");
    assert_eq!(records[3].amount, Some(260));
    assert_eq!(records[3].pending.as_deref(), Some("260"));

    assert_eq!(total(&records), 1991);
}

/// The top-up block shares the transaction header shape but must never
/// surface as a purchase record.
#[test]
fn test_sample_chat_skips_top_up_block() {
    let records = september_records();
    assert!(records.iter().all(|r| r.time != "05:02PM"));
}

#[test]
fn test_sample_chat_out_of_range_is_empty() {
    let text = std::fs::read_to_string(chat_path()).unwrap();
    let records = parse_records(&text, DateRange::new(day(2024, 9, 1), day(2024, 9, 30)));
    assert!(records.is_empty());
}

#[test]
fn test_table_renders_fixture_records() {
    let records = september_records();
    let mut out = Vec::new();
    write_table(&mut out, &records).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.lines().count(), 2 + records.len());
    assert!(text.contains("PChome 24h"));
    assert!(text.contains("-89"));
}

#[test]
fn test_csv_exports_fixture_records() {
    let records = september_records();
    let mut out = Vec::new();
    write_csv(&mut out, &records).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("date,time,amount,pending,merchant"));
    assert_eq!(text.lines().count(), 1 + records.len());
    assert!(text.contains("夜市滷味"));
}

#[test]
fn test_spreadsheet_written_from_fixture() {
    let records = september_records();

    let bytes = spreadsheet_bytes(&records).unwrap();
    assert_eq!(&bytes[..2], b"PK");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linepay_output_2025-09-01_2025-09-30.xlsx");
    write_spreadsheet(&path, &records).unwrap();
    assert_eq!(&std::fs::read(&path).unwrap()[..2], b"PK");
}
