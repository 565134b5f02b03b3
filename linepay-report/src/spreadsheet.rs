//! Xlsx workbook writer.
//!
//! Layout: header row, one row per record, one blank separator row, then a
//! trailer row holding a label and a `SUM` formula over the Amount column.
//! The total lives in the formula, not as a baked-in number, so any consumer
//! (or a hand edit to the rows) recomputes it independently of this writer.

use std::path::Path;

use anyhow::Result;
use linepay_core::Record;
use rust_xlsxwriter::{Formula, Workbook, XlsxError};

const HEADERS: [&str; 5] = ["Date", "Time", "Amount", "Pending", "Merchant"];

/// Amount-column range for the trailer formula, in A1 notation. Runs from
/// the first data row through the blank separator row, so with zero records
/// it degenerates to the single blank cell `C2`.
fn sum_range(record_count: usize) -> String {
    format!("C2:C{}", record_count + 2)
}

fn build_workbook(records: &[Record]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, &record.date)?;
        worksheet.write_string(row, 1, &record.time)?;
        if let Some(amount) = record.amount {
            worksheet.write_number(row, 2, amount as f64)?;
        }
        if let Some(pending) = &record.pending {
            worksheet.write_string(row, 3, pending)?;
        }
        worksheet.write_string(row, 4, &record.merchant)?;
    }

    // Row records.len() + 1 stays blank as the separator.
    let trailer = (records.len() + 2) as u32;
    worksheet.write_string(trailer, 0, "Total spend =")?;
    worksheet.write_formula(trailer, 2, Formula::new(format!("=SUM({})", sum_range(records.len()))))?;

    Ok(workbook)
}

/// Write the workbook to `path`.
pub fn write_spreadsheet(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    let mut workbook = build_workbook(records)?;
    workbook.save(path.as_ref())?;
    Ok(())
}

/// The same workbook as in-memory xlsx bytes.
pub fn spreadsheet_bytes(records: &[Record]) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(records)?;
    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        vec![
            Record {
                date: "Mon, 09/01/2025".to_string(),
                time: "02:15PM".to_string(),
                amount: Some(1500),
                pending: None,
                merchant: "Test Shop".to_string(),
            },
            Record {
                date: "Tue, 09/02/2025".to_string(),
                time: "06:45PM".to_string(),
                amount: None,
                pending: None,
                merchant: String::new(),
            },
        ]
    }

    #[test]
    fn test_sum_range_covers_data_rows() {
        // Header is row 1; N data rows end at row N + 1; the separator row
        // below them closes the range, matching the layout contract.
        assert_eq!(sum_range(0), "C2:C2");
        assert_eq!(sum_range(1), "C2:C3");
        assert_eq!(sum_range(3), "C2:C5");
    }

    #[test]
    fn test_spreadsheet_bytes_are_xlsx() {
        let bytes = spreadsheet_bytes(&sample_records()).unwrap();
        // xlsx is a zip container.
        assert_eq!(&bytes[..2], b"PK");
        assert!(bytes.len() > 100);
    }

    #[test]
    fn test_spreadsheet_handles_zero_records() {
        let bytes = spreadsheet_bytes(&[]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_write_spreadsheet_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        write_spreadsheet(&path, &sample_records()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
