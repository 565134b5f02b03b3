//! Plain-text table rendering and the amount total.

use std::io::{self, Write};

use linepay_core::Record;

const HEADERS: [&str; 5] = ["Date", "Time", "Amount", "Pending", "Merchant"];

/// Sum of the Amount column, missing amounts counted as 0.
pub fn total(records: &[Record]) -> i64 {
    records.iter().filter_map(|r| r.amount).sum()
}

fn cells(record: &Record) -> [String; 5] {
    [
        record.date.clone(),
        record.time.clone(),
        record.amount.map(|a| a.to_string()).unwrap_or_default(),
        record.pending.clone().unwrap_or_default(),
        record.merchant.clone(),
    ]
}

/// Render records as a column-aligned table, one row per record, headers
/// first. Column widths follow the widest cell in each column.
pub fn write_table(writer: &mut impl Write, records: &[Record]) -> io::Result<()> {
    let rows: Vec<[String; 5]> = records.iter().map(cells).collect();

    let mut widths: [usize; 5] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(writer, &HEADERS.map(String::from), &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(writer, &rule, &widths)?;
    for row in &rows {
        write_row(writer, row, &widths)?;
    }
    Ok(())
}

fn write_row(writer: &mut impl Write, cells: &[String], widths: &[usize; 5]) -> io::Result<()> {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        if !line.is_empty() {
            line.push_str("  ");
        }
        line.push_str(cell);
        // char-count padding keeps CJK merchant labels from skewing widths
        line.extend(std::iter::repeat(' ').take(width.saturating_sub(cell.chars().count())));
    }
    writeln!(writer, "{}", line.trim_end())
}
