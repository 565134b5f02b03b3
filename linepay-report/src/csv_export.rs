//! CSV export, one serde-serialized row per record.

use std::io::Write;

use anyhow::Result;
use linepay_core::Record;

/// Write records as CSV: header row from the record's field names, then one
/// row per record. Missing amounts and pending flags become empty cells.
/// No trailer row; a spreadsheet formula has no meaning in CSV.
pub fn write_csv(writer: impl Write, records: &[Record]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
