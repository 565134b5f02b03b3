//! linepay-report: rendering and export of parsed purchase records.
//!
//! Consumes `linepay-core` records and produces the report surfaces: a
//! column-aligned text table, a CSV export, and the xlsx workbook with a
//! self-recomputing total formula.

pub mod csv_export;
pub mod spreadsheet;
pub mod table;

pub use csv_export::write_csv;
pub use spreadsheet::{spreadsheet_bytes, write_spreadsheet};
pub use table::{total, write_table};
