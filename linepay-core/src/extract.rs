//! Turns a closed transaction block into a [`Record`], or drops it.

use crate::record::{Record, Status};
use crate::scan;

/// Extracts a purchase record from the lines of one transaction block.
///
/// Returns `None` when the block is not a purchase at all (no
/// "LINE Pay Purchase" line), which covers top-ups, transfers, and other
/// wallet traffic that shares the transaction header shape. Within a
/// purchase block, every field is best-effort: a missing amount or merchant
/// degrades the record instead of discarding it.
pub fn extract(date_label: &str, time_label: &str, lines: &[String]) -> Option<Record> {
    if !lines.iter().any(|l| l.contains(scan::PURCHASE_MARKER)) {
        return None;
    }

    let text = lines.join("\n");
    let digits = scan::amount_digits(&text);
    let magnitude = digits.as_deref().and_then(|d| d.parse::<i64>().ok());

    // Completion wins when both markers appear in one block.
    let status = if text.contains(scan::COMPLETE_MARKER) {
        Status::Completed
    } else if text.contains(scan::CANCELED_MARKER) {
        Status::Canceled
    } else {
        Status::Pending
    };

    let merchant = lines
        .iter()
        .find_map(|l| scan::merchant(l))
        .unwrap_or_default();

    let (amount, pending) = match status {
        Status::Completed => (magnitude, None),
        Status::Canceled => (magnitude.map(|m| -m), None),
        Status::Pending => (magnitude, digits),
    };

    Some(Record {
        date: date_label.to_string(),
        time: time_label.to_string(),
        amount,
        pending,
        merchant,
    })
}
