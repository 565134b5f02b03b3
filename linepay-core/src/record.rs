//! Typed output of the extractor.

use serde::{Deserialize, Serialize};

/// Three-way outcome of a block's status markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Completed,
    Canceled,
    /// Neither marker present; resolution unknown to the parser.
    Pending,
}

/// One LINE Pay purchase, as reported.
///
/// Sign convention: positive amount for completed payments, negated for
/// canceled ones. `pending` repeats the unsigned magnitude as a string when
/// neither status marker was found, flagging the row for review rather than
/// treating it as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Date header line, verbatim from the source (e.g. "Mon, 09/01/2025").
    pub date: String,
    /// Time label from the transaction header (e.g. "02:15PM").
    pub time: String,
    /// Signed NT$ amount; `None` when no amount line matched.
    pub amount: Option<i64>,
    /// Unsigned magnitude, separators stripped; set only for pending rows.
    pub pending: Option<String>,
    /// Merchant label; empty when the block carried none.
    pub merchant: String,
}
