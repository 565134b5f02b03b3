//! linepay-core: parser for LINE Pay wallet chat-log exports.
//!
//! One linear pass segments the export into transaction blocks under a
//! carried date context, filters them by an inclusive calendar range, and
//! extracts a typed [`Record`] per purchase block. Everything here is a pure
//! function of the input text and range: no I/O, no shared state, and parse
//! anomalies (bad dates, missing fields) are absorbed into the data rather
//! than returned as errors.

pub mod extract;
pub mod range;
pub mod record;
pub mod scan;
pub mod segment;

pub use extract::extract;
pub use range::DateRange;
pub use record::{Record, Status};
pub use segment::{segment, segment_in_range, Block, DateContext, Segment};

/// Parse an export end to end: segment, filter by `range`, extract.
///
/// Records come back in stream order. An empty vector is a normal outcome
/// (nothing in range, or nothing of the purchase category), not a failure.
pub fn parse_records(text: &str, range: DateRange) -> Vec<Record> {
    segment_in_range(text, range)
        .into_iter()
        .filter_map(|(ctx, block)| extract(&ctx.label, &block.time, &block.lines))
        .collect()
}
