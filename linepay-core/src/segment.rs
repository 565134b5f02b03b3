//! Line classifier and segmenter.
//!
//! One linear pass over the export folds lines into closed transaction
//! blocks, each paired with the date context that was active when the block
//! closed. No other state survives the pass.

use chrono::NaiveDate;

use crate::range::DateRange;
use crate::scan;

/// Calendar context established by the most recent date header and carried
/// across block boundaries until the next header supersedes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateContext {
    /// The whole trimmed header line, kept verbatim for the report.
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateContext {
    /// Concrete calendar date, or `None` for impossible dates (day 31 in a
    /// 30-day month and the like). A `None` here marks the context invalid;
    /// blocks under it are dropped, not errored.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// One transaction block: the start line plus every following body line up
/// to (not including) the next transaction-start header or end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Time label captured from the start header, e.g. "02:15PM".
    pub time: String,
    /// Trimmed lines, start line first.
    pub lines: Vec<String>,
}

/// A closed block and the date context captured at its close time.
///
/// `context` is `None` when no date header preceded the close. It can also
/// be stale relative to the block's real date: a header missed upstream, or
/// a day boundary crossed while the block was still open, both leave the
/// close-time context pointing at a different day than the block's start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub context: Option<DateContext>,
    pub block: Block,
}

/// Fold an export into closed blocks.
///
/// Date headers update the carried context and are otherwise inert (never
/// appended to an open block). A transaction-start header closes any open
/// block before opening the next, with the header line as the new block's
/// first element. Any other line is appended to the open block or, with no
/// block open, discarded. The final open block is closed at end of input.
pub fn segment(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut context: Option<DateContext> = None;
    let mut open: Option<Block> = None;

    for raw in text.lines() {
        let line = raw.trim();

        if let Some(ctx) = scan::date_header(line) {
            context = Some(ctx);
            continue;
        }

        if let Some(time) = scan::txn_start(line) {
            if let Some(block) = open.take() {
                segments.push(Segment {
                    context: context.clone(),
                    block,
                });
            }
            open = Some(Block {
                time: time.to_string(),
                lines: vec![line.to_string()],
            });
            continue;
        }

        if let Some(block) = open.as_mut() {
            block.lines.push(line.to_string());
        }
    }

    if let Some(block) = open {
        segments.push(Segment { context, block });
    }

    segments
}

/// Blocks that survive filtering: context present, constructing a real
/// calendar date, with that date inside the inclusive `range`. Blocks under
/// a missing or invalid context are silently dropped.
pub fn segment_in_range(text: &str, range: DateRange) -> Vec<(DateContext, Block)> {
    segment(text)
        .into_iter()
        .filter_map(|seg| {
            let context = seg.context?;
            let date = context.date()?;
            range.contains(date).then(|| (context, seg.block))
        })
        .collect()
}
