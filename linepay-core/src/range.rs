//! Inclusive calendar date range used to filter blocks.

use chrono::NaiveDate;

/// Inclusive on both ends: a block dated exactly on either bound is kept.
/// An inverted range (start after end) contains nothing; callers that want
/// to reject that case do so at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
