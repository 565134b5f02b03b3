//! Named recognizers for the structural markers of a wallet chat export.
//!
//! Every fixed-format marker the parser cares about lives here, one named
//! function (or constant) per marker, so the export grammar stays auditable
//! in one place instead of inline regexes scattered through control flow.

use std::sync::OnceLock;

use regex::Regex;

use crate::segment::DateContext;

/// Category marker. Blocks without this substring anywhere in their lines
/// are some other wallet notification and yield no record.
pub const PURCHASE_MARKER: &str = "LINE Pay Purchase";

/// Terminal status markers, searched as literal substrings of the joined
/// block text. Completion is checked first and wins if both ever co-occur.
pub const COMPLETE_MARKER: &str = "Payment complete.";
pub const CANCELED_MARKER: &str = "Payment canceled.";

fn date_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(Mon|Tue|Wed|Thu|Fri|Sat|Sun), (\d{2})/(\d{2})/(\d{4})")
            .expect("invalid date header regex")
    })
}

fn txn_start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Lines are trimmed before recognition, so the delimiter after the
        // wallet label is gone when nothing follows it on the line; require
        // it only when inline message text is present.
        Regex::new(r"^(\d{2}:\d{2}[AP]M)[\t ]+LINE錢包(?:[\t ]+.*)?$")
            .expect("invalid transaction header regex")
    })
}

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"NT\$ ?([0-9,]+)").expect("invalid amount regex"))
}

fn merchant_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Merchant:\s*(.*)").expect("invalid merchant regex"))
}

/// Recognize a date header line like "Mon, 09/01/2025".
///
/// The whole trimmed line becomes the context's raw label; trailing text
/// after the date is tolerated. Month and day are taken as written and not
/// range-checked here: an impossible date surfaces later, when
/// [`DateContext::date`] fails and the context is treated as invalid.
pub fn date_header(line: &str) -> Option<DateContext> {
    let caps = date_header_re().captures(line)?;
    Some(DateContext {
        label: line.to_string(),
        year: caps[4].parse().ok()?,
        month: caps[2].parse().ok()?,
        day: caps[3].parse().ok()?,
    })
}

/// Recognize a transaction-start header, returning its time label
/// (e.g. "02:15PM"). The wallet label is required, so ordinary chat lines
/// that merely begin with a time do not match.
pub fn txn_start(line: &str) -> Option<&str> {
    txn_start_re()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// First "NT$ 1,234"-style amount in `text`, thousands separators stripped.
/// A degenerate match carrying only separators counts as no match.
pub fn amount_digits(text: &str) -> Option<String> {
    let caps = amount_re().captures(text)?;
    let digits = caps[1].replace(',', "");
    (!digits.is_empty()).then_some(digits)
}

/// Merchant label from one line: everything after "Merchant:", trimmed.
pub fn merchant(line: &str) -> Option<String> {
    let caps = merchant_re().captures(line)?;
    Some(caps[1].trim().to_string())
}
