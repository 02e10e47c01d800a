//! Line-level helpers for WhatsApp TXT exports.
//!
//! Exports from the iOS app look like:
//!
//! ```text
//! [01/02/23, 9:15:30 AM] Alice: Good morning!
//! ```
//!
//! The app inserts U+202F (narrow no-break space) before the AM/PM marker
//! and U+200E (left-to-right mark) around media placeholders, so lines are
//! cleaned before matching.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDateTime};
use regex::Regex;

/// Characters removed from every line before matching.
pub const INVISIBLE_CHARS: &[char] = &['\u{202F}', '\u{200E}'];

/// `[DD/MM/YY, H:MM:SS AM] rest`
const HEADER_PATTERN: &str =
    r"^\[(\d{2}/\d{2}/\d{2}, \d{1,2}:\d{2}:\d{2}\s?[APMapm]{2})\]\s(.+)";

/// Sender up to the first colon followed by whitespace.
const SENDER_PATTERN: &str = r"^(.*?):\s(.*)";

/// chrono format for the bracketed date/time, 12-hour clock.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y, %I:%M:%S%p";

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is valid"));

static SENDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SENDER_PATTERN).expect("sender pattern is valid"));

/// A line that carried a message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch<'a> {
    /// Bracketed date/time, e.g. `01/02/23, 9:15:30AM`.
    pub datetime: &'a str,
    /// Everything after `] `.
    pub rest: &'a str,
}

/// Trims a line and removes the invisible formatting characters.
pub fn clean_line(line: &str) -> Cow<'_, str> {
    let trimmed = line.trim();
    if trimmed.contains(INVISIBLE_CHARS) {
        Cow::Owned(trimmed.replace(INVISIBLE_CHARS, ""))
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// Matches a cleaned line against the message header pattern.
///
/// Returns `None` for anything that is not a message header, including
/// continuation lines of multi-line messages.
pub fn match_header(line: &str) -> Option<HeaderMatch<'_>> {
    let caps = HEADER_RE.captures(line)?;
    Some(HeaderMatch {
        datetime: caps.get(1)?.as_str(),
        rest: caps.get(2)?.as_str(),
    })
}

/// Splits header content into sender and body at the first `": "`.
///
/// Returns `None` when there is no separator, which is how the export
/// writes some system lines (e.g. `Team changed the group name`).
pub fn split_sender(rest: &str) -> Option<(&str, &str)> {
    let caps = SENDER_RE.captures(rest)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Parses the bracketed date/time of a header.
///
/// The marker must follow the seconds directly once invisible characters
/// are removed, so `9:15:30 AM` with a plain space yields `None`. Two-digit
/// years pivot at 69: `69`-`99` are 19xx, `00`-`68` are 20xx. Anything else
/// that does not fit [`TIMESTAMP_FORMAT`], including out-of-range values
/// such as month 13, yields `None`.
pub fn parse_timestamp(datetime: &str) -> Option<NaiveDateTime> {
    let cleaned = datetime.replace(INVISIBLE_CHARS, "");
    let ts = NaiveDateTime::parse_from_str(&cleaned, TIMESTAMP_FORMAT).ok()?;
    // chrono reads `%y` = 69 as 2069
    if ts.year() == 2069 {
        ts.with_year(1969)
    } else {
        Some(ts)
    }
}
