//! `m:ss` timestamp tokens: extraction from chat text, parsing to a playback
//! offset, and formatting a playback position back into text.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

/// One or more minute digits, a colon, then exactly two second digits (00-59).
pub const TIMESTAMP_PATTERN: &str = r"([0-9]+):([0-5][0-9])";

static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"));

/// A timestamp token found in a message, with its byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampMatch<'a> {
    pub text: &'a str,
    pub range: Range<usize>,
}

/// Every timestamp token in `text`, in order of appearance. Repeats are kept.
#[must_use]
pub fn find_timestamps(text: &str) -> Vec<TimestampMatch<'_>> {
    TIMESTAMP_RE
        .find_iter(text)
        .map(|m| TimestampMatch { text: m.as_str(), range: m.range() })
        .collect()
}

/// Parse a `m:ss` seek value into a playback offset in seconds.
///
/// Returns `None` unless `value` is exactly one timestamp token.
#[must_use]
pub fn parse_seek(value: &str) -> Option<u32> {
    let (minutes, seconds) = value.trim().split_once(':')?;
    if minutes.is_empty() || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if seconds.len() != 2 || !seconds.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (Ok(minutes), Ok(seconds)) = (minutes.parse::<u32>(), seconds.parse::<u32>()) else {
        return None;
    };
    if seconds > 59 {
        return None;
    }
    minutes.checked_mul(60)?.checked_add(seconds)
}

/// Format a playback position as `m:ss`, truncating fractional seconds.
///
/// Negative or non-finite positions format as `0:00`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_seconds(position: f64) -> String {
    let whole = if position.is_finite() && position > 0.0 { position.floor() as u64 } else { 0 };
    format!("{}:{:02}", whole / 60, whole % 60)
}
