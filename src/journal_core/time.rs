//! Duration tokens such as `3h`, `1d` or `30m`.
//!
//! Parsing is tolerant: anything that is not a well-formed token counts as zero
//! minutes. Formatting always emits hours with one decimal place, so
//! `format_duration` followed by `parse_duration` is a one-way trip: `95`
//! minutes format as `"1.6h"`, which parses back to `96`.

use crate::constants::{HOURS_PER_WORKDAY, MINUTES_PER_HOUR};
use regex::Regex;
use std::sync::OnceLock;

fn duration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^([0-9]+\.?[0-9]*)([hdm])$").expect("duration pattern is a valid regex")
    })
}

/// Converts a duration token to minutes.
///
/// The token is `<number><unit>` where the unit is `h` (60 minutes), `d` (one
/// eight-hour workday) or `m` (one minute), case-insensitive. The number may be
/// fractional. Empty or malformed tokens yield `0.0`.
///
/// # Examples
///
/// ```
/// use workjournal::journal_core::parse_duration;
///
/// assert_eq!(parse_duration("3h"), 180.0);
/// assert_eq!(parse_duration("1d"), 480.0);
/// assert_eq!(parse_duration("1.5H"), 90.0);
/// assert_eq!(parse_duration("abc"), 0.0);
/// ```
pub fn parse_duration(token: &str) -> f64 {
    let Some(caps) = duration_pattern().captures(token) else {
        return 0.0;
    };
    let value: f64 = caps[1].parse().unwrap_or(0.0);
    match caps[2].to_ascii_lowercase().as_str() {
        "h" => value * MINUTES_PER_HOUR,
        "d" => value * HOURS_PER_WORKDAY * MINUTES_PER_HOUR,
        "m" => value,
        _ => 0.0,
    }
}

/// Renders minutes as hours with one decimal place, e.g. `"8.0h"`.
///
/// Ties round away from zero, so 15 minutes show as `"0.3h"`.
pub fn format_duration(minutes: f64) -> String {
    let tenths = (minutes / MINUTES_PER_HOUR * 10.0).round();
    format!("{:.1}h", tenths / 10.0)
}
