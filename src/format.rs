//! Display helpers for pastes: one-line snippets and readable timestamps.

use std::fmt::{self, Write};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::warn;

/// Longest snippet returned by [`snippet_from`], ellipsis included.
pub const SNIPPET_LIMIT: usize = 120;

/// Characters kept from an over-long first line before the ellipsis.
pub const SNIPPET_KEEP: usize = SNIPPET_LIMIT - ELLIPSIS.len();

pub const ELLIPSIS: &str = "...";

/// Shown in place of a timestamp that cannot be parsed.
pub const UNKNOWN_TIME: &str = "Unknown time";

/// Locale-style date and time, e.g. `05/06/24, 07:08:09`.
pub const DEFAULT_DATE_FORMAT: &str = "%x, %X";

/// Build a short preview of `content`.
///
/// Normally this is the first line. A first line longer than
/// [`SNIPPET_LIMIT`] is cut and ends in [`ELLIPSIS`]; a blank first line
/// falls back to the start of the whole content.
pub fn snippet_from(content: &str) -> String {
    let first_line = content.split('\n').next().unwrap_or_default();
    let first_line = first_line.strip_suffix('\r').unwrap_or(first_line);

    if first_line.chars().count() > SNIPPET_LIMIT {
        return format!("{}{ELLIPSIS}", take_chars(first_line, SNIPPET_KEEP));
    }

    if first_line.trim().is_empty() {
        let mut snippet = take_chars(content, SNIPPET_LIMIT).to_owned();
        if content.chars().count() > SNIPPET_LIMIT {
            snippet.push_str(ELLIPSIS);
        }
        return snippet;
    }

    first_line.to_owned()
}

fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Parse the timestamp forms pastes are stored with.
///
/// Accepts RFC 3339, a date and time without offset (taken as local time),
/// or a bare date (midnight UTC).
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Some(instant.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Render a stored timestamp in the host's local time zone.
pub fn format_date(input: &str) -> String {
    format_date_in(input, &Local, DEFAULT_DATE_FORMAT)
}

/// Render a stored timestamp in `tz` using a strftime-style `format`.
///
/// Returns [`UNKNOWN_TIME`] if the input does not parse or the format
/// string is invalid.
pub fn format_date_in<Tz>(input: &str, tz: &Tz, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let Some(instant) = parse_timestamp(input) else {
        warn!("unable to format date '{input}'");
        return UNKNOWN_TIME.to_owned();
    };

    let mut rendered = String::new();
    if write!(rendered, "{}", instant.with_timezone(tz).format(format)).is_err() {
        warn!("invalid date format '{format}'");
        return UNKNOWN_TIME.to_owned();
    }
    rendered
}
