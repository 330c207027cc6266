//! Date and time composition for crash records.
//!
//! Crash timestamps arrive split across two text fields. Depending on the
//! feed revision the date is either already ISO-shaped with a zeroed time
//! (`"2019-07-09T00:00:00.000"`) or a `month/day/year` string, and the time
//! is a bare `"18:5"`-style clock. [`compose_iso`] merges the two into one
//! `YYYY-MM-DDTHH:MM:00` string without validating the calendar; parsing
//! happens later, if at all, in [`to_datetime`].

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::sanitize::trim;

/// Composes a `YYYY-MM-DDTHH:MM:00` timestamp string from a date field and
/// a time field.
///
/// A date containing a literal `T` contributes its first 10 characters and
/// nothing else; the time field always supplies the clock. Otherwise the
/// date is split on `/` or `-` as month/day/year, missing or empty
/// segments default to `"00"`, and month and day are left-padded to two
/// digits. The time splits on `:` (whitespace around parts ignored) into
/// hour and minute, each defaulting to `"00"`; the hour is left-padded.
///
/// The minute is padded on the RIGHT: `"2:3"` composes to `"02:30"`. The
/// feed writes `"2:3"` for 2:30, dropping the trailing zero of the minute,
/// so a short minute means tens-of-minutes. Legacy behavior, kept as is.
///
/// Seconds are always `"00"`. No calendar validation happens here.
pub fn compose_iso(date_str: &str, time_str: &str) -> String {
    let date_part = if date_str.contains('T') {
        date_str.chars().take(10).collect()
    } else {
        let mut segments = date_str.split(['/', '-']);
        let month = pad_left(segment_or_zero(segments.next()));
        let day = pad_left(segment_or_zero(segments.next()));
        let year = segment_or_zero(segments.next());
        format!("{year}-{month}-{day}")
    };

    let mut clock = time_str.split(':').map(trim);
    let hour = pad_left(segment_or_zero(clock.next()));
    let minute = pad_right(segment_or_zero(clock.next()));
    format!("{date_part}T{hour}:{minute}:00")
}

/// Parses the composed timestamp into a calendar value.
///
/// `None` surfaces a composition that is not calendar-parseable (month 00,
/// day 32 and the like); nothing is corrected or retried.
pub fn to_datetime(date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&compose_iso(date_str, time_str), "%Y-%m-%dT%H:%M:%S").ok()
}

/// Shifts a datetime backward by its own UTC offset, producing a UTC value
/// whose wall-clock fields equal the original local wall clock.
///
/// Reading that value back as UTC (an ISO string, a `%Y-%m-%d` render)
/// shows local time. This is a display workaround carried over from the
/// legacy service, not a timezone conversion.
pub fn to_local_date_value<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&dt.naive_local())
}

fn segment_or_zero(segment: Option<&str>) -> &str {
    match segment {
        Some(s) if !s.is_empty() => s,
        _ => "00",
    }
}

fn pad_left(s: &str) -> String {
    if s.chars().count() < 2 {
        format!("0{s}")
    } else {
        s.to_string()
    }
}

fn pad_right(s: &str) -> String {
    if s.chars().count() < 2 {
        format!("{s}0")
    } else {
        s.to_string()
    }
}
