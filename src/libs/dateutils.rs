//! Date parsing and duration formatting helpers.
//!
//! Two textual encodings are accepted: `DD/MM/YYYY` report boundary dates
//! (time defaults to start of day) and `YYYY-MM-DD HH:MM` log timestamps.
//! Durations are displayed with minute precision; sub-minute remainders are
//! truncated, not rounded.

use crate::libs::error::TimelogError;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

/// Boundary date pattern: day/month/year.
static DATE_FORMAT: OnceLock<Regex> = OnceLock::new();
/// Log timestamp pattern: year-month-day hour:minute.
static DATETIME_FORMAT: OnceLock<Regex> = OnceLock::new();

fn date_format() -> &'static Regex {
    DATE_FORMAT.get_or_init(|| Regex::new(r"^(\d+)/(\d+)/(\d+)$").expect("valid date pattern"))
}

fn datetime_format() -> &'static Regex {
    DATETIME_FORMAT.get_or_init(|| Regex::new(r"^(\d+)-(\d+)-(\d+) (\d+):(\d+)$").expect("valid timestamp pattern"))
}

fn capture_number<T: std::str::FromStr>(text: &str, capture: &str) -> Result<T, TimelogError> {
    capture.parse().map_err(|_| TimelogError::MalformedInput(text.to_string()))
}

/// Parses a `DD/MM/YYYY` date into a time point at start of day.
pub fn parse_date(text: &str) -> Result<NaiveDateTime, TimelogError> {
    let caps = date_format()
        .captures(text)
        .ok_or_else(|| TimelogError::MalformedInput(text.to_string()))?;
    let day: u32 = capture_number(text, &caps[1])?;
    let month: u32 = capture_number(text, &caps[2])?;
    let year: i32 = capture_number(text, &caps[3])?;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date.and_time(NaiveTime::MIN))
        .ok_or_else(|| TimelogError::MalformedInput(text.to_string()))
}

/// Parses a `YYYY-MM-DD HH:MM` log timestamp.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, TimelogError> {
    let caps = datetime_format()
        .captures(text)
        .ok_or_else(|| TimelogError::MalformedInput(text.to_string()))?;
    let year: i32 = capture_number(text, &caps[1])?;
    let month: u32 = capture_number(text, &caps[2])?;
    let day: u32 = capture_number(text, &caps[3])?;
    let hour: u32 = capture_number(text, &caps[4])?;
    let minute: u32 = capture_number(text, &caps[5])?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| TimelogError::MalformedInput(text.to_string()))?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TimelogError::MalformedInput(text.to_string()))?;
    Ok(NaiveDateTime::new(date, time))
}

/// Converts a duration to whole minutes, truncating seconds.
pub fn as_minutes(duration: &Duration) -> i64 {
    duration.num_seconds() / 60
}

/// Converts a duration to fractional hours, for series data and pricing.
pub fn as_hours(duration: &Duration) -> f64 {
    duration.num_seconds() as f64 / 3600.0
}

/// Formats a duration with minute precision, e.g. `6 h 30 min`.
pub fn format_duration(duration: &Duration) -> String {
    // Clamp to zero so arithmetic edge cases never render negative time
    let minutes = as_minutes(duration).max(0);
    format!("{} h {} min", minutes / 60, minutes % 60)
}

/// Elapsed time attributed to the slot ending at `current`.
///
/// The clock resets at day boundaries: without an anchor, or with an anchor
/// on a different calendar day, the slot gets zero duration.
pub fn slot_duration(current: NaiveDateTime, last: Option<NaiveDateTime>) -> Duration {
    match last {
        Some(last) if last.date() == current.date() => std::cmp::max(current - last, Duration::zero()),
        _ => Duration::zero(),
    }
}
