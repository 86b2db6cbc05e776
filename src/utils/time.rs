//! Time utilities: parsing HH:MM, interview time ranges, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

/// Parse `HH:MM` or `HH:MM-HH:MM` into start and optional end.
pub fn parse_time_range(s: &str) -> AppResult<(NaiveTime, Option<NaiveTime>)> {
    let invalid = || AppError::InvalidArgument(format!("invalid time range '{s}'"));

    let (start, end) = match s.split_once('-') {
        Some((a, b)) => (a, Some(b)),
        None => (s, None),
    };

    let start = parse_time(start).ok_or_else(invalid)?;
    let end = end.map(|e| parse_time(e).ok_or_else(invalid)).transpose()?;

    if let Some(end) = end
        && end < start
    {
        return Err(invalid());
    }

    Ok((start, end))
}

/// Length of a `HH:MM-HH:MM` range in minutes, `None` without an end.
pub fn range_minutes(s: &str) -> AppResult<Option<i64>> {
    let (start, end) = parse_time_range(s)?;
    Ok(end.map(|e| minutes_between(start, e)))
}
