use chrono::DateTime;
use chrono::TimeDelta;
use chrono::TimeZone;
use chrono::Utc;

use crate::error::RecordError;

const TIME_SEPARATOR: char = ':';
const SECONDS_PER_MINUTE: u32 = 60;

/// Parses a `minutes:seconds` race time into a point in time on the epoch day.
///
/// Only the minute and second offset of the returned value is meaningful:
/// `"36:50"` becomes `1970-01-01T00:36:50Z`.
pub fn parse_race_time(time: &str) -> Result<DateTime<Utc>, RecordError> {
    let invalid = || RecordError::InvalidTime(time.to_owned());

    let (minutes, seconds) = time.trim().split_once(TIME_SEPARATOR).ok_or_else(invalid)?;
    let minutes = parse_digits(minutes).ok_or_else(invalid)?;
    let seconds = parse_digits(seconds).ok_or_else(invalid)?;

    if seconds >= SECONDS_PER_MINUTE {
        return Err(invalid());
    }

    let offset = TimeDelta::minutes(i64::from(minutes)) + TimeDelta::seconds(i64::from(seconds));

    Ok(DateTime::<Utc>::UNIX_EPOCH + offset)
}

/// Parses a non-empty run of ASCII digits, without a sign.
fn parse_digits(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    part.parse().ok()
}

/// Returns January 1 of the given year at midnight UTC.
pub fn year_start(year: i32) -> Result<DateTime<Utc>, RecordError> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .ok_or(RecordError::InvalidYear(year))
}
