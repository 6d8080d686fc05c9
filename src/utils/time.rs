//! Time utilities: parsing HH:MM cutoffs and timezone-aware timestamps.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Parse a time-of-day. Accepts "HH:MM" and "HH:MM:SS".
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Parse a timestamp in the configured timezone.
/// Accepts RFC 3339 (any offset, converted to `tz`) or a naive
/// "YYYY-MM-DD HH:MM[:SS]" interpreted as local time in `tz`.
pub fn parse_timestamp(s: &str, tz: Tz) -> AppResult<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&tz));
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))?;

    tz.from_local_datetime(&naive)
        .single()
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

/// Current time in the configured timezone.
pub fn now_in(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

/// Serialize a timestamp for storage (RFC 3339 keeps the offset).
pub fn to_db_str(ts: &DateTime<Tz>) -> String {
    ts.to_rfc3339()
}

/// Deserialize a stored timestamp back into the configured timezone.
pub fn from_db_str(s: &str, tz: Tz) -> AppResult<DateTime<Tz>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&tz))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}
