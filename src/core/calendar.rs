//! The logical attendance day.
//!
//! An attendance day starts at a configured cutoff hour (e.g. 06:00) in a
//! fixed timezone, not at midnight. A 05:59 clock-in still belongs to the
//! previous day's ledger.

use crate::errors::{AppError, AppResult};
use crate::models::attendance_day::AttendanceDay;
use chrono::{DateTime, Days, Timelike};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy)]
pub struct Calendar {
    pub cutoff_hour: u32,
    pub tz: Tz,
}

impl Calendar {
    pub fn new(cutoff_hour: u32, timezone: &str) -> AppResult<Self> {
        if cutoff_hour > 23 {
            return Err(AppError::Config(format!(
                "day_cutoff_hour must be 0-23, got {}",
                cutoff_hour
            )));
        }
        let tz: Tz = timezone
            .parse()
            .map_err(|_| AppError::InvalidTimezone(timezone.to_string()))?;
        Ok(Self { cutoff_hour, tz })
    }

    /// Resolve the attendance day of a timestamp. Before the cutoff hour the
    /// logical day is the previous calendar date.
    pub fn resolve_day(&self, ts: DateTime<Tz>) -> AttendanceDay {
        let local = ts.with_timezone(&self.tz);
        let date = local.date_naive();

        if local.hour() < self.cutoff_hour {
            // Days::new(1) can only fail at the date range limits
            AttendanceDay(date.checked_sub_days(Days::new(1)).unwrap_or(date))
        } else {
            AttendanceDay(date)
        }
    }
}
