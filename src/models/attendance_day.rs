use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// One 24-hour attendance cycle. It does NOT align with calendar midnight:
/// the cycle starts at a configured cutoff hour (see core::calendar), so two
/// timestamps on the same calendar date can belong to different days.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct AttendanceDay(pub NaiveDate);

impl AttendanceDay {
    pub fn date_str(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(Self)
    }
}

impl fmt::Display for AttendanceDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date_str())
    }
}
