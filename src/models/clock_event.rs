use super::{attendance_day::AttendanceDay, shift::Shift};
use chrono::DateTime;
use chrono_tz::Tz;

/// A fully resolved clock-in, derived from one parsed message.
/// Ephemeral: consumed by the ledger immediately, never stored as-is.
#[derive(Debug, Clone)]
pub struct ClockEvent {
    pub shift: Shift,
    pub page_key: String,
    pub is_cover: bool,
    pub actor: String,
    pub timestamp: DateTime<Tz>,
    pub day: AttendanceDay,
}
