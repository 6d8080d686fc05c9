pub mod attendance_day;
pub mod clock_event;
pub mod page;
pub mod shift;
