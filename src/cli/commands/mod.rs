pub mod config;
pub mod cover;
pub mod ingest;
pub mod init;
pub mod late;
pub mod log;
pub mod reset;
pub mod status;

use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;

/// Parse a shift name CLI argument.
pub fn parse_shift(name: &str) -> AppResult<Shift> {
    Shift::from_name(name).ok_or_else(|| AppError::InvalidShift(name.to_string()))
}
