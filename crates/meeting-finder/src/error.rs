//! Error types for meeting-finder operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FinderError {
    /// The range ends before it starts.
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: u32, end: u32 },

    /// The range reaches past the end of the day.
    #[error("Range [{start}, {end}) does not fit in a {day_length}-minute day", day_length = crate::time_range::DAY_LENGTH)]
    OutOfDay { start: u32, end: u32 },
}

pub type Result<T> = std::result::Result<T, FinderError>;
