//! Minute spans within a single day.
//!
//! A [`TimeRange`] is a half-open span `[start, end)` of minutes measured from
//! the start of the day. The day runs from [`START_OF_DAY`] up to, and
//! including, the minute [`END_OF_DAY`], so the widest possible range is
//! [`TimeRange::WHOLE_DAY`] = `[0, DAY_LENGTH)`.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::{FinderError, Result};

/// Number of minutes in the modeled day.
pub const DAY_LENGTH: u32 = 24 * 60;

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Last minute of the day. Ranges that must include it are built with an
/// inclusive end (see [`TimeRange::from_start_end`]).
pub const END_OF_DAY: u32 = DAY_LENGTH - 1;

/// An immutable span of minutes `[start, end)`.
///
/// # Invariants
/// `start <= end <= DAY_LENGTH`.
///
/// The derived ordering compares `start` first and `end` second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    /// The entire day, `[START_OF_DAY, DAY_LENGTH)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: DAY_LENGTH,
    };

    /// Creates the range `[start, start + duration)`.
    ///
    /// # Panics
    ///
    /// Panics if the range would end past [`DAY_LENGTH`].
    pub fn from_start_duration(start: u32, duration: u32) -> Self {
        match Self::try_from_start_duration(start, duration) {
            Ok(range) => range,
            Err(e) => panic!("TimeRange::from_start_duration: {e}"),
        }
    }

    /// Creates the range `[start, end)`, or `[start, end + 1)` when
    /// `inclusive_end` is set.
    ///
    /// The inclusive form exists so that a range can reach the final minute of
    /// the day: `from_start_end(s, END_OF_DAY, true)` ends at [`DAY_LENGTH`].
    ///
    /// # Panics
    ///
    /// Panics if `start` is after the effective end, or the effective end is
    /// past [`DAY_LENGTH`].
    pub fn from_start_end(start: u32, end: u32, inclusive_end: bool) -> Self {
        match Self::try_from_start_end(start, end, inclusive_end) {
            Ok(range) => range,
            Err(e) => panic!("TimeRange::from_start_end: {e}"),
        }
    }

    /// Fallible counterpart of [`TimeRange::from_start_duration`].
    ///
    /// # Errors
    /// Returns [`FinderError::OutOfDay`] if the range ends past [`DAY_LENGTH`].
    pub fn try_from_start_duration(start: u32, duration: u32) -> Result<Self> {
        let end = start
            .checked_add(duration)
            .ok_or(FinderError::OutOfDay {
                start,
                end: u32::MAX,
            })?;
        Self::checked(start, end)
    }

    /// Fallible counterpart of [`TimeRange::from_start_end`].
    ///
    /// # Errors
    /// Returns [`FinderError::InvalidRange`] if `start` is after the effective
    /// end, and [`FinderError::OutOfDay`] if the effective end is past
    /// [`DAY_LENGTH`].
    pub fn try_from_start_end(start: u32, end: u32, inclusive_end: bool) -> Result<Self> {
        let end = if inclusive_end {
            end.checked_add(1).ok_or(FinderError::OutOfDay { start, end })?
        } else {
            end
        };
        Self::checked(start, end)
    }

    fn checked(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(FinderError::InvalidRange { start, end });
        }
        if end > DAY_LENGTH {
            return Err(FinderError::OutOfDay { start, end });
        }
        Ok(Self { start, end })
    }

    /// First minute of the range.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// First minute after the range.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if `point` lies in `[start, end)`.
    pub fn contains(&self, point: u32) -> bool {
        self.start <= point && point < self.end
    }

    /// Returns `true` if `other` lies entirely within this range.
    ///
    /// A zero-length range is contained when its position is within the bounds
    /// of this range, end included.
    pub fn contains_range(&self, other: &TimeRange) -> bool {
        if other.start == other.end {
            return self.start <= other.start && other.start <= self.end;
        }
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the two half-open ranges share at least one minute.
    ///
    /// Adjacent ranges (`a.end == b.start`) do not overlap, and a zero-length
    /// range overlaps nothing.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    /// The shared part of two overlapping ranges, or `None` if they do not
    /// overlap.
    pub fn intersection(&self, other: &TimeRange) -> Option<TimeRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(TimeRange {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Orders ranges by start minute only.
    pub fn cmp_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.start.cmp(&b.start)
    }

    /// Orders ranges by end minute only.
    pub fn cmp_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end.cmp(&b.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range: [{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_end_reaches_day_length() {
        let range = TimeRange::from_start_end(600, END_OF_DAY, true);
        assert_eq!(range.end(), DAY_LENGTH);
        assert_eq!(range.duration(), DAY_LENGTH - 600);
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            TimeRange::try_from_start_end(100, 50, false),
            Err(FinderError::InvalidRange { start: 100, end: 50 })
        );
    }

    #[test]
    fn range_past_end_of_day_is_rejected() {
        assert_eq!(
            TimeRange::try_from_start_duration(1400, 60),
            Err(FinderError::OutOfDay {
                start: 1400,
                end: 1460
            })
        );
        assert!(TimeRange::try_from_start_duration(u32::MAX, 1).is_err());
    }

    #[test]
    #[should_panic(expected = "Invalid range")]
    fn infallible_constructor_panics_on_inverted_range() {
        let _ = TimeRange::from_start_end(10, 5, false);
    }

    #[test]
    fn empty_range_overlaps_nothing_even_inside_another() {
        let empty = TimeRange::from_start_end(150, 150, false);
        let around = TimeRange::from_start_end(100, 200, false);
        assert!(!empty.overlaps(&around));
        assert!(!around.overlaps(&empty));
        assert_eq!(around.intersection(&empty), None);
    }

    #[test]
    fn display_uses_half_open_notation() {
        assert_eq!(
            TimeRange::from_start_duration(60, 30).to_string(),
            "Range: [60, 90)"
        );
    }
}
