//! Compute free gaps between busy events.
//!
//! Events are sorted by start time and swept left to right with a cursor
//! holding the earliest minute nobody relevant is busy. The space between the
//! cursor and each event's start is a candidate gap. Overlapping and nested
//! events are absorbed by only ever moving the cursor forward.

use crate::event::Event;
use crate::time_range::{TimeRange, END_OF_DAY, START_OF_DAY};

/// A point the sweep stops at: a busy event, or the end of the day.
#[derive(Debug, Clone, Copy)]
struct Boundary {
    start: u32,
    end: u32,
    /// The end-of-day boundary. The gap leading up to it includes the last
    /// minute of the day.
    terminal: bool,
}

impl Boundary {
    fn busy(when: TimeRange) -> Self {
        Self {
            start: when.start(),
            end: when.end(),
            terminal: false,
        }
    }

    fn end_of_day() -> Self {
        Self {
            start: END_OF_DAY,
            end: END_OF_DAY,
            terminal: true,
        }
    }
}

/// Find every free gap of at least `duration` minutes around `events`.
///
/// `events` should already be limited to those relevant to the attendees being
/// scheduled; their order does not matter. Returns gaps sorted by start time.
/// A zero-length gap between abutting events is only reported when `duration`
/// is zero.
pub fn find_gaps(events: &[&Event], duration: u32) -> Vec<TimeRange> {
    let mut boundaries: Vec<Boundary> = events.iter().map(|e| Boundary::busy(e.when())).collect();

    // Stable: events sharing a start keep their input order.
    boundaries.sort_by_key(|b| b.start);
    boundaries.push(Boundary::end_of_day());

    let mut gaps = Vec::new();
    let mut earliest_free = START_OF_DAY;

    for boundary in &boundaries {
        // The cursor may already be past this boundary's start when it sits
        // inside an earlier, longer event; there is no gap then.
        let gap = TimeRange::try_from_start_end(earliest_free, boundary.start, boundary.terminal);
        if let Ok(gap) = gap {
            if gap.duration() >= duration {
                gaps.push(gap);
            }
        }
        earliest_free = earliest_free.max(boundary.end);
    }

    tracing::trace!(
        events = events.len(),
        duration,
        gaps = gaps.len(),
        "computed free gaps"
    );

    gaps
}
