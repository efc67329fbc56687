//! Explain why a proposed slot does not work.
//!
//! Compares a candidate slot against every event that shares an attendee with
//! the request. Adjacent events (one ends exactly when the slot starts, or
//! vice versa) are NOT conflicts.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::event::Event;
use crate::request::MeetingRequest;
use crate::time_range::TimeRange;

/// An event that collides with a proposed slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub event: Event,
    pub overlap_minutes: u32,
    /// Request attendees who are busy in `event`.
    pub attendees: BTreeSet<String>,
    /// Whether any of `attendees` is mandatory.
    pub blocks_mandatory: bool,
}

/// Find every event that overlaps `candidate` and involves at least one of the
/// request's attendees, in input order.
pub fn find_conflicts(
    events: &[Event],
    request: &MeetingRequest,
    candidate: TimeRange,
) -> Vec<Conflict> {
    let everyone = request.all_attendees();

    events
        .iter()
        .filter_map(|event| {
            let overlap = event.when().intersection(&candidate)?;
            let attendees: BTreeSet<String> =
                event.attendees().intersection(&everyone).cloned().collect();
            if attendees.is_empty() {
                return None;
            }
            let blocks_mandatory = !attendees.is_disjoint(request.mandatory());
            Some(Conflict {
                event: event.clone(),
                overlap_minutes: overlap.duration(),
                attendees,
                blocks_mandatory,
            })
        })
        .collect()
}
