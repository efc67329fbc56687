//! Answer a meeting request against a set of calendar events.
//!
//! The search runs in up to two phases. The first treats every attendee,
//! mandatory and optional, as a hard constraint. If that leaves no slot and
//! the request names mandatory attendees, the optional attendees are dropped
//! and the search repeats for the mandatory attendees alone.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::event::Event;
use crate::gaps::find_gaps;
use crate::relevance::relevant_events;
use crate::request::MeetingRequest;
use crate::time_range::TimeRange;

/// Which attendee set produced a [`QueryOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Slots free for mandatory and optional attendees alike.
    AllAttendees,
    /// Slots free for mandatory attendees; optional attendees were dropped.
    MandatoryOnly,
}

/// Slots found for a request, together with the phase that found them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOutcome {
    /// Feasible slots, sorted by start and pairwise non-overlapping.
    pub slots: Vec<TimeRange>,
    pub phase: Phase,
}

/// Find every slot of at least `request.duration()` minutes in which no
/// relevant attendee is busy.
///
/// An empty result means no slot works.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    query_detailed(events, request).slots
}

/// Like [`query`], but also reports whether optional attendees had to be
/// dropped.
///
/// [`Phase::MandatoryOnly`] is only reported when the request names at least
/// one optional attendee who is not also mandatory.
pub fn query_detailed(events: &[Event], request: &MeetingRequest) -> QueryOutcome {
    let everyone = request.all_attendees();
    let slots = free_slots_for(events, &everyone, request.duration());

    // Without mandatory attendees there is nobody to fall back to: an empty
    // answer stands rather than degrading to "the whole day is free".
    let nothing_to_fall_back_to = request.mandatory().is_empty() && !request.optional().is_empty();
    if !slots.is_empty() || nothing_to_fall_back_to {
        tracing::debug!(
            slots = slots.len(),
            attendees = everyone.len(),
            "answered request with all attendees"
        );
        return QueryOutcome {
            slots,
            phase: Phase::AllAttendees,
        };
    }

    // Optional attendees who are also mandatory leave nobody to drop; the
    // mandatory-only search would repeat the same sweep.
    if request.optional().is_subset(request.mandatory()) {
        tracing::debug!(
            attendees = everyone.len(),
            "no slot fits the mandatory attendees"
        );
        return QueryOutcome {
            slots,
            phase: Phase::AllAttendees,
        };
    }

    let slots = free_slots_for(events, request.mandatory(), request.duration());
    tracing::debug!(
        slots = slots.len(),
        dropped_optional = request.optional().difference(request.mandatory()).count(),
        "no slot fits everyone; fell back to mandatory attendees"
    );
    QueryOutcome {
        slots,
        phase: Phase::MandatoryOnly,
    }
}

/// The first slot [`query`] would return, if any.
pub fn first_available(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    query(events, request).into_iter().next()
}

fn free_slots_for(events: &[Event], attendees: &BTreeSet<String>, duration: u32) -> Vec<TimeRange> {
    find_gaps(&relevant_events(events, attendees), duration)
}
