//! Decide which events constrain a set of attendees.

use std::collections::BTreeSet;

use crate::event::Event;

/// Returns `true` if at least one of the event's attendees is in `attendees`.
pub fn is_relevant(event: &Event, attendees: &BTreeSet<String>) -> bool {
    !event.attendees().is_disjoint(attendees)
}

/// The events relevant to `attendees`, in input order.
pub fn relevant_events<'a>(events: &'a [Event], attendees: &BTreeSet<String>) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| is_relevant(event, attendees))
        .collect()
}
