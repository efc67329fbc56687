//! Busy intervals on attendees' calendars.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::time_range::TimeRange;

/// An immutable calendar entry: a titled [`TimeRange`] during which every
/// listed attendee is busy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    title: String,
    when: TimeRange,
    attendees: BTreeSet<String>,
}

impl Event {
    /// Creates an event. Duplicate attendee names collapse into one.
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// Human-readable label. Carries no scheduling meaning.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }
}
