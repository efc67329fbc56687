//! What a caller asks for: who must attend, who may attend, and for how long.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An immutable meeting request.
///
/// `mandatory` and `optional` may share names; the optional tier only matters
/// for attendees not already mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    #[serde(default)]
    mandatory: BTreeSet<String>,
    #[serde(default)]
    optional: BTreeSet<String>,
    /// Required meeting length in minutes.
    duration: u32,
}

impl MeetingRequest {
    /// Creates a request with mandatory attendees only.
    pub fn new<I, S>(mandatory: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mandatory: mandatory.into_iter().map(Into::into).collect(),
            optional: BTreeSet::new(),
            duration,
        }
    }

    /// Returns a copy of this request with `optional` added to the optional
    /// attendees.
    pub fn with_optional<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional.extend(optional.into_iter().map(Into::into));
        self
    }

    pub fn mandatory(&self) -> &BTreeSet<String> {
        &self.mandatory
    }

    pub fn optional(&self) -> &BTreeSet<String> {
        &self.optional
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Union of mandatory and optional attendees.
    pub fn all_attendees(&self) -> BTreeSet<String> {
        self.mandatory.union(&self.optional).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_attendees_dedupes_overlapping_tiers() {
        let request = MeetingRequest::new(["alice", "bob"], 30).with_optional(["bob", "carol"]);
        let all: Vec<_> = request.all_attendees().into_iter().collect();
        assert_eq!(all, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn deserializes_with_missing_attendee_lists() {
        let request: MeetingRequest = serde_json::from_str(r#"{"duration":45}"#).unwrap();
        assert!(request.mandatory().is_empty());
        assert!(request.optional().is_empty());
        assert_eq!(request.duration(), 45);
    }
}
