//! # meeting-finder
//!
//! Find every free slot in a day that can hold a meeting.
//!
//! Given the day's busy [`Event`]s, each tagged with the attendees it keeps
//! busy, and a [`MeetingRequest`] naming mandatory attendees, optional
//! attendees and a duration, [`query`] returns the time ranges where the
//! meeting fits. Slots that suit optional attendees too are preferred; when
//! none exist the optional attendees are dropped.
//!
//! ```rust
//! use meeting_finder::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(
//!     "standup",
//!     TimeRange::from_start_duration(540, 30),
//!     ["alice"],
//! )];
//! let request = MeetingRequest::new(["alice"], 60);
//!
//! let slots = query(&events, &request);
//! assert_eq!(slots[0], TimeRange::from_start_end(0, 540, false));
//! assert_eq!(slots[1], TimeRange::from_start_end(570, 1440, false));
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — Minute spans within the day
//! - [`event`] — Busy intervals with attendees
//! - [`request`] — Meeting requests
//! - [`relevance`] — Which events constrain which attendees
//! - [`gaps`] — Free gaps between busy events
//! - [`query`] — Two-phase slot search
//! - [`conflict`] — Events colliding with a proposed slot
//! - [`error`] — Error types

pub mod conflict;
pub mod error;
pub mod event;
pub mod gaps;
pub mod query;
pub mod relevance;
pub mod request;
pub mod time_range;

pub use conflict::{find_conflicts, Conflict};
pub use error::FinderError;
pub use event::Event;
pub use query::{first_available, query, query_detailed, Phase, QueryOutcome};
pub use request::MeetingRequest;
pub use time_range::{TimeRange, DAY_LENGTH, END_OF_DAY, START_OF_DAY};
