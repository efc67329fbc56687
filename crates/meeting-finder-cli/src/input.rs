//! JSON documents accepted on the command line.
//!
//! Events arrive as plain DTOs and are validated into `meeting_finder` types
//! here, so malformed ranges surface as errors naming the offending event
//! instead of panics.

use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use meeting_finder::{Event, MeetingRequest, TimeRange};
use serde::{Deserialize, Serialize};

/// Top-level input document.
#[derive(Deserialize)]
pub struct CalendarInput {
    #[serde(default)]
    pub events: Vec<EventInput>,
    pub request: MeetingRequest,
}

/// One busy interval. Exactly one of `end` and `duration` must be given.
#[derive(Deserialize)]
pub struct EventInput {
    #[serde(default)]
    pub title: Option<String>,
    pub start: u32,
    #[serde(default)]
    pub end: Option<u32>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl EventInput {
    fn into_event(self, index: usize) -> Result<Event> {
        let title = self.title.unwrap_or_else(|| format!("event #{}", index));
        let when = match (self.end, self.duration) {
            (Some(end), None) => TimeRange::try_from_start_end(self.start, end, false),
            (None, Some(duration)) => TimeRange::try_from_start_duration(self.start, duration),
            (Some(_), Some(_)) => bail!("Event '{}' has both 'end' and 'duration'", title),
            (None, None) => bail!("Event '{}' needs either 'end' or 'duration'", title),
        }
        .with_context(|| format!("Invalid time range for event '{}'", title))?;
        Ok(Event::new(title, when, self.attendees))
    }
}

impl CalendarInput {
    /// Load a calendar document from `path`, or from stdin when no path is
    /// given, and validate it.
    pub fn load(path: Option<&str>) -> Result<(Vec<Event>, MeetingRequest)> {
        let (json, source) = match path {
            Some(path) => (
                fs::read_to_string(path)
                    .with_context(|| format!("Failed to read file: {}", path))?,
                path,
            ),
            None => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read calendar from stdin")?;
                (buf, "<stdin>")
            }
        };
        Self::parse(&json).with_context(|| format!("Invalid calendar in {}", source))
    }

    /// Parse and validate a JSON calendar document.
    pub fn parse(json: &str) -> Result<(Vec<Event>, MeetingRequest)> {
        let input: CalendarInput =
            serde_json::from_str(json).context("Failed to parse calendar JSON")?;
        let events = input
            .events
            .into_iter()
            .enumerate()
            .map(|(i, e)| e.into_event(i))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            events = events.len(),
            duration = input.request.duration(),
            "loaded calendar"
        );
        Ok((events, input.request))
    }
}

/// A slot as written to JSON output.
#[derive(Serialize)]
pub struct SlotOutput {
    pub start: u32,
    pub end: u32,
    pub duration: u32,
}

impl From<&TimeRange> for SlotOutput {
    fn from(r: &TimeRange) -> Self {
        Self {
            start: r.start(),
            end: r.end(),
            duration: r.duration(),
        }
    }
}
