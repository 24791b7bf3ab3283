// Event module
// Feed event and calendar collection models

use chrono::{NaiveDate, NaiveDateTime};

/// A single dated entry from a calendar feed.
///
/// `start` carries no zone; `is_start_utc` says whether it is a UTC instant
/// or already a local wall-clock value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub start: NaiveDateTime,
    pub is_start_utc: bool,
    pub summary: String,
}

impl Event {
    /// Create an event whose start is a UTC instant
    ///
    /// # Examples
    /// ```
    /// use ics_year_planner::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 3, 10)
    ///     .unwrap()
    ///     .and_hms_opt(23, 30, 0)
    ///     .unwrap();
    /// let event = Event::utc(start, "Late call");
    /// assert!(event.is_start_utc);
    /// ```
    pub fn utc(start: NaiveDateTime, summary: impl Into<String>) -> Self {
        Self {
            start,
            is_start_utc: true,
            summary: summary.into(),
        }
    }

    /// Create an event whose start is already local wall-clock time
    pub fn local(start: NaiveDateTime, summary: impl Into<String>) -> Self {
        Self {
            start,
            is_start_utc: false,
            summary: summary.into(),
        }
    }

    /// Create an all-day event (local midnight)
    pub fn all_day(date: NaiveDate, summary: impl Into<String>) -> Self {
        Self::local(date.and_time(chrono::NaiveTime::MIN), summary)
    }
}

/// An ordered collection of events, usually one parsed feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    pub name: Option<String>,
    pub events: Vec<Event>,
}

impl Calendar {
    pub fn new(events: Vec<Event>) -> Self {
        Self { name: None, events }
    }

    pub fn named(name: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            name: Some(name.into()),
            events,
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Label used in log output
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed calendar")
    }
}
