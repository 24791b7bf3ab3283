//! RFC 5545 (.ics) import service.

mod import;
mod service;
mod utils;

pub use service::ICalendarService;

use crate::error::ImportError;
use crate::models::event::Event;

/// Parse feed text into events, in feed order.
pub fn parse_events(ics_content: &str) -> Result<Vec<Event>, ImportError> {
    import::from_str(ics_content)
}
