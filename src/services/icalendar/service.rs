use super::import;
use crate::models::event::Calendar;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Service for turning iCalendar (.ics) content into calendars
pub struct ICalendarService;

impl ICalendarService {
    /// Create a new ICalendarService
    pub fn new() -> Self {
        Self
    }

    /// Parse an iCalendar formatted string into a named calendar
    pub fn import_calendar(&self, name: &str, ics_content: &str) -> Result<Calendar> {
        let events = import::from_str(ics_content)
            .with_context(|| format!("Failed to parse calendar '{}'", name))?;
        log::info!("Imported {} events from {}", events.len(), name);
        Ok(Calendar::named(name, events))
    }

    /// Import a calendar from a .ics file on disk
    pub fn import_from_file(&self, path: &Path) -> Result<Calendar> {
        let content =
            fs::read_to_string(path).context(format!("Failed to read .ics file: {:?}", path))?;
        self.import_calendar(&path.display().to_string(), &content)
    }
}

impl Default for ICalendarService {
    fn default() -> Self {
        Self::new()
    }
}
