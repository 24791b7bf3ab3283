// Service module exports

pub mod fetch;
pub mod icalendar;
pub mod labels;
pub mod layout;
pub mod settings;
pub mod workbook;
