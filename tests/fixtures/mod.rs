// Test fixtures - reusable test data
// Provides consistent feeds and calendars across test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use ics_year_planner::models::event::{Calendar, Event};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
}

/// Sample feeds as served by calendar providers
pub mod feeds {
    /// Public holidays, all-day events
    pub const HOLIDAYS_2025: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Holidays//EN\r\n\
BEGIN:VEVENT\r\n\
UID:h1\r\n\
DTSTART;VALUE=DATE:20250101\r\n\
DTEND;VALUE=DATE:20250102\r\n\
SUMMARY:New Year's Day\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:h2\r\n\
DTSTART;VALUE=DATE:20250704\r\n\
SUMMARY:Independence Day\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:h3\r\n\
DTSTART;VALUE=DATE:20251225\r\n\
SUMMARY:Christmas Day\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    /// Team calendar with UTC timed events and a folded summary line
    pub const TEAM_2025: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
UID:t1\r\n\
DTSTART:20250101T090000Z\r\n\
SUMMARY:Kickoff Meeting\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:t2\r\n\
DTSTART:20250314T083000Z\r\n\
SUMMARY:Quarterly planning for the platform team and frie\r\n nds\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:t3\r\n\
DTSTART:20250630T223000Z\r\n\
SUMMARY:Release Meeting\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
}

/// Smallest valid PNG: one transparent pixel
pub const ONE_PIXEL_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

pub fn independence_day_calendar() -> Calendar {
    Calendar::named(
        "holidays",
        vec![Event::all_day(date(2025, 7, 4), "Independence Day")],
    )
}
