// Date utility functions
// Civil calendar helpers shared by the label resolver and the grid layout

use chrono::{Datelike, NaiveDate, Weekday};

/// Number of days in `month` of `year`, or `None` if the month is out of range
/// or the year cannot be represented.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, 1)?;

    Some(match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    })
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Three-letter English weekday name, e.g. "Mon".
pub fn weekday_abbrev(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Full English month name, e.g. "January".
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}
