use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A DTSTART value split into its wall-clock components and zone marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ParsedStart {
    pub start: NaiveDateTime,
    pub is_utc: bool,
}

pub(super) fn unescape_text(text: &str) -> String {
    text.replace("\\n", "\n")
        .replace("\\N", "\n")
        .replace("\\,", ",")
        .replace("\\;", ";")
        .replace("\\\\", "\\")
}

/// Join RFC 5545 folded lines: a line starting with a space or tab continues
/// the previous one.
pub(super) fn unfold_lines(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for raw in content.lines() {
        let raw = raw.trim_end_matches('\r');
        if let Some(rest) = raw.strip_prefix(' ').or_else(|| raw.strip_prefix('\t')) {
            if let Some(last) = lines.last_mut() {
                last.push_str(rest);
                continue;
            }
        }
        lines.push(raw.to_string());
    }

    lines
}

/// Parse a `DTSTART` value. `date_only` is set when the property carried
/// `VALUE=DATE`; bare 8-digit values are accepted as dates too.
pub(super) fn parse_start(value: &str, date_only: bool) -> Option<ParsedStart> {
    let value = value.trim();

    if date_only || value.len() == 8 {
        let date = parse_date(value)?;
        return Some(ParsedStart {
            start: date.and_time(NaiveTime::MIN),
            is_utc: false,
        });
    }

    parse_datetime(value)
}

fn parse_datetime(s: &str) -> Option<ParsedStart> {
    let is_utc = s.ends_with('Z');
    let normalized = s.trim_end_matches('Z');

    if normalized.len() != 15 || !normalized.is_ascii() || normalized.as_bytes()[8] != b'T' {
        return None;
    }

    let date = parse_date(&normalized[0..8])?;
    let hour: u32 = normalized[9..11].parse().ok()?;
    let minute: u32 = normalized[11..13].parse().ok()?;
    let second: u32 = normalized[13..15].parse().ok()?;
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;

    Some(ParsedStart {
        start: date.and_time(time),
        is_utc,
    })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.is_ascii() {
        return None;
    }

    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
