use crate::error::ImportError;
use crate::models::event::Event;

use super::utils::{parse_start, unescape_text, unfold_lines};

/// Fields collected while walking one `VEVENT` block.
#[derive(Default)]
struct PendingEvent {
    summary: Option<String>,
    start: Option<(String, bool)>,
}

pub(super) fn from_str(ics_content: &str) -> Result<Vec<Event>, ImportError> {
    if !(ics_content.contains("BEGIN:VCALENDAR") || ics_content.contains("BEGIN:VEVENT")) {
        return Err(ImportError::NotIcs);
    }

    let mut events = Vec::new();
    let mut current: Option<PendingEvent> = None;
    // Depth of components nested inside the current VEVENT (VALARM etc.)
    let mut nested = 0usize;

    for line in unfold_lines(ics_content) {
        let line = line.trim();

        if line == "BEGIN:VEVENT" {
            current = Some(PendingEvent::default());
            nested = 0;
        } else if line == "END:VEVENT" {
            if let Some(pending) = current.take() {
                if let Some(event) = finish_event(pending)? {
                    events.push(event);
                }
            }
        } else if let Some(pending) = current.as_mut() {
            if line.starts_with("BEGIN:") {
                nested += 1;
            } else if line.starts_with("END:") {
                nested = nested.saturating_sub(1);
            } else if nested == 0 {
                parse_event_property(line, pending);
            }
        }
    }

    Ok(events)
}

fn parse_event_property(line: &str, event: &mut PendingEvent) {
    let Some(colon_pos) = line.find(':') else {
        return;
    };
    let (key_part, value) = line.split_at(colon_pos);
    let value = &value[1..];

    let key = match key_part.find(';') {
        Some(semicolon) => &key_part[..semicolon],
        None => key_part,
    };

    match key.to_ascii_uppercase().as_str() {
        "SUMMARY" => {
            event.summary = Some(unescape_text(value));
        }
        "DTSTART" => {
            let date_only = key_part.to_ascii_uppercase().contains("VALUE=DATE")
                && !key_part.to_ascii_uppercase().contains("VALUE=DATE-TIME");
            event.start = Some((value.to_string(), date_only));
        }
        _ => {}
    }
}

fn finish_event(pending: PendingEvent) -> Result<Option<Event>, ImportError> {
    let summary = pending.summary.unwrap_or_default();

    let Some((raw_start, date_only)) = pending.start else {
        log::debug!("Skipping event '{}' without DTSTART", summary);
        return Ok(None);
    };

    let parsed = parse_start(&raw_start, date_only).ok_or_else(|| ImportError::InvalidStart {
        value: raw_start.clone(),
        summary: summary.clone(),
    })?;

    Ok(Some(Event {
        start: parsed.start,
        is_start_utc: parsed.is_utc,
        summary,
    }))
}
