use chrono::{NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::models::event::{Calendar, Event};
use crate::models::replacement::ReplacementTable;
use crate::models::settings::{CollisionPolicy, RendererConfig};

/// Civil date and, for timed events, local clock time of an event start.
///
/// UTC starts are converted into `tz`; local starts are taken as-is. A local
/// time of exactly midnight means the event has no time of day.
pub fn resolve_local_date(event: &Event, tz: &Tz) -> (NaiveDate, Option<NaiveTime>) {
    let local = if event.is_start_utc {
        tz.from_utc_datetime(&event.start).naive_local()
    } else {
        event.start
    };

    let time = local.time();
    let time = (time != NaiveTime::MIN).then_some(time);
    (local.date(), time)
}

/// `"HH:MM summary"` for timed events, the substituted summary otherwise.
pub fn format_label(event: &Event, time: Option<NaiveTime>, replacements: &ReplacementTable) -> String {
    let summary = replacements.apply(&event.summary);
    match time {
        Some(time) => format!("{} {}", time.format("%H:%M"), summary),
        None => summary,
    }
}

/// Label for `date`, or `None` when the weekday fallback should be shown.
///
/// Calendars are searched in order, then events in stored order. With
/// `CollisionPolicy::FirstMatch` the first event on `date` decides the label
/// and every later event on that date is dropped, including ones in other
/// calendars. A winning event with a blank label also yields `None`.
pub fn resolve_label(date: NaiveDate, calendars: &[Calendar], config: &RendererConfig) -> Option<String> {
    match config.collision_policy {
        CollisionPolicy::FirstMatch => calendars
            .iter()
            .flat_map(|calendar| calendar.events.iter())
            .find_map(|event| {
                let (event_date, time) = resolve_local_date(event, &config.time_zone);
                (event_date == date).then(|| format_label(event, time, &config.replacements))
            })
            .filter(|label| !label.trim().is_empty()),
    }
}
