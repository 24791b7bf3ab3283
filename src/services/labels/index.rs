use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::event::Calendar;
use crate::models::settings::{CollisionPolicy, RendererConfig};

use super::resolver::{format_label, resolve_local_date};

/// Labels for one year, resolved in a single pass over all events.
///
/// Gives the same answer as `resolve_label` for every date of the year.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    labels: BTreeMap<NaiveDate, String>,
    dropped: usize,
}

impl LabelIndex {
    pub fn build(year: i32, calendars: &[Calendar], config: &RendererConfig) -> Self {
        let mut slots: BTreeMap<NaiveDate, String> = BTreeMap::new();
        let mut dropped = 0usize;

        for calendar in calendars {
            for event in &calendar.events {
                let (date, time) = resolve_local_date(event, &config.time_zone);
                if date.year() != year {
                    continue;
                }

                match config.collision_policy {
                    CollisionPolicy::FirstMatch => {
                        if slots.contains_key(&date) {
                            dropped += 1;
                            log::debug!(
                                "Dropping '{}' from {} on {}: date already labelled",
                                event.summary,
                                calendar.display_name(),
                                date
                            );
                        } else {
                            slots.insert(date, format_label(event, time, &config.replacements));
                        }
                    }
                }
            }
        }

        // Blank winners still claim their date, then fall back to the weekday.
        let labels = slots
            .into_iter()
            .filter(|(_, label)| !label.trim().is_empty())
            .collect();

        Self { labels, dropped }
    }

    pub fn label_for(&self, date: NaiveDate) -> Option<&str> {
        self.labels.get(&date).map(String::as_str)
    }

    /// Number of events hidden because another event already owned their date
    pub fn dropped_collisions(&self) -> usize {
        self.dropped
    }

    pub fn labelled_days(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::LabelIndex;
    use crate::models::event::{Calendar, Event};
    use crate::models::settings::RendererConfig;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_index_keeps_first_and_counts_drops() {
        let day = date(2025, 3, 3);
        let calendars = vec![
            Calendar::new(vec![Event::all_day(day, "Holiday"), Event::all_day(day, "Meeting")]),
            Calendar::new(vec![Event::all_day(day, "Birthday"), Event::all_day(date(2025, 3, 4), "Dentist")]),
        ];

        let index = LabelIndex::build(2025, &calendars, &RendererConfig::default());
        assert_eq!(index.label_for(day), Some("Holiday"));
        assert_eq!(index.label_for(date(2025, 3, 4)), Some("Dentist"));
        assert_eq!(index.dropped_collisions(), 2);
        assert_eq!(index.labelled_days(), 2);
    }

    #[test]
    fn test_index_ignores_other_years() {
        let calendars = vec![Calendar::new(vec![
            Event::all_day(date(2024, 12, 31), "Old"),
            Event::utc(date(2025, 12, 31).and_hms_opt(23, 30, 0).unwrap(), "Spills into 2026"),
        ])];

        let index = LabelIndex::build(2025, &calendars, &RendererConfig::default());
        assert_eq!(index.labelled_days(), 0);
        assert_eq!(index.label_for(date(2024, 12, 31)), None);
    }

    #[test]
    fn test_blank_winner_blocks_later_events() {
        let day = date(2025, 8, 8);
        let calendars = vec![Calendar::new(vec![Event::all_day(day, ""), Event::all_day(day, "Later")])];

        let index = LabelIndex::build(2025, &calendars, &RendererConfig::default());
        assert_eq!(index.label_for(day), None);
        assert_eq!(index.dropped_collisions(), 1);
    }
}
