// Integration tests for the full import -> render -> read back pipeline

mod fixtures;

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx};
use ics_year_planner::models::event::{Calendar, Event};
use ics_year_planner::models::replacement::ReplacementRule;
use ics_year_planner::services::icalendar::{parse_events, ICalendarService};
use ics_year_planner::services::labels::resolve_label;
use ics_year_planner::services::layout::HalfYear;
use ics_year_planner::services::settings::SettingsService;
use ics_year_planner::{GridRenderer, RendererConfig, ReplacementTable, Settings};
use pretty_assertions::assert_eq;

use fixtures::{at, date, feeds, independence_day_calendar, ONE_PIXEL_PNG};

fn open(bytes: &[u8]) -> Xlsx<Cursor<Vec<u8>>> {
    open_workbook_from_rs(Cursor::new(bytes.to_vec())).expect("Failed to open generated workbook")
}

fn text_at(range: &Range<Data>, row: u32, col: u32) -> Option<String> {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => Some(s.clone()),
        _ => None,
    }
}

fn number_at(range: &Range<Data>, row: u32, col: u32) -> Option<f64> {
    match range.get_value((row, col)) {
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        _ => None,
    }
}

fn all_strings(range: &Range<Data>) -> Vec<String> {
    range
        .used_cells()
        .filter_map(|(_, _, value)| match value {
            Data::String(s) => Some(s.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_independence_day_end_to_end() {
    let renderer = GridRenderer::new(RendererConfig::default());
    let calendars = vec![independence_day_calendar()];

    let output = renderer.render(2025, &calendars, None).expect("render failed");
    assert_eq!(output.file_name, "Calendar_2025.xlsx");

    let mut workbook = open(&output.file_bytes);
    assert_eq!(
        workbook.sheet_names(),
        vec!["2025 Calendar - H1".to_string(), "2025 Calendar - H2".to_string()]
    );

    let h2 = workbook.worksheet_range("2025 Calendar - H2").unwrap();
    // July block: columns A/B, header in row 2, July 4 in row 6 (zero-based 5)
    assert_eq!(text_at(&h2, 0, 0).as_deref(), Some("July - December 2025"));
    assert_eq!(text_at(&h2, 1, 0).as_deref(), Some("July"));
    assert_eq!(number_at(&h2, 5, 0), Some(4.0));
    assert_eq!(text_at(&h2, 5, 1).as_deref(), Some("Independence Day"));
    assert_eq!(text_at(&h2, 6, 1).as_deref(), Some("Sat"));
    assert_eq!(text_at(&h2, 1, 10).as_deref(), Some("December"));

    let h1 = workbook.worksheet_range("2025 Calendar - H1").unwrap();
    assert!(!all_strings(&h1).iter().any(|s| s == "Independence Day"));
    assert_eq!(text_at(&h1, 1, 0).as_deref(), Some("January"));
    assert_eq!(text_at(&h1, 2, 1).as_deref(), Some("Wed"));

    let names: Vec<String> = workbook
        .defined_names()
        .iter()
        .map(|(name, _)| name.clone())
        .collect();
    assert!(names.iter().any(|name| name == "Calendar_H1"));
    assert!(names.iter().any(|name| name == "Calendar_H2"));
}

#[test]
fn test_independence_day_row_is_not_shaded() {
    let renderer = GridRenderer::new(RendererConfig::default());
    let plans = renderer.plan(2025, &[independence_day_calendar()]).unwrap();

    let h2 = plans.iter().find(|plan| plan.half == HalfYear::Second).unwrap();
    let cell = h2.cell_for(date(2025, 7, 4)).unwrap();
    assert_eq!(cell.label, "Independence Day");
    assert!(!cell.is_weekend);

    let h1 = plans.iter().find(|plan| plan.half == HalfYear::First).unwrap();
    assert!(h1.cell_for(date(2025, 7, 4)).is_none());
    assert!(!h1.cells.iter().any(|cell| cell.label == "Independence Day"));
}

#[test]
fn test_feeds_with_replacements_and_time_zone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "time_zone = \"Europe/Berlin\"\n\n[[replacements]]\nfind = \"Meeting\"\nreplace = \"Mtg\"\n\n[[replacements]]\nfind = \"Mtg\"\nreplace = \"M\"\n",
    )
    .unwrap();

    let config = SettingsService::load(Some(&path))
        .unwrap()
        .into_renderer_config()
        .unwrap();

    let ics = ICalendarService::new();
    let calendars = vec![
        ics.import_calendar("holidays", feeds::HOLIDAYS_2025).unwrap(),
        ics.import_calendar("team", feeds::TEAM_2025).unwrap(),
    ];

    // Holiday on Jan 1 hides the kickoff meeting of the second calendar
    assert_eq!(
        resolve_label(date(2025, 1, 1), &calendars, &config).as_deref(),
        Some("New Year's Day")
    );
    // 08:30Z is 09:30 in Berlin in March
    assert_eq!(
        resolve_label(date(2025, 3, 14), &calendars, &config).as_deref(),
        Some("09:30 Quarterly planning for the platform team and friends")
    );
    // 22:30Z on June 30 is 00:30 on July 1 in Berlin, so it moves to H2
    assert_eq!(
        resolve_label(date(2025, 7, 1), &calendars, &config).as_deref(),
        Some("00:30 Release M")
    );
    assert_eq!(resolve_label(date(2025, 6, 30), &calendars, &config), None);

    let output = GridRenderer::new(config)
        .render(2025, &calendars, Some(ONE_PIXEL_PNG))
        .unwrap();
    let mut workbook = open(&output.file_bytes);
    let h2 = workbook.worksheet_range("2025 Calendar - H2").unwrap();
    assert_eq!(text_at(&h2, 2, 1).as_deref(), Some("00:30 Release M"));
}

#[test]
fn test_utc_day_boundary_crossing() {
    let config = RendererConfig::new(chrono_tz::Europe::Berlin, ReplacementTable::empty());
    let calendars = vec![Calendar::new(vec![Event::utc(at(2024, 3, 10, 23, 30), "Late call")])];

    assert_eq!(
        resolve_label(date(2024, 3, 11), &calendars, &config).as_deref(),
        Some("00:30 Late call")
    );
    assert_eq!(resolve_label(date(2024, 3, 10), &calendars, &config), None);
}

#[test]
fn test_same_day_collision_keeps_first_event() {
    let day = date(2025, 10, 3);
    let calendars = vec![Calendar::new(vec![
        Event::all_day(day, "Holiday"),
        Event::local(at(2025, 10, 3, 10, 0), "Meeting"),
    ])];

    let renderer = GridRenderer::new(RendererConfig::default());
    let plans = renderer.plan(2025, &calendars).unwrap();
    let labels: Vec<&str> = plans
        .iter()
        .flat_map(|plan| plan.cells.iter())
        .map(|cell| cell.label.as_str())
        .collect();

    assert!(labels.contains(&"Holiday"));
    assert!(!labels.iter().any(|label| label.contains("Meeting")));
}

#[test]
fn test_logo_is_embedded_on_both_sheets() {
    let renderer = GridRenderer::new(RendererConfig::default());
    let with_logo = renderer.render(2025, &[], Some(ONE_PIXEL_PNG)).unwrap();
    let without_logo = renderer.render(2025, &[], None).unwrap();

    assert!(with_logo.file_bytes.len() > without_logo.file_bytes.len());
    let mut workbook = open(&with_logo.file_bytes);
    assert_eq!(workbook.sheet_names().len(), 2);
}

#[test]
fn test_empty_find_rejected_before_rendering() {
    let settings = Settings {
        time_zone: "Europe/Berlin".to_string(),
        replacements: vec![ReplacementRule::new("", "anything")],
    };
    assert!(settings.into_renderer_config().is_err());
}

#[test]
fn test_parse_events_public_entry_point() {
    let events = parse_events(feeds::HOLIDAYS_2025).unwrap();
    let summaries: Vec<&str> = events.iter().map(|event| event.summary.as_str()).collect();
    assert_eq!(summaries, vec!["New Year's Day", "Independence Day", "Christmas Day"]);
}
