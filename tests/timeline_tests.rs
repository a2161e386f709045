//! Library-level tests for the merged trip/odometer timeline.

use chrono::{NaiveDate, NaiveTime};
use triplogs::core::timeline::{TimelineItem, build_timeline};
use triplogs::models::{Expenses, OdometerReading, Trip};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

fn trip(d: &str) -> Trip {
    Trip::new(
        date(d),
        time("08:00"),
        time("10:00"),
        10.0,
        20.0,
        Expenses::default(),
        None,
    )
}

fn reading(d: &str, odometer: i64) -> OdometerReading {
    OdometerReading::new("veh-1".to_string(), date(d), odometer)
}

#[test]
fn test_timeline_merges_descending_by_date() {
    let trips = vec![trip("2025-02-01"), trip("2025-06-01")];
    let readings = vec![reading("2025-04-01", 1200)];

    let items = build_timeline(&trips, &readings, 2025);

    let dates: Vec<String> = items.iter().map(|i| i.date().to_string()).collect();
    assert_eq!(dates, vec!["2025-06-01", "2025-04-01", "2025-02-01"]);

    assert!(matches!(items[0], TimelineItem::Trip(_)));
    assert!(matches!(items[1], TimelineItem::Odometer(_)));
}

#[test]
fn test_timeline_filters_by_year() {
    let trips = vec![trip("2024-06-01"), trip("2025-06-01")];
    let readings = vec![reading("2024-03-01", 900)];

    let items = build_timeline(&trips, &readings, 2025);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].date(), date("2025-06-01"));
}

#[test]
fn test_timeline_same_date_keeps_trips_before_readings() {
    let trips = vec![trip("2025-05-05")];
    let readings = vec![reading("2025-05-05", 3000)];

    let items = build_timeline(&trips, &readings, 2025);

    assert_eq!(items.len(), 2);
    assert!(matches!(items[0], TimelineItem::Trip(_)));
    assert!(matches!(items[1], TimelineItem::Odometer(_)));

    // deterministic: a second build yields the same order
    let again = build_timeline(&trips, &readings, 2025);
    assert_eq!(items, again);
}

#[test]
fn test_timeline_empty_collections() {
    let items = build_timeline(&[], &[], 2025);
    assert!(items.is_empty());
}
