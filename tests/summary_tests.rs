//! Library-level tests for the pure aggregation engine.

use chrono::{NaiveDate, NaiveTime};
use triplogs::core::summary::{
    SummaryWindow, group_by_year, per_trip_metrics, windowed_summary, yearly_summary,
};
use triplogs::models::{Expenses, Trip};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

fn trip(d: &str, start: &str, end: &str, miles: f64, gross: f64, expenses: Expenses) -> Trip {
    Trip::new(date(d), time(start), time(end), miles, gross, expenses, None)
}

#[test]
fn test_empty_summary_is_all_zero() {
    let summary = yearly_summary(&[]);

    assert_eq!(summary.trip_count, 0);
    assert_eq!(summary.total_distance, 0.0);
    assert_eq!(summary.gross_earnings, 0.0);
    assert_eq!(summary.total_expenses, 0.0);
    assert_eq!(summary.net_earnings, 0.0);
}

#[test]
fn test_windowed_summary_on_empty_input_never_produces_nan() {
    let now = date("2025-06-15");

    for window in [
        SummaryWindow::Last7Days,
        SummaryWindow::Last30Days,
        SummaryWindow::CurrentYear,
    ] {
        let result = windowed_summary(&[], window, now);
        assert_eq!(result.summary.net_earnings, 0.0);
        assert_eq!(result.avg_hourly_rate, 0.0);
        assert_eq!(result.expense_ratio, 0.0);
        assert!(result.avg_hourly_rate.is_finite());
        assert!(result.expense_ratio.is_finite());
    }
}

#[test]
fn test_net_is_gross_minus_expenses_exactly() {
    let trips = vec![
        trip(
            "2025-01-01",
            "08:00",
            "12:00",
            30.0,
            100.0,
            Expenses {
                gasoline: 10.0,
                tolls: 2.5,
                food: 7.5,
            },
        ),
        trip(
            "2025-02-01",
            "10:00",
            "15:00",
            45.0,
            180.0,
            Expenses {
                gasoline: 20.0,
                tolls: 0.0,
                food: 5.0,
            },
        ),
    ];

    let summary = yearly_summary(&trips);
    assert_eq!(
        summary.net_earnings,
        summary.gross_earnings - summary.total_expenses
    );
    assert_eq!(summary.gross_earnings, 280.0);
    assert_eq!(summary.total_expenses, 45.0);
    assert_eq!(summary.net_earnings, 235.0);

    // Order independence
    let reversed: Vec<Trip> = trips.iter().rev().cloned().collect();
    assert_eq!(yearly_summary(&reversed), summary);
}

#[test]
fn test_trip_duration_regular_day() {
    let t = trip(
        "2025-03-01",
        "08:00",
        "16:00",
        10.0,
        50.0,
        Expenses::default(),
    );
    let metrics = per_trip_metrics(&t, 0.67);

    assert_eq!(metrics.duration_minutes, 480);
    assert_eq!(metrics.hourly_rate, 50.0 / 8.0);
}

#[test]
fn test_trip_duration_crosses_midnight() {
    let t = trip(
        "2025-03-01",
        "23:00",
        "01:00",
        10.0,
        40.0,
        Expenses::default(),
    );
    let metrics = per_trip_metrics(&t, 0.67);

    assert_eq!(metrics.duration_minutes, 120);
    assert_eq!(metrics.hourly_rate, 20.0);
}

#[test]
fn test_zero_duration_trip_has_zero_hourly_rate() {
    let t = trip(
        "2025-03-01",
        "08:00",
        "08:00",
        5.0,
        25.0,
        Expenses::default(),
    );
    let metrics = per_trip_metrics(&t, 0.67);

    assert_eq!(metrics.duration_minutes, 0);
    assert_eq!(metrics.hourly_rate, 0.0);
    assert!(metrics.hourly_rate.is_finite());
}

#[test]
fn test_per_trip_deduction_uses_rate() {
    let t = trip(
        "2025-03-01",
        "08:00",
        "10:00",
        100.0,
        80.0,
        Expenses {
            gasoline: 12.0,
            tolls: 3.0,
            food: 5.0,
        },
    );
    let metrics = per_trip_metrics(&t, 0.67);

    assert_eq!(metrics.deduction, 67.0);
    assert_eq!(metrics.total_expenses, 20.0);
    assert_eq!(metrics.net, 60.0);
}

#[test]
fn test_group_by_year_partitions_disjointly_and_exhaustively() {
    let trips = vec![
        trip("2023-01-01", "08:00", "10:00", 10.0, 20.0, Expenses::default()),
        trip("2023-06-01", "08:00", "10:00", 20.0, 40.0, Expenses::default()),
        trip("2024-01-01", "08:00", "10:00", 30.0, 60.0, Expenses::default()),
    ];

    let grouped = group_by_year(&trips);

    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[&2023].len(), 2);
    assert_eq!(grouped[&2024].len(), 1);

    // Concatenating all groups reproduces the original set
    let mut regrouped_ids: Vec<String> = grouped
        .values()
        .flat_map(|ts| ts.iter().map(|t| t.id.clone()))
        .collect();
    regrouped_ids.sort();
    let mut original_ids: Vec<String> = trips.iter().map(|t| t.id.clone()).collect();
    original_ids.sort();
    assert_eq!(regrouped_ids, original_ids);

    // Yearly totals from the example
    assert_eq!(yearly_summary(&grouped[&2023]).total_distance, 30.0);
    assert_eq!(yearly_summary(&grouped[&2024]).total_distance, 30.0);
}

#[test]
fn test_group_by_year_orders_descending_within_year() {
    let trips = vec![
        trip("2023-01-01", "08:00", "10:00", 10.0, 20.0, Expenses::default()),
        trip("2023-06-01", "08:00", "10:00", 20.0, 40.0, Expenses::default()),
    ];

    let grouped = group_by_year(&trips);
    let year = &grouped[&2023];

    assert_eq!(year[0].date, date("2023-06-01"));
    assert_eq!(year[1].date, date("2023-01-01"));
}

#[test]
fn test_windowed_summary_filters_inclusively() {
    let now = date("2025-06-15");
    let trips = vec![
        // exactly 7 days back: included
        trip("2025-06-08", "08:00", "10:00", 10.0, 30.0, Expenses::default()),
        // 8 days back: excluded from the 7-day window
        trip("2025-06-07", "08:00", "10:00", 20.0, 50.0, Expenses::default()),
        // previous year: excluded from every window
        trip("2024-06-14", "08:00", "10:00", 40.0, 90.0, Expenses::default()),
    ];

    let week = windowed_summary(&trips, SummaryWindow::Last7Days, now);
    assert_eq!(week.summary.trip_count, 1);
    assert_eq!(week.summary.total_distance, 10.0);

    let month = windowed_summary(&trips, SummaryWindow::Last30Days, now);
    assert_eq!(month.summary.trip_count, 2);

    let year = windowed_summary(&trips, SummaryWindow::CurrentYear, now);
    assert_eq!(year.summary.trip_count, 2);
    assert_eq!(year.summary.total_distance, 30.0);
}

#[test]
fn test_windowed_summary_rates() {
    let now = date("2025-06-15");
    let trips = vec![
        // 2h at 60 gross, 15 expenses
        trip(
            "2025-06-14",
            "08:00",
            "10:00",
            20.0,
            60.0,
            Expenses {
                gasoline: 10.0,
                tolls: 5.0,
                food: 0.0,
            },
        ),
        // 4h at 120 gross
        trip(
            "2025-06-13",
            "09:00",
            "13:00",
            40.0,
            120.0,
            Expenses::default(),
        ),
    ];

    let result = windowed_summary(&trips, SummaryWindow::Last7Days, now);

    assert_eq!(result.driving_minutes, 360);
    assert_eq!(result.avg_hourly_rate, 30.0);
    assert_eq!(result.expense_ratio, 15.0 / 180.0);
}
