//! Aggregation engine: pure functions over already-loaded collections.
//! Everything here is total over well-typed input and never produces
//! NaN or infinities; zero denominators report 0.

use crate::models::Trip;
use crate::utils::date::window_start;
use crate::utils::time::duration_minutes;
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use std::collections::BTreeMap;

/// Financial totals for one set of trips.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct YearlySummary {
    pub trip_count: usize,
    pub total_distance: f64,
    pub gross_earnings: f64,
    pub total_expenses: f64,
    pub net_earnings: f64,
}

/// Derived metrics for a single trip.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TripMetrics {
    pub duration_minutes: i64,
    pub hourly_rate: f64,
    pub total_expenses: f64,
    pub deduction: f64,
    pub net: f64,
}

/// Reporting window for `windowed_summary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryWindow {
    /// Trips dated within the last 7 days
    #[value(name = "7d")]
    Last7Days,
    /// Trips dated within the last 30 days
    #[value(name = "30d")]
    Last30Days,
    /// Trips of the current calendar year
    #[value(name = "year")]
    CurrentYear,
}

/// Windowed aggregation plus the derived rates shown on the summary screen.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WindowSummary {
    pub summary: YearlySummary,
    pub driving_minutes: i64,
    pub avg_hourly_rate: f64,
    pub expense_ratio: f64,
}

/// Sum distance, earnings and expenses over `trips`.
/// Empty input yields the all-zero summary.
pub fn yearly_summary(trips: &[Trip]) -> YearlySummary {
    let mut acc = YearlySummary {
        trip_count: trips.len(),
        ..Default::default()
    };

    for trip in trips {
        acc.total_distance += trip.miles;
        acc.gross_earnings += trip.gross_earnings;
        acc.total_expenses += trip.expenses.total();
    }

    acc.net_earnings = acc.gross_earnings - acc.total_expenses;
    acc
}

/// Derive per-trip metrics: wall-clock duration (midnight rollover included),
/// hourly rate, expense total, deduction estimate and net earnings.
pub fn per_trip_metrics(trip: &Trip, deduction_rate: f64) -> TripMetrics {
    let minutes = duration_minutes(trip.start_time, trip.end_time);
    let hours = minutes as f64 / 60.0;

    let hourly_rate = if minutes > 0 {
        trip.gross_earnings / hours
    } else {
        0.0
    };

    let total_expenses = trip.expenses.total();

    TripMetrics {
        duration_minutes: minutes,
        hourly_rate,
        total_expenses,
        deduction: trip.miles * deduction_rate,
        net: trip.gross_earnings - total_expenses,
    }
}

/// Partition trips by the calendar year of their date.
/// Within a year, trips are ordered descending by date.
pub fn group_by_year(trips: &[Trip]) -> BTreeMap<i32, Vec<Trip>> {
    let mut grouped: BTreeMap<i32, Vec<Trip>> = BTreeMap::new();

    for trip in trips {
        grouped.entry(trip.date.year()).or_default().push(trip.clone());
    }

    for year_trips in grouped.values_mut() {
        year_trips.sort_by(|a, b| b.date.cmp(&a.date));
    }

    grouped
}

/// Filter trips into the requested window (inclusive lower bound for the
/// trailing-day windows, calendar-year match for `CurrentYear`), then
/// aggregate them together with the average hourly rate and expense ratio.
pub fn windowed_summary(trips: &[Trip], window: SummaryWindow, now: NaiveDate) -> WindowSummary {
    let filtered: Vec<&Trip> = trips
        .iter()
        .filter(|t| match window {
            SummaryWindow::Last7Days => t.date >= window_start(now, 7),
            SummaryWindow::Last30Days => t.date >= window_start(now, 30),
            SummaryWindow::CurrentYear => t.date.year() == now.year(),
        })
        .collect();

    let mut summary = YearlySummary {
        trip_count: filtered.len(),
        ..Default::default()
    };
    let mut driving_minutes = 0i64;

    for trip in &filtered {
        summary.total_distance += trip.miles;
        summary.gross_earnings += trip.gross_earnings;
        summary.total_expenses += trip.expenses.total();
        driving_minutes += duration_minutes(trip.start_time, trip.end_time);
    }

    summary.net_earnings = summary.gross_earnings - summary.total_expenses;

    let driving_hours = driving_minutes as f64 / 60.0;
    let avg_hourly_rate = if driving_minutes > 0 {
        summary.gross_earnings / driving_hours
    } else {
        0.0
    };
    let expense_ratio = if summary.gross_earnings > 0.0 {
        summary.total_expenses / summary.gross_earnings
    } else {
        0.0
    };

    WindowSummary {
        summary,
        driving_minutes,
        avg_hourly_rate,
        expense_ratio,
    }
}
