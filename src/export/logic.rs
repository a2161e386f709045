use crate::core::summary::per_trip_metrics;
use crate::db::log::applog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TripExport;
use crate::export::pdf_export::export_pdf;
use crate::models::Trip;
use crate::repo::Repos;
use crate::ui::messages::warning;
use crate::utils::date::current_year;
use crate::utils::path::is_absolute;
use chrono::Datelike;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export trip data.
    ///
    /// - `format`: csv | json | pdf
    /// - `file`: absolute path of the output file
    /// - `year`: restrict to one calendar year; `None` exports everything
    ///   (PDF always reports a single year, defaulting to the current one).
    pub fn export(
        pool: &mut DbPool,
        repos: &Repos,
        format: ExportFormat,
        file: &str,
        year: Option<i32>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let format_label = format.as_str();

        match format {
            ExportFormat::Csv => {
                let rows = flatten_trips(repos, year);
                if rows.is_empty() {
                    warning("⚠️  No trips found for selected year.");
                    return Ok(());
                }
                export_csv(&rows, path)?;
            }
            ExportFormat::Json => {
                let rows = flatten_trips(repos, year);
                if rows.is_empty() {
                    warning("⚠️  No trips found for selected year.");
                    return Ok(());
                }
                export_json(&rows, path)?;
            }
            ExportFormat::Pdf => {
                let report_year = year.unwrap_or_else(current_year);
                export_pdf(
                    repos.user_info.get(),
                    repos.settings.get(),
                    repos.vehicles.list(),
                    &trips_of_year(repos, report_year),
                    repos.odometer.list(),
                    report_year,
                    path,
                )?;
            }
        }

        applog(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} data", format_label),
        )?;

        Ok(())
    }
}

fn trips_of_year(repos: &Repos, year: i32) -> Vec<Trip> {
    repos
        .trips
        .list()
        .iter()
        .filter(|t| t.date.year() == year)
        .cloned()
        .collect()
}

/// Flatten trips into export rows, chronologically ascending.
fn flatten_trips(repos: &Repos, year: Option<i32>) -> Vec<TripExport> {
    let deduction_rate = repos.settings.get().deduction_rate;

    let mut trips: Vec<&Trip> = repos
        .trips
        .list()
        .iter()
        .filter(|t| year.is_none_or(|y| t.date.year() == y))
        .collect();

    trips.sort_by(|a, b| (a.date, a.start_time).cmp(&(b.date, b.start_time)));

    trips
        .into_iter()
        .map(|t| {
            let metrics = per_trip_metrics(t, deduction_rate);
            let vehicle = t
                .vehicle_id
                .as_deref()
                .and_then(|id| repos.vehicles.get(id))
                .map(|v| v.label())
                .unwrap_or_default();

            TripExport {
                id: t.id.clone(),
                date: t.date_str(),
                start_time: t.start_time.format("%H:%M").to_string(),
                end_time: t.end_time.format("%H:%M").to_string(),
                duration_minutes: metrics.duration_minutes,
                miles: t.miles,
                gross_earnings: t.gross_earnings,
                gasoline: t.expenses.gasoline,
                tolls: t.expenses.tolls,
                food: t.expenses.food,
                total_expenses: metrics.total_expenses,
                net_earnings: metrics.net,
                vehicle,
            }
        })
        .collect()
}
