use crate::core::summary::{per_trip_metrics, yearly_summary};
use crate::core::timeline::{TimelineItem, build_timeline};
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::{AppSettings, OdometerReading, Trip, UserInfo, Vehicle};
use crate::utils::formatting::format_currency;
use crate::utils::time::format_minutes;
use std::path::Path;

/// Render the yearly driving report: title, user info block, annual summary
/// table and the chronological data log mixing trips and odometer updates.
pub(crate) fn export_pdf(
    user_info: &UserInfo,
    settings: &AppSettings,
    vehicles: &[Vehicle],
    trips: &[Trip],
    readings: &[OdometerReading],
    year: i32,
    path: &Path,
) -> AppResult<()> {
    let mut pdf = PdfManager::new(&format!("Trip Logs — Yearly Driving Report {year}"));

    // ------------------------------------
    // User information block
    // ------------------------------------
    pdf.write_heading("User Information");
    pdf.write_lines(&[
        format!("Name: {}", or_na(&user_info.name)),
        format!("Address: {}", or_na(&user_info.address)),
        format!("City/State: {}", or_na(&user_info.city_state)),
        format!("Country: {}", or_na(&user_info.country)),
        format!("Zip Code: {}", or_na(&user_info.zip_code)),
    ]);

    // ------------------------------------
    // Annual summary table
    // ------------------------------------
    let summary = yearly_summary(trips);
    let total_deduction = summary.total_distance * settings.deduction_rate;
    let currency = settings.currency.as_str();

    let unit_label = match settings.unit {
        crate::models::DistanceUnit::Miles => "Miles",
        crate::models::DistanceUnit::Kilometers => "Kilometers",
    };

    pdf.write_heading("Annual Summary");
    pdf.write_table(
        &["Metric", "Value"],
        &[
            vec![
                format!("Total {} Driven", unit_label),
                format!("{:.1}", summary.total_distance),
            ],
            vec![
                "Gross Earnings".to_string(),
                format_currency(summary.gross_earnings, currency),
            ],
            vec![
                "Total Expenses".to_string(),
                format_currency(summary.total_expenses, currency),
            ],
            vec![
                "Total Net".to_string(),
                format_currency(summary.net_earnings, currency),
            ],
            vec![
                "Tax Deduction Rate".to_string(),
                format!(
                    "{} / {}",
                    format_currency(settings.deduction_rate, currency),
                    settings.unit.singular()
                ),
            ],
            vec![
                "Total Tax Deduction".to_string(),
                format_currency(total_deduction, currency),
            ],
        ],
    );

    // ------------------------------------
    // Chronological data log
    // ------------------------------------
    let timeline = build_timeline(trips, readings, year);

    let headers = [
        "Date", "Duration", "Distance", "Gross", "Gasoline", "Tolls", "Food", "Vehicle",
    ];
    let rows: Vec<Vec<String>> = timeline
        .iter()
        .map(|item| match item {
            TimelineItem::Trip(t) => {
                let metrics = per_trip_metrics(t, settings.deduction_rate);
                vec![
                    t.date_str(),
                    format_minutes(metrics.duration_minutes),
                    format!("{:.1}", t.miles),
                    format_currency(t.gross_earnings, currency),
                    format_currency(t.expenses.gasoline, currency),
                    format_currency(t.expenses.tolls, currency),
                    format_currency(t.expenses.food, currency),
                    vehicle_label(vehicles, t.vehicle_id.as_deref()),
                ]
            }
            TimelineItem::Odometer(r) => vec![
                r.date.format("%Y-%m-%d").to_string(),
                "Odometer Update".to_string(),
                r.odometer.to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                vehicle_label(vehicles, Some(&r.vehicle_id)),
            ],
        })
        .collect();

    pdf.write_heading("Data Log");
    pdf.write_table(&headers, &rows);

    pdf.save(path)?;

    notify_export_success("PDF", path);
    Ok(())
}

fn or_na(s: &str) -> &str {
    if s.trim().is_empty() { "N/A" } else { s }
}

fn vehicle_label(vehicles: &[Vehicle], id: Option<&str>) -> String {
    id.and_then(|id| vehicles.iter().find(|v| v.id == id))
        .map(|v| v.label())
        .unwrap_or_else(|| "N/A".to_string())
}
