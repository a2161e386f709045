use serde::Serialize;

/// Flat per-trip record for export outputs.
#[derive(Serialize, Clone, Debug)]
pub struct TripExport {
    pub id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i64,
    pub miles: f64,
    pub gross_earnings: f64,
    pub gasoline: f64,
    pub tolls: f64,
    pub food: f64,
    pub total_expenses: f64,
    pub net_earnings: f64,
    pub vehicle: String,
}

/// Header for CSV / JSON / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "start_time",
        "end_time",
        "duration_minutes",
        "miles",
        "gross_earnings",
        "gasoline",
        "tolls",
        "food",
        "total_expenses",
        "net_earnings",
        "vehicle",
    ]
}

/// Convert one trip into a table row of strings (for PDF).
pub(crate) fn trip_to_row(t: &TripExport) -> Vec<String> {
    vec![
        t.id.clone(),
        t.date.clone(),
        t.start_time.clone(),
        t.end_time.clone(),
        t.duration_minutes.to_string(),
        format!("{:.1}", t.miles),
        format!("{:.2}", t.gross_earnings),
        format!("{:.2}", t.gasoline),
        format!("{:.2}", t.tolls),
        format!("{:.2}", t.food),
        format!("{:.2}", t.total_expenses),
        format!("{:.2}", t.net_earnings),
        t.vehicle.clone(),
    ]
}

pub(crate) fn trips_to_table(trips: &[TripExport]) -> Vec<Vec<String>> {
    trips.iter().map(trip_to_row).collect()
}
