use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A standalone manual mileage check-in for a vehicle, not tied to a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OdometerReading {
    pub id: String,
    pub vehicle_id: String,
    pub date: NaiveDate,
    pub odometer: i64,
}

impl OdometerReading {
    pub fn new(vehicle_id: String, date: NaiveDate, odometer: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            vehicle_id,
            date,
            odometer,
        }
    }
}
