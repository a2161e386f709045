use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{OdometerReading, Trip, Vehicle};
use crate::repo::Repos;
use chrono::NaiveDate;

/// Seed value for the next trip's `odometer_start` for a vehicle:
/// the most recent `odometer_end` among that vehicle's trips (by date,
/// descending), else the vehicle's stored reading, else None.
pub fn next_odometer_start(vehicle_id: &str, trips: &[Trip], vehicle: &Vehicle) -> Option<i64> {
    let mut latest: Option<&Trip> = None;

    for trip in trips
        .iter()
        .filter(|t| t.vehicle_id.as_deref() == Some(vehicle_id) && t.odometer_end.is_some())
    {
        // Strict comparison: same-date trips resolve to collection order,
        // which the repository keeps most-recent-first.
        if latest.is_none_or(|l| trip.date > l.date) {
            latest = Some(trip);
        }
    }

    latest.and_then(|t| t.odometer_end).or(vehicle.odometer)
}

pub struct OdometerLogic;

impl OdometerLogic {
    /// Record a manual odometer check-in and push the value onto the
    /// vehicle's stored reading.
    pub fn add(
        pool: &mut DbPool,
        repos: &mut Repos,
        vehicle_id: &str,
        date: NaiveDate,
        odometer: i64,
    ) -> AppResult<OdometerReading> {
        if odometer < 0 {
            return Err(AppError::Validation(format!(
                "odometer reading must be non-negative, got {odometer}"
            )));
        }
        if repos.vehicles.get(vehicle_id).is_none() {
            return Err(AppError::VehicleNotFound(vehicle_id.to_string()));
        }

        let reading = OdometerReading::new(vehicle_id.to_string(), date, odometer);

        repos.odometer.upsert(&pool.conn, reading.clone())?;
        repos.vehicles.set_odometer(&pool.conn, vehicle_id, odometer)?;

        crate::db::log::applog(
            &pool.conn,
            "odometer",
            vehicle_id,
            &format!("Recorded odometer {} on {}", odometer, date),
        )?;

        Ok(reading)
    }
}
