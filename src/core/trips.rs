use crate::core::odometer::next_odometer_start;
use crate::db::log::applog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Trip;
use crate::repo::Repos;

pub struct TripLogic;

impl TripLogic {
    /// Create a trip.
    ///
    /// When the trip is attributed to a vehicle and the caller gave no
    /// explicit odometer values, `odometer_start` is seeded from the
    /// vehicle's trip history (or its stored reading) and `odometer_end`
    /// is derived from the distance. A known `odometer_end` is pushed back
    /// onto the vehicle's stored reading.
    pub fn add(pool: &mut DbPool, repos: &mut Repos, mut trip: Trip) -> AppResult<Trip> {
        trip.validate()?;

        if let Some(vehicle_id) = trip.vehicle_id.clone() {
            let vehicle = repos
                .vehicles
                .get(&vehicle_id)
                .cloned()
                .ok_or_else(|| AppError::VehicleNotFound(vehicle_id.clone()))?;

            if trip.odometer_start.is_none() {
                trip.odometer_start = next_odometer_start(&vehicle_id, repos.trips.list(), &vehicle);
            }

            if trip.odometer_end.is_none()
                && trip.miles > 0.0
                && let Some(start) = trip.odometer_start
            {
                trip.odometer_end = Some((start as f64 + trip.miles).round() as i64);
            }

            // Auto-filled values must satisfy the same constraints as
            // user-provided ones.
            trip.validate()?;

            if let Some(end) = trip.odometer_end {
                repos.vehicles.set_odometer(&pool.conn, &vehicle_id, end)?;
            }
        }

        repos.trips.upsert(&pool.conn, trip.clone())?;

        applog(
            &pool.conn,
            "trip-add",
            &trip.id,
            &format!("Added trip on {} ({} mi)", trip.date_str(), trip.miles),
        )?;

        Ok(trip)
    }

    /// Full-record replace of an existing trip (edit-form resubmission).
    /// No partial patches: every field of the record is the caller's value.
    pub fn update(pool: &mut DbPool, repos: &mut Repos, trip: Trip) -> AppResult<()> {
        trip.validate()?;

        if repos.trips.get(&trip.id).is_none() {
            return Err(AppError::TripNotFound(trip.id));
        }
        if let Some(vehicle_id) = &trip.vehicle_id
            && repos.vehicles.get(vehicle_id).is_none()
        {
            return Err(AppError::VehicleNotFound(vehicle_id.clone()));
        }

        repos.trips.upsert(&pool.conn, trip.clone())?;

        applog(
            &pool.conn,
            "trip-edit",
            &trip.id,
            &format!("Replaced trip on {}", trip.date_str()),
        )?;

        Ok(())
    }

    pub fn delete(pool: &mut DbPool, repos: &mut Repos, id: &str) -> AppResult<()> {
        if !repos.trips.remove(&pool.conn, id)? {
            return Err(AppError::TripNotFound(id.to_string()));
        }

        applog(&pool.conn, "trip-del", id, "Deleted trip")?;

        Ok(())
    }
}
