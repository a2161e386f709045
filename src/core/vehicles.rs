use crate::db::log::applog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Vehicle;
use crate::repo::Repos;

pub struct VehicleLogic;

impl VehicleLogic {
    pub fn add(pool: &mut DbPool, repos: &mut Repos, vehicle: Vehicle) -> AppResult<Vehicle> {
        if vehicle.make.trim().is_empty() || vehicle.model.trim().is_empty() {
            return Err(AppError::Validation(
                "vehicle make and model cannot be empty".to_string(),
            ));
        }
        if let Some(odo) = vehicle.odometer
            && odo < 0
        {
            return Err(AppError::Validation(format!(
                "vehicle odometer must be non-negative, got {odo}"
            )));
        }

        repos.vehicles.upsert(&pool.conn, vehicle.clone())?;

        applog(
            &pool.conn,
            "vehicle-add",
            &vehicle.id,
            &format!("Added vehicle {}", vehicle.label()),
        )?;

        Ok(vehicle)
    }

    /// Delete a vehicle.
    ///
    /// Cascades: every trip attributed to the vehicle is deleted with it.
    /// Odometer readings for the vehicle are left in place; trips without a
    /// vehicle are never touched. Returns the number of cascaded trips.
    pub fn delete(pool: &mut DbPool, repos: &mut Repos, id: &str) -> AppResult<usize> {
        if !repos.vehicles.remove(&pool.conn, id)? {
            return Err(AppError::VehicleNotFound(id.to_string()));
        }

        let cascaded = repos.trips.remove_by_vehicle(&pool.conn, id)?;

        applog(
            &pool.conn,
            "vehicle-del",
            id,
            &format!("Deleted vehicle and {cascaded} attributed trip(s)"),
        )?;

        Ok(cascaded)
    }
}
