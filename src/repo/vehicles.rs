use crate::db::kv::KEY_VEHICLES;
use crate::errors::AppResult;
use crate::models::Vehicle;
use crate::repo::{load_collection, save_collection};
use rusqlite::Connection;

/// Repository for the `vehicles` collection.
pub struct VehiclesRepo {
    items: Vec<Vehicle>,
    ready: bool,
}

impl VehiclesRepo {
    pub fn load(conn: &Connection) -> AppResult<Self> {
        let items = load_collection(conn, KEY_VEHICLES)?;
        Ok(Self { items, ready: true })
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn list(&self) -> &[Vehicle] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.items.iter().find(|v| v.id == id)
    }

    pub fn upsert(&mut self, conn: &Connection, vehicle: Vehicle) -> AppResult<()> {
        match self.items.iter_mut().find(|v| v.id == vehicle.id) {
            Some(existing) => *existing = vehicle,
            None => self.items.push(vehicle),
        }
        save_collection(conn, KEY_VEHICLES, &self.items)
    }

    /// Replace the stored "current known reading" of one vehicle.
    pub fn set_odometer(&mut self, conn: &Connection, id: &str, odometer: i64) -> AppResult<bool> {
        let Some(vehicle) = self.items.iter_mut().find(|v| v.id == id) else {
            return Ok(false);
        };
        vehicle.odometer = Some(odometer);
        save_collection(conn, KEY_VEHICLES, &self.items)?;
        Ok(true)
    }

    pub fn remove(&mut self, conn: &Connection, id: &str) -> AppResult<bool> {
        let before = self.items.len();
        self.items.retain(|v| v.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        save_collection(conn, KEY_VEHICLES, &self.items)?;
        Ok(true)
    }

    pub fn replace_all(&mut self, conn: &Connection, items: Vec<Vehicle>) -> AppResult<()> {
        save_collection(conn, KEY_VEHICLES, &items)?;
        self.items = items;
        Ok(())
    }
}
