use crate::db::kv::KEY_TRIPS;
use crate::errors::AppResult;
use crate::models::Trip;
use crate::repo::{load_collection, save_collection};
use rusqlite::Connection;

/// Repository for the `trips` collection.
pub struct TripsRepo {
    items: Vec<Trip>,
    ready: bool,
}

impl TripsRepo {
    pub fn load(conn: &Connection) -> AppResult<Self> {
        let items = load_collection(conn, KEY_TRIPS)?;
        Ok(Self { items, ready: true })
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn list(&self) -> &[Trip] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Trip> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Insert a new trip (most recent first) or fully replace an existing one.
    pub fn upsert(&mut self, conn: &Connection, trip: Trip) -> AppResult<()> {
        match self.items.iter_mut().find(|t| t.id == trip.id) {
            Some(existing) => *existing = trip,
            None => self.items.insert(0, trip),
        }
        save_collection(conn, KEY_TRIPS, &self.items)
    }

    /// Remove a trip by id. Returns true if a trip was removed.
    pub fn remove(&mut self, conn: &Connection, id: &str) -> AppResult<bool> {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        save_collection(conn, KEY_TRIPS, &self.items)?;
        Ok(true)
    }

    /// Remove every trip attributed to `vehicle_id`. Returns how many went.
    /// Trips with no vehicle are never touched.
    pub fn remove_by_vehicle(&mut self, conn: &Connection, vehicle_id: &str) -> AppResult<usize> {
        let before = self.items.len();
        self.items
            .retain(|t| t.vehicle_id.as_deref() != Some(vehicle_id));
        let removed = before - self.items.len();
        if removed > 0 {
            save_collection(conn, KEY_TRIPS, &self.items)?;
        }
        Ok(removed)
    }

    /// Replace the whole collection (restore path).
    pub fn replace_all(&mut self, conn: &Connection, items: Vec<Trip>) -> AppResult<()> {
        save_collection(conn, KEY_TRIPS, &items)?;
        self.items = items;
        Ok(())
    }
}
