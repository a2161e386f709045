use crate::db::kv::KEY_ODOMETER_READINGS;
use crate::errors::AppResult;
use crate::models::OdometerReading;
use crate::repo::{load_collection, save_collection};
use rusqlite::Connection;

/// Repository for the `odometerReadings` collection.
pub struct OdometerRepo {
    items: Vec<OdometerReading>,
    ready: bool,
}

impl OdometerRepo {
    pub fn load(conn: &Connection) -> AppResult<Self> {
        let items = load_collection(conn, KEY_ODOMETER_READINGS)?;
        Ok(Self { items, ready: true })
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn list(&self) -> &[OdometerReading] {
        &self.items
    }

    /// Insert a new check-in, most recent first.
    pub fn upsert(&mut self, conn: &Connection, reading: OdometerReading) -> AppResult<()> {
        match self.items.iter_mut().find(|r| r.id == reading.id) {
            Some(existing) => *existing = reading,
            None => self.items.insert(0, reading),
        }
        save_collection(conn, KEY_ODOMETER_READINGS, &self.items)
    }

    pub fn remove(&mut self, conn: &Connection, id: &str) -> AppResult<bool> {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        save_collection(conn, KEY_ODOMETER_READINGS, &self.items)?;
        Ok(true)
    }

    pub fn replace_all(&mut self, conn: &Connection, items: Vec<OdometerReading>) -> AppResult<()> {
        save_collection(conn, KEY_ODOMETER_READINGS, &items)?;
        self.items = items;
        Ok(())
    }
}
