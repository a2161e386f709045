//! Key-value access layer: one JSON-encoded value per logical collection key.

use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// Logical store keys, one per persisted collection.
pub const KEY_SETTINGS: &str = "settings";
pub const KEY_USER_INFO: &str = "userInfo";
pub const KEY_VEHICLES: &str = "vehicles";
pub const KEY_TRIPS: &str = "trips";
pub const KEY_ODOMETER_READINGS: &str = "odometerReadings";

/// Read the raw JSON value stored under `key`, if any.
pub fn get(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    conn.query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
        row.get(0)
    })
    .optional()
    .map_err(|source| AppError::StorageRead {
        key: key.to_string(),
        source,
    })
}

/// Write (insert or replace) the raw JSON value stored under `key`.
pub fn set(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO kv (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
        params![key, value, Local::now().to_rfc3339()],
    )
    .map_err(|source| AppError::StorageWrite {
        key: key.to_string(),
        source,
    })?;
    Ok(())
}
