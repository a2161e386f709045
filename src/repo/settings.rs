use crate::db::kv::KEY_SETTINGS;
use crate::errors::AppResult;
use crate::models::AppSettings;
use crate::repo::{load_singleton, save_singleton};
use rusqlite::Connection;

/// Repository for the `settings` singleton.
/// Always exists: an absent key loads as the defaults.
pub struct SettingsRepo {
    value: AppSettings,
    ready: bool,
}

impl SettingsRepo {
    pub fn load(conn: &Connection) -> AppResult<Self> {
        let value = load_singleton(conn, KEY_SETTINGS)?;
        Ok(Self { value, ready: true })
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn get(&self) -> &AppSettings {
        &self.value
    }

    pub fn set(&mut self, conn: &Connection, value: AppSettings) -> AppResult<()> {
        save_singleton(conn, KEY_SETTINGS, &value)?;
        self.value = value;
        Ok(())
    }
}
