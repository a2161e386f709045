use crate::db::kv::KEY_USER_INFO;
use crate::errors::AppResult;
use crate::models::UserInfo;
use crate::repo::{load_singleton, save_singleton};
use rusqlite::Connection;

/// Repository for the `userInfo` singleton.
pub struct UserInfoRepo {
    value: UserInfo,
    ready: bool,
}

impl UserInfoRepo {
    pub fn load(conn: &Connection) -> AppResult<Self> {
        let value = load_singleton(conn, KEY_USER_INFO)?;
        Ok(Self { value, ready: true })
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn get(&self) -> &UserInfo {
        &self.value
    }

    pub fn set(&mut self, conn: &Connection, value: UserInfo) -> AppResult<()> {
        save_singleton(conn, KEY_USER_INFO, &value)?;
        self.value = value;
        Ok(())
    }
}
