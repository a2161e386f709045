//! Domain repositories over the key-value store.
//!
//! Each repository owns one logical collection: it loads it from the store
//! once, keeps the in-memory snapshot as the source of truth, and writes the
//! full collection back to its key on every mutation. Mutations always derive
//! the next state from the current snapshot before persisting, so rapid
//! successive writes cannot lose updates in the single-threaded CLI flow.

pub mod odometer;
pub mod settings;
pub mod trips;
pub mod user_info;
pub mod vehicles;

pub use odometer::OdometerRepo;
pub use settings::SettingsRepo;
pub use trips::TripsRepo;
pub use user_info::UserInfoRepo;
pub use vehicles::VehiclesRepo;

use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// All five repositories, loaded together.
pub struct Repos {
    pub settings: SettingsRepo,
    pub user_info: UserInfoRepo,
    pub vehicles: VehiclesRepo,
    pub trips: TripsRepo,
    pub odometer: OdometerRepo,
}

impl Repos {
    /// Load every repository in the documented dependency order:
    /// Settings → UserInfo → Vehicles → Trips → Odometer.
    /// Trip and vehicle mutations cascade across later collections, so the
    /// order is part of the contract, not an accident of wiring.
    pub fn load(pool: &DbPool) -> AppResult<Self> {
        let conn = &pool.conn;
        Ok(Self {
            settings: SettingsRepo::load(conn)?,
            user_info: UserInfoRepo::load(conn)?,
            vehicles: VehiclesRepo::load(conn)?,
            trips: TripsRepo::load(conn)?,
            odometer: OdometerRepo::load(conn)?,
        })
    }

    /// True once every collection finished its initial load.
    /// Before that, collections must be treated as unknown, not as empty.
    pub fn all_ready(&self) -> bool {
        self.settings.is_ready()
            && self.user_info.is_ready()
            && self.vehicles.is_ready()
            && self.trips.is_ready()
            && self.odometer.is_ready()
    }
}

/// Read a JSON-encoded collection from the store; an absent key is an empty
/// collection, a present-but-corrupt value is a storage-boundary error.
pub(crate) fn load_collection<T: DeserializeOwned>(
    conn: &Connection,
    key: &str,
) -> AppResult<Vec<T>> {
    match kv::get(conn, key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|e| AppError::Other(format!("corrupt collection under key '{key}': {e}"))),
        None => Ok(Vec::new()),
    }
}

pub(crate) fn save_collection<T: Serialize>(
    conn: &Connection,
    key: &str,
    items: &[T],
) -> AppResult<()> {
    let raw = serde_json::to_string(items)
        .map_err(|e| AppError::Other(format!("failed to encode collection '{key}': {e}")))?;
    kv::set(conn, key, &raw)
}

pub(crate) fn load_singleton<T: DeserializeOwned + Default>(
    conn: &Connection,
    key: &str,
) -> AppResult<T> {
    match kv::get(conn, key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|e| AppError::Other(format!("corrupt value under key '{key}': {e}"))),
        None => Ok(T::default()),
    }
}

pub(crate) fn save_singleton<T: Serialize>(
    conn: &Connection,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)
        .map_err(|e| AppError::Other(format!("failed to encode value '{key}': {e}")))?;
    kv::set(conn, key, &raw)
}
