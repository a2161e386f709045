//! Backup/restore codec: the five collections as one JSON document.

use crate::db::log::applog;
use crate::db::pool::DbPool;
use crate::db::kv;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::models::{AppSettings, OdometerReading, Trip, UserInfo, Vehicle};
use crate::repo::Repos;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Write, stdin, stdout};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// Latest backup document version written by this binary.
pub const BACKUP_VERSION: u32 = 1;

/// The five top-level fields every backup document must carry.
const REQUIRED_FIELDS: [&str; 5] = [
    "userInfo",
    "vehicles",
    "settings",
    "trips",
    "odometerReadings",
];

fn default_version() -> u32 {
    // Files written before the version field existed are treated as v1.
    1
}

/// One backup file: all five collections, plus a schema version for
/// forward-compatible migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    pub user_info: UserInfo,
    pub vehicles: Vec<Vehicle>,
    pub settings: AppSettings,
    pub trips: Vec<Trip>,
    pub odometer_readings: Vec<OdometerReading>,
}

impl BackupDocument {
    /// Snapshot the current state of all repositories.
    /// Refuses to run over repositories that never finished loading: an
    /// unknown collection must not be exported as a confirmed-empty one.
    pub fn from_repos(repos: &Repos) -> AppResult<Self> {
        if !repos.all_ready() {
            return Err(AppError::Other(
                "collections not fully loaded; refusing to back up".to_string(),
            ));
        }

        Ok(Self {
            version: BACKUP_VERSION,
            user_info: repos.user_info.get().clone(),
            vehicles: repos.vehicles.list().to_vec(),
            settings: repos.settings.get().clone(),
            trips: repos.trips.list().to_vec(),
            odometer_readings: repos.odometer.list().to_vec(),
        })
    }

    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Other(format!("failed to encode backup document: {e}")))
    }

    /// Two-stage decode: unparsable JSON is a malformed payload; a parsed
    /// object missing (or mis-typing) one of the five collections is an
    /// invalid backup format.
    pub fn decode(raw: &str) -> AppResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| AppError::MalformedPayload(e.to_string()))?;

        let obj = value.as_object().ok_or_else(|| {
            AppError::InvalidBackupFormat("top-level value is not an object".to_string())
        })?;

        for field in REQUIRED_FIELDS {
            if !obj.contains_key(field) {
                return Err(AppError::InvalidBackupFormat(format!(
                    "missing required field '{field}'"
                )));
            }
        }

        let doc: BackupDocument = serde_json::from_value(value)
            .map_err(|e| AppError::InvalidBackupFormat(e.to_string()))?;

        if doc.version > BACKUP_VERSION {
            return Err(AppError::InvalidBackupFormat(format!(
                "unsupported backup version {}",
                doc.version
            )));
        }

        Ok(doc)
    }
}

/// Deterministic default backup filename for a given date.
pub fn default_backup_filename(date: NaiveDate) -> String {
    format!("trip-logs-backup-{}.json", date.format("%Y-%m-%d"))
}

pub struct BackupLogic;

impl BackupLogic {
    /// Write the backup document to `dest_file` (or the default filename in
    /// the current directory), optionally compressing it into a .zip.
    pub fn backup(
        pool: &mut DbPool,
        repos: &Repos,
        dest_file: Option<&str>,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let doc = BackupDocument::from_repos(repos)?;

        let dest = match dest_file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(default_backup_filename(crate::utils::date::today())),
        };

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(&dest, force)?;

        fs::write(&dest, doc.to_json()?)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let compressed = compress_backup(&dest)?;

            if compressed != dest {
                fs::remove_file(&dest)?;
            }

            compressed
        } else {
            dest
        };

        applog(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        )?;

        Ok(final_path)
    }

    /// Replace all five collections from a backup file.
    ///
    /// The file is decoded and validated before anything is touched; the
    /// apply step runs inside one transaction, so a failure at any point
    /// leaves every collection exactly as it was. The destructive overwrite
    /// requires an explicit confirmation unless `force` is set.
    pub fn restore(pool: &mut DbPool, repos: &mut Repos, file: &str, force: bool) -> AppResult<()> {
        let raw = fs::read_to_string(expand_tilde(file))?;
        let doc = BackupDocument::decode(&raw)?;

        if !force && !confirm_restore(file)? {
            println!("❌ Restore cancelled by user.");
            return Ok(());
        }

        apply_document(pool, &doc)?;

        // The in-memory snapshots are stale now; reload from the store.
        *repos = Repos::load(pool)?;

        applog(
            &pool.conn,
            "restore",
            file,
            &format!(
                "Restored {} trip(s), {} vehicle(s), {} odometer reading(s)",
                doc.trips.len(),
                doc.vehicles.len(),
                doc.odometer_readings.len()
            ),
        )?;

        success(format!("Restore completed from {}", file));
        Ok(())
    }
}

/// Write all five collections inside a single transaction.
fn apply_document(pool: &mut DbPool, doc: &BackupDocument) -> AppResult<()> {
    let tx = pool.conn.transaction()?;

    let settings = serde_json::to_string(&doc.settings)
        .map_err(|e| AppError::Other(format!("failed to encode settings: {e}")))?;
    let user_info = serde_json::to_string(&doc.user_info)
        .map_err(|e| AppError::Other(format!("failed to encode user info: {e}")))?;
    let vehicles = serde_json::to_string(&doc.vehicles)
        .map_err(|e| AppError::Other(format!("failed to encode vehicles: {e}")))?;
    let trips = serde_json::to_string(&doc.trips)
        .map_err(|e| AppError::Other(format!("failed to encode trips: {e}")))?;
    let readings = serde_json::to_string(&doc.odometer_readings)
        .map_err(|e| AppError::Other(format!("failed to encode odometer readings: {e}")))?;

    kv::set(&tx, kv::KEY_SETTINGS, &settings)?;
    kv::set(&tx, kv::KEY_USER_INFO, &user_info)?;
    kv::set(&tx, kv::KEY_VEHICLES, &vehicles)?;
    kv::set(&tx, kv::KEY_TRIPS, &trips)?;
    kv::set(&tx, kv::KEY_ODOMETER_READINGS, &readings)?;

    tx.commit()?;
    Ok(())
}

fn confirm_restore(file: &str) -> AppResult<bool> {
    println!(
        "⚠️  Restoring '{}' will overwrite ALL current data (settings, user info, vehicles, trips, odometer readings).",
        file
    );
    print!("Continue? [y/N]: ");
    stdout().flush().ok();

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "backup.json".to_string()),
        options,
    )
    .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}
