//! Unified application error type.
//! All modules (db, repo, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage (key-value store)
    // ---------------------------
    #[error("Storage read error for key '{key}': {source}")]
    StorageRead {
        key: String,
        source: rusqlite::Error,
    },

    #[error("Storage write error for key '{key}': {source}")]
    StorageWrite {
        key: String,
        source: rusqlite::Error,
    },

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No trip found with id {0}")]
    TripNotFound(String),

    #[error("No vehicle found with id {0}")]
    VehicleNotFound(String),

    // ---------------------------
    // Backup / restore
    // ---------------------------
    #[error("Malformed backup payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid backup format: {0}")]
    InvalidBackupFormat(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
