use crate::ui::messages::warning;
use rusqlite::{Connection, Result};

/// Latest schema version understood by this binary.
const SCHEMA_VERSION: i32 = 2;

fn schema_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.pragma_update(None, "user_version", version)?;
    Ok(())
}

/// Create the `kv` table holding one JSON-encoded collection per key.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Run all migrations newer than the database's recorded schema version.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    let current = schema_version(conn)?;

    if current < 1 {
        create_kv_table(conn)?;
        set_schema_version(conn, 1)?;
    }

    if current < 2 {
        if current > 0 {
            warning("Upgrading database schema: adding internal log table...");
        }
        ensure_log_table(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    }

    Ok(())
}
