use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Trip;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

/// Print database file info plus per-collection record counts.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COLLECTION COUNTS
    //
    for (label, key) in [
        ("Vehicles", kv::KEY_VEHICLES),
        ("Trips", kv::KEY_TRIPS),
        ("Odometer readings", kv::KEY_ODOMETER_READINGS),
    ] {
        let count = collection_len(&pool.conn, key)?;
        println!(
            "{}• {}:{} {}{}{}",
            CYAN, label, RESET, GREEN, count, RESET
        );
    }

    //
    // 3) TRIP DATE RANGE
    //
    let trips: Vec<Trip> = match kv::get(&pool.conn, kv::KEY_TRIPS)? {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        None => Vec::new(),
    };

    let first = trips.iter().map(|t| t.date).min();
    let last = trips.iter().map(|t| t.date).max();

    let fmt_first = first
        .map(|d| d.to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last
        .map(|d| d.to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Trip date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}

fn collection_len(conn: &rusqlite::Connection, key: &str) -> AppResult<usize> {
    let len = match kv::get(conn, key)? {
        Some(raw) => serde_json::from_str::<Vec<serde_json::Value>>(&raw)
            .map(|v| v.len())
            .unwrap_or(0),
        None => 0,
    };
    Ok(len)
}
