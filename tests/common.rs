#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tl() -> Command {
    cargo_bin_cmd!("triplogs")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_triplogs.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    tl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // add a couple of trips via CLI
    tl().args([
        "--db",
        db_path,
        "add",
        "2025-09-01",
        "--in",
        "08:00",
        "--out",
        "16:00",
        "--miles",
        "120.5",
        "--gross",
        "240.0",
        "--gas",
        "30.0",
        "--tolls",
        "5.5",
        "--food",
        "12.0",
    ])
    .assert()
    .success();

    tl().args([
        "--db",
        db_path,
        "add",
        "2025-09-15",
        "--in",
        "09:30",
        "--out",
        "17:30",
        "--miles",
        "80.0",
        "--gross",
        "150.0",
    ])
    .assert()
    .success();
}

/// Add a vehicle via CLI and return its id (looked up through the library).
pub fn add_vehicle(db_path: &str, make: &str, model: &str, odometer: Option<i64>) -> String {
    let mut args = vec![
        "--db".to_string(),
        db_path.to_string(),
        "vehicle".to_string(),
        "--add".to_string(),
        "--make".to_string(),
        make.to_string(),
        "--model".to_string(),
        model.to_string(),
    ];
    if let Some(odo) = odometer {
        args.push("--odometer".to_string());
        args.push(odo.to_string());
    }

    tl().args(&args).assert().success();

    let repos = load_repos(db_path);
    repos
        .vehicles
        .list()
        .iter()
        .find(|v| v.make == make && v.model == model)
        .expect("vehicle was just added")
        .id
        .clone()
}

/// Load all repositories straight from the library (read-only checks).
pub fn load_repos(db_path: &str) -> triplogs::repo::Repos {
    let pool = triplogs::db::pool::DbPool::new(db_path).expect("open db");
    triplogs::repo::Repos::load(&pool).expect("load repos")
}
