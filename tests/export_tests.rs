use predicates::str::contains;
use std::fs;

mod common;
use common::{add_vehicle, init_db_with_data, setup_test_db, temp_out, tl};

#[test]
fn test_export_trips_csv_all() {
    let db_path = setup_test_db("export_trips_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_trips_csv_all", "csv");

    tl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
    // derived columns present
    assert!(content.contains("duration_minutes"));
    assert!(content.contains("net_earnings"));
}

#[test]
fn test_export_trips_json_year_filter() {
    let db_path = setup_test_db("export_trips_json_year");
    init_db_with_data(&db_path);

    tl().args([
        "--db", &db_path, "add", "2024-03-10", "--in", "08:00", "--out", "12:00", "--miles",
        "25.0", "--gross", "55.0",
    ])
    .assert()
    .success();

    let out = temp_out("export_trips_json_year", "json");

    tl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--year", "2025",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
    assert!(!content.contains("2024-03-10"));
}

#[test]
fn test_export_json_carries_derived_metrics() {
    let db_path = setup_test_db("export_json_metrics");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_metrics", "json");

    tl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let first = &rows[0];

    // rows are chronological: the 2025-09-01 trip comes first
    assert_eq!(first["date"], "2025-09-01");
    assert_eq!(first["duration_minutes"], 480);
    assert_eq!(first["gross_earnings"], 240.0);
    assert_eq!(first["total_expenses"], 47.5);
    assert_eq!(first["net_earnings"], 192.5);
}

#[test]
fn test_export_pdf_report() {
    let db_path = setup_test_db("export_pdf_report");
    init_db_with_data(&db_path);
    let vehicle_id = add_vehicle(&db_path, "Toyota", "Prius", Some(9000));

    tl().args([
        "--db",
        &db_path,
        "odometer",
        "--vehicle",
        &vehicle_id,
        "--reading",
        "9500",
        "--date",
        "2025-09-20",
    ])
    .assert()
    .success();

    let out = temp_out("export_pdf_report", "pdf");

    tl().args([
        "--db", &db_path, "export", "--format", "pdf", "--file", &out, "--year", "2025",
    ])
    .assert()
    .success()
    .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"), "output is a PDF document");
    assert!(bytes.len() > 500, "document has content");
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_data(&db_path);

    tl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        "relative.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_year_warns_without_writing() {
    let db_path = setup_test_db("export_empty_year");
    init_db_with_data(&db_path);

    let out = temp_out("export_empty_year", "csv");

    tl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--year", "1999",
    ])
    .assert()
    .success()
    .stdout(contains("No trips found"));

    assert!(fs::metadata(&out).is_err(), "no file written");
}
