use predicates::str::contains;
use std::fs;

mod common;
use common::{add_vehicle, init_db_with_data, load_repos, setup_test_db, temp_out, tl};

#[test]
fn test_backup_restore_round_trip() {
    let db_path = setup_test_db("backup_round_trip");
    init_db_with_data(&db_path);
    add_vehicle(&db_path, "Toyota", "Prius", Some(42000));

    tl().args([
        "--db",
        &db_path,
        "user",
        "--name",
        "Jamie Driver",
        "--zip",
        "73301",
    ])
    .assert()
    .success();

    let backup_file = temp_out("backup_round_trip", "json");
    tl().args(["--db", &db_path, "backup", "--file", &backup_file])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let before = load_repos(&db_path);

    // Restore into a completely fresh database
    let restored_db = setup_test_db("backup_round_trip_restored");
    tl().args(["--db", &restored_db, "--test", "init"])
        .assert()
        .success();

    tl().args([
        "--db",
        &restored_db,
        "restore",
        "--file",
        &backup_file,
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("Restore completed"));

    let after = load_repos(&restored_db);

    assert_eq!(before.trips.list(), after.trips.list());
    assert_eq!(before.vehicles.list(), after.vehicles.list());
    assert_eq!(before.odometer.list(), after.odometer.list());
    assert_eq!(before.settings.get(), after.settings.get());
    assert_eq!(before.user_info.get(), after.user_info.get());
}

#[test]
fn test_backup_document_carries_version_and_collections() {
    let db_path = setup_test_db("backup_document_shape");
    init_db_with_data(&db_path);

    let backup_file = temp_out("backup_document_shape", "json");
    tl().args(["--db", &db_path, "backup", "--file", &backup_file])
        .assert()
        .success();

    let raw = fs::read_to_string(&backup_file).expect("read backup file");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");

    assert_eq!(value["version"], 1);
    for field in [
        "userInfo",
        "vehicles",
        "settings",
        "trips",
        "odometerReadings",
    ] {
        assert!(value.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(value["trips"].as_array().map(|a| a.len()), Some(2));
    // camelCase field names on the wire
    assert!(value["trips"][0].get("grossEarnings").is_some());
    assert!(value["trips"][0].get("startTime").is_some());
}

#[test]
fn test_restore_missing_trips_field_fails_and_leaves_state_untouched() {
    let db_path = setup_test_db("restore_missing_field");
    init_db_with_data(&db_path);

    let before = load_repos(&db_path);

    // A payload with `trips` removed
    let backup_file = temp_out("restore_missing_field", "json");
    tl().args(["--db", &db_path, "backup", "--file", &backup_file])
        .assert()
        .success();
    let raw = fs::read_to_string(&backup_file).expect("read backup file");
    let mut value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    value.as_object_mut().unwrap().remove("trips");
    fs::write(&backup_file, value.to_string()).expect("write truncated backup");

    tl().args([
        "--db",
        &db_path,
        "restore",
        "--file",
        &backup_file,
        "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid backup format"))
    .stderr(contains("trips"));

    // All five collections untouched
    let after = load_repos(&db_path);
    assert_eq!(before.trips.list(), after.trips.list());
    assert_eq!(before.vehicles.list(), after.vehicles.list());
    assert_eq!(before.odometer.list(), after.odometer.list());
    assert_eq!(before.settings.get(), after.settings.get());
    assert_eq!(before.user_info.get(), after.user_info.get());
}

#[test]
fn test_restore_unparsable_payload_is_malformed() {
    let db_path = setup_test_db("restore_malformed");
    init_db_with_data(&db_path);

    let backup_file = temp_out("restore_malformed", "json");
    fs::write(&backup_file, "{not valid json").expect("write garbage");

    tl().args([
        "--db",
        &db_path,
        "restore",
        "--file",
        &backup_file,
        "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("Malformed backup payload"));

    let repos = load_repos(&db_path);
    assert_eq!(repos.trips.list().len(), 2);
}

#[test]
fn test_restore_accepts_versionless_legacy_file() {
    let db_path = setup_test_db("restore_versionless");
    init_db_with_data(&db_path);

    let backup_file = temp_out("restore_versionless", "json");
    tl().args(["--db", &db_path, "backup", "--file", &backup_file])
        .assert()
        .success();

    let raw = fs::read_to_string(&backup_file).expect("read backup file");
    let mut value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    value.as_object_mut().unwrap().remove("version");
    fs::write(&backup_file, value.to_string()).expect("write legacy backup");

    tl().args([
        "--db",
        &db_path,
        "restore",
        "--file",
        &backup_file,
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("Restore completed"));
}

#[test]
fn test_restore_rejects_future_version() {
    let db_path = setup_test_db("restore_future_version");
    init_db_with_data(&db_path);

    let backup_file = temp_out("restore_future_version", "json");
    tl().args(["--db", &db_path, "backup", "--file", &backup_file])
        .assert()
        .success();

    let raw = fs::read_to_string(&backup_file).expect("read backup file");
    let mut value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    value["version"] = serde_json::json!(99);
    fs::write(&backup_file, value.to_string()).expect("write future backup");

    tl().args([
        "--db",
        &db_path,
        "restore",
        "--file",
        &backup_file,
        "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("unsupported backup version"));
}

#[test]
fn test_backup_default_filename() {
    let db_path = setup_test_db("backup_default_name");
    init_db_with_data(&db_path);

    let workdir = std::env::temp_dir().join("triplogs_backup_default_name");
    fs::create_dir_all(&workdir).expect("create workdir");

    tl().current_dir(&workdir)
        .args(["--db", &db_path, "backup", "--force"])
        .assert()
        .success();

    let found = fs::read_dir(&workdir)
        .expect("read workdir")
        .filter_map(|e| e.ok())
        .any(|e| {
            let name = e.file_name().to_string_lossy().into_owned();
            name.starts_with("trip-logs-backup-") && name.ends_with(".json")
        });
    assert!(found, "expected a trip-logs-backup-<date>.json file");
}

#[test]
fn test_backup_compress_writes_zip() {
    let db_path = setup_test_db("backup_compress");
    init_db_with_data(&db_path);

    let backup_file = temp_out("backup_compress", "json");
    tl().args([
        "--db",
        &db_path,
        "backup",
        "--file",
        &backup_file,
        "--compress",
    ])
    .assert()
    .success()
    .stdout(contains("Compressed"));

    let zip_path = backup_file.replace(".json", ".zip");
    assert!(fs::metadata(&zip_path).is_ok(), "zip file exists");
    assert!(
        fs::metadata(&backup_file).is_err(),
        "uncompressed copy removed"
    );
}
