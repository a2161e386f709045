use predicates::str::contains;

mod common;
use common::{add_vehicle, load_repos, setup_test_db, tl};

#[test]
fn test_vehicle_add_and_list() {
    let db_path = setup_test_db("vehicle_add_list");

    tl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tl().args([
        "--db", &db_path, "vehicle", "--add", "--make", "Toyota", "--model", "Prius", "--year",
        "2021", "--plate", "TX-1234",
    ])
    .assert()
    .success()
    .stdout(contains("Vehicle added"));

    tl().args(["--db", &db_path, "vehicle", "--list"])
        .assert()
        .success()
        .stdout(contains("2021 Toyota Prius"))
        .stdout(contains("TX-1234"));
}

#[test]
fn test_vehicle_add_requires_make_and_model() {
    let db_path = setup_test_db("vehicle_requires_make");

    tl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tl().args(["--db", &db_path, "vehicle", "--add", "--model", "Prius"])
        .assert()
        .failure()
        .stderr(contains("--make is required"));
}

#[test]
fn test_vehicle_delete_cascades_exactly_to_its_trips() {
    let db_path = setup_test_db("vehicle_cascade");

    tl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let doomed = add_vehicle(&db_path, "Honda", "Civic", None);
    let kept = add_vehicle(&db_path, "Ford", "Transit", None);

    // one trip per vehicle plus one with no vehicle at all
    tl().args([
        "--db", &db_path, "add", "2025-05-01", "--in", "08:00", "--out", "10:00", "--miles",
        "10.0", "--gross", "20.0", "--vehicle", &doomed,
    ])
    .assert()
    .success();

    tl().args([
        "--db", &db_path, "add", "2025-05-02", "--in", "08:00", "--out", "10:00", "--miles",
        "15.0", "--gross", "30.0", "--vehicle", &kept,
    ])
    .assert()
    .success();

    tl().args([
        "--db", &db_path, "add", "2025-05-03", "--in", "08:00", "--out", "10:00", "--miles",
        "20.0", "--gross", "40.0",
    ])
    .assert()
    .success();

    tl().args(["--db", &db_path, "vehicle", "--del", &doomed, "--force"])
        .assert()
        .success()
        .stdout(contains("Vehicle deleted"));

    let repos = load_repos(&db_path);

    assert!(repos.vehicles.get(&doomed).is_none());
    assert!(repos.vehicles.get(&kept).is_some());

    let remaining = repos.trips.list();
    assert_eq!(remaining.len(), 2);
    assert!(
        remaining
            .iter()
            .all(|t| t.vehicle_id.as_deref() != Some(doomed.as_str()))
    );
    // the vehicle-less trip and the other vehicle's trip survive
    assert!(remaining.iter().any(|t| t.vehicle_id.is_none()));
    assert!(
        remaining
            .iter()
            .any(|t| t.vehicle_id.as_deref() == Some(kept.as_str()))
    );
}

#[test]
fn test_vehicle_delete_unknown_id_fails() {
    let db_path = setup_test_db("vehicle_del_unknown");

    tl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tl().args(["--db", &db_path, "vehicle", "--del", "nope", "--force"])
        .assert()
        .failure()
        .stderr(contains("No vehicle found"));
}
