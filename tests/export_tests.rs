mod common;

use common::{add_user, clock_at, init_db_with_user, kro, setup_test_db, temp_out};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

fn seed_events(db: &str) {
    clock_at(db, 1, "in", "2026-02-10 09:00");
    clock_at(db, 1, "out", "2026-02-10 17:00");
    clock_at(db, 1, "in", "2026-03-05 09:00");
    clock_at(db, 1, "out", "2026-03-05 17:00");
}

#[test]
fn test_export_csv_full_history() {
    let db = setup_test_db("export_csv");
    init_db_with_user(&db);
    seed_events(&db);

    let out = temp_out("export_csv", "csv");
    kro()
        .args(["--db", &db, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,user_id,event_type,recorded_at,source,raw_scan"
    );
    assert_eq!(lines.count(), 4);
    assert!(content.contains("2026-02-10 09:00:00"));
}

#[test]
fn test_export_json_range_filter() {
    let db = setup_test_db("export_range");
    init_db_with_user(&db);
    seed_events(&db);

    let out = temp_out("export_range", "json");
    kro()
        .args([
            "--db", &db, "export", "--format", "json", "--file", &out, "--range", "2026-03",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let events: Value = serde_json::from_str(&content).expect("valid json");
    let events = events.as_array().expect("array");
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e["recorded_at"]
        .as_str()
        .unwrap()
        .starts_with("2026-03-05")));
}

#[test]
fn test_export_user_filter() {
    let db = setup_test_db("export_user");
    init_db_with_user(&db);
    add_user(&db, "EMP002", "Leon", "Kennedy");
    seed_events(&db);
    clock_at(&db, 2, "in", "2026-03-05 10:00");

    let out = temp_out("export_user", "json");
    kro()
        .args([
            "--db", &db, "export", "--format", "json", "--file", &out, "--user", "2",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let events: Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(events.as_array().unwrap().len(), 1);
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db = setup_test_db("export_force");
    init_db_with_user(&db);
    seed_events(&db);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "existing").expect("seed file");

    kro()
        .args(["--db", &db, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("use --force to overwrite"));

    kro()
        .args(["--db", &db, "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();
}

#[test]
fn test_export_rejects_bad_range() {
    let db = setup_test_db("export_badrange");
    init_db_with_user(&db);

    let out = temp_out("export_badrange", "csv");
    kro()
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--range", "spring",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));
}
