mod common;

use common::{add_user, init_db_with_user, kro, setup_test_db};
use predicates::prelude::*;

fn create_shift(db: &str, description: &str) {
    kro()
        .args(["--db", db, "shift", "create", "--description", description])
        .assert()
        .success();
}

#[test]
fn test_shift_create_requires_description() {
    let db = setup_test_db("shift_nodesc");
    init_db_with_user(&db);

    kro()
        .args(["--db", &db, "shift", "create"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("description is required"));
}

#[test]
fn test_shift_defaults_to_available() {
    let db = setup_test_db("shift_available");
    init_db_with_user(&db);
    create_shift(&db, "Night shift front desk");

    kro()
        .args(["--db", &db, "shift", "list", "--available"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("AVAILABLE").and(predicate::str::contains("1 shift(s)")),
        );
}

#[test]
fn test_shift_created_with_assignee_is_assigned() {
    let db = setup_test_db("shift_assigned");
    init_db_with_user(&db);

    kro()
        .args([
            "--db", &db, "shift", "create", "--description", "Morning shift", "--assign", "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shift 1 created (ASSIGNED)"));

    // no longer in the available pool
    kro()
        .args(["--db", &db, "shift", "list", "--available"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 shift(s)"));

    kro()
        .args(["--db", &db, "shift", "list", "--user", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 shift(s)"));
}

#[test]
fn test_shift_set_status_and_delete() {
    let db = setup_test_db("shift_update");
    init_db_with_user(&db);
    create_shift(&db, "Weekend cover");

    kro()
        .args([
            "--db", &db, "shift", "set-status", "--id", "1", "--status", "assigned",
            "--assign", "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shift 1 is now ASSIGNED"));

    kro()
        .args(["--db", &db, "shift", "delete", "--id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shift 1 deleted"));

    kro()
        .args(["--db", &db, "shift", "delete", "--id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Shift not found"));
}

#[test]
fn test_shift_request_requires_core_fields() {
    let db = setup_test_db("sreq_missing");
    init_db_with_user(&db);

    kro()
        .args(["--db", &db, "shift-request", "submit", "--user", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "userId, shiftId and requestType are required",
        ));
}

#[test]
fn test_shift_request_rejects_unknown_shift() {
    let db = setup_test_db("sreq_noshift");
    init_db_with_user(&db);

    kro()
        .args([
            "--db", &db, "shift-request", "submit", "--user", "1", "--shift", "7", "--type",
            "DROP",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Shift not found"));
}

#[test]
fn test_shift_request_lifecycle() {
    let db = setup_test_db("sreq_lifecycle");
    init_db_with_user(&db);
    add_user(&db, "HR001", "Jill", "Valentine");
    create_shift(&db, "Swap candidate");

    // PICKUP is accepted as an alias of PICK_UP
    kro()
        .args([
            "--db", &db, "shift-request", "submit", "--user", "1", "--shift", "1", "--type",
            "pickup", "--origin", "AVAILABLE", "--note", "can cover",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Shift request 1 submitted (PICK_UP for shift 1)",
        ));

    kro()
        .args(["--db", &db, "shift-request", "list", "--user", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("PENDING")
                // per-user listing shows the employee name, like the HR one
                .and(predicate::str::contains("Ada Wong"))
                .and(predicate::str::contains("1 request(s)")),
        );

    kro()
        .args([
            "--db", &db, "shift-request", "set-status", "--id", "1", "--status", "APPROVED",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("approverId is required"));

    kro()
        .args([
            "--db", &db, "shift-request", "set-status", "--id", "1", "--status", "APPROVED",
            "--approver", "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shift request 1 is now APPROVED"));
}

#[test]
fn test_shift_request_rejects_unknown_type() {
    let db = setup_test_db("sreq_badtype");
    init_db_with_user(&db);
    create_shift(&db, "Any shift");

    kro()
        .args([
            "--db", &db, "shift-request", "submit", "--user", "1", "--shift", "1", "--type",
            "swap",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid request type"));
}
