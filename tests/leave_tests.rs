mod common;

use common::{add_user, init_db_with_user, kro, setup_test_db};
use predicates::prelude::*;

fn submit_leave(db: &str, user: &str, from: &str, to: &str) {
    kro()
        .args([
            "--db", db, "leave", "submit", "--user", user, "--from", from, "--to", to,
            "--reason", "vacation",
        ])
        .assert()
        .success();
}

#[test]
fn test_leave_submit_requires_all_fields() {
    let db = setup_test_db("leave_missing");
    init_db_with_user(&db);

    kro()
        .args(["--db", &db, "leave", "submit", "--user", "1", "--from", "2026-04-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "userId, fromDate, toDate and reason are required",
        ));
}

#[test]
fn test_leave_submit_rejects_inverted_range() {
    let db = setup_test_db("leave_inverted");
    init_db_with_user(&db);

    kro()
        .args([
            "--db", &db, "leave", "submit", "--user", "1", "--from", "2026-04-10", "--to",
            "2026-04-01", "--reason", "oops",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("toDate must not be before fromDate"));
}

#[test]
fn test_leave_starts_pending_and_lists_for_user() {
    let db = setup_test_db("leave_pending");
    init_db_with_user(&db);

    submit_leave(&db, "1", "2026-04-01", "2026-04-05");

    kro()
        .args(["--db", &db, "leave", "list", "--user", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("PENDING")
                // per-user listing shows the employee name, like the HR one
                .and(predicate::str::contains("Ada Wong"))
                .and(predicate::str::contains("1 request(s)")),
        );
}

#[test]
fn test_leave_approve_requires_approver() {
    let db = setup_test_db("leave_noapprover");
    init_db_with_user(&db);
    submit_leave(&db, "1", "2026-04-01", "2026-04-05");

    kro()
        .args(["--db", &db, "leave", "set-status", "--id", "1", "--status", "APPROVED"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("approverId is required"));
}

#[test]
fn test_leave_approval_lifecycle() {
    let db = setup_test_db("leave_lifecycle");
    init_db_with_user(&db);
    add_user(&db, "HR001", "Jill", "Valentine");
    submit_leave(&db, "1", "2026-04-01", "2026-04-05");

    kro()
        .args([
            "--db", &db, "leave", "set-status", "--id", "1", "--status", "approved",
            "--approver", "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leave request 1 is now APPROVED"));

    // reset to PENDING clears the approver
    kro()
        .args(["--db", &db, "leave", "set-status", "--id", "1", "--status", "PENDING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leave request 1 is now PENDING"));
}

#[test]
fn test_leave_set_status_unknown_id_is_not_found() {
    let db = setup_test_db("leave_404");
    init_db_with_user(&db);

    kro()
        .args([
            "--db", &db, "leave", "set-status", "--id", "99", "--status", "REJECTED",
            "--approver", "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Leave request not found"));
}

#[test]
fn test_leave_list_filters_by_status() {
    let db = setup_test_db("leave_filter");
    init_db_with_user(&db);
    add_user(&db, "HR001", "Jill", "Valentine");
    submit_leave(&db, "1", "2026-04-01", "2026-04-05");
    submit_leave(&db, "1", "2026-05-01", "2026-05-02");

    kro()
        .args([
            "--db", &db, "leave", "set-status", "--id", "1", "--status", "APPROVED",
            "--approver", "2",
        ])
        .assert()
        .success();

    kro()
        .args(["--db", &db, "leave", "list", "--status", "APPROVED"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 request(s)"));

    kro()
        .args(["--db", &db, "leave", "list", "--status", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status value"));
}
