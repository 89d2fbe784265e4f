mod common;

use common::{add_user, init_db, init_db_with_user, kro, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_init_creates_schema() {
    let db = setup_test_db("init_schema");
    init_db(&db);

    let conn = rusqlite::Connection::open(&db).expect("open db");
    for table in [
        "users",
        "attendance_logs",
        "leave_requests",
        "shifts",
        "shift_requests",
        "log",
    ] {
        let found: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .expect("query sqlite_master");
        assert_eq!(found, 1, "missing table {}", table);
    }
}

#[test]
fn test_init_is_idempotent() {
    let db = setup_test_db("init_twice");
    init_db(&db);
    init_db(&db);
}

#[test]
fn test_db_migrate_and_check() {
    let db = setup_test_db("db_migrate");
    init_db(&db);

    kro()
        .args(["--db", &db, "db", "--migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrations are up to date."));

    kro()
        .args(["--db", &db, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database integrity: ok"));
}

#[test]
fn test_db_info_lists_row_counts() {
    let db = setup_test_db("db_info");
    init_db_with_user(&db);

    kro()
        .args(["--db", &db, "db", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("users").and(predicate::str::contains("attendance_logs")));
}

#[test]
fn test_user_add_and_list() {
    let db = setup_test_db("user_list");
    init_db(&db);
    add_user(&db, "EMP001", "Ada", "Wong");
    add_user(&db, "EMP002", "Leon", "Kennedy");

    kro()
        .args(["--db", &db, "user", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ada Wong")
                .and(predicate::str::contains("Leon Kennedy"))
                .and(predicate::str::contains("2 employee(s)")),
        );
}

#[test]
fn test_user_list_excludes_hr_accounts() {
    let db = setup_test_db("user_hr");
    init_db(&db);
    add_user(&db, "EMP001", "Ada", "Wong");

    kro()
        .args([
            "--db", &db, "user", "add", "--staff-id", "HR001", "--first", "Jill", "--last",
            "Valentine", "--password", "secret", "--role", "2",
        ])
        .assert()
        .success();

    kro()
        .args(["--db", &db, "user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 employee(s)"));
}

#[test]
fn test_duplicate_staff_id_rejected() {
    let db = setup_test_db("user_dup");
    init_db(&db);
    add_user(&db, "EMP001", "Ada", "Wong");

    kro()
        .args([
            "--db", &db, "user", "add", "--staff-id", "EMP001", "--first", "Other", "--last",
            "Person", "--password", "secret",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Database error"));
}

#[test]
fn test_internal_log_records_operations() {
    let db = setup_test_db("log_print");
    init_db_with_user(&db);

    kro()
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Internal log").and(predicate::str::contains("[user]")));
}

#[test]
fn test_init_relative_db_resolves_into_config_dir() {
    // A relative --db must end up inside the config directory, and init
    // must migrate that same file, not a cwd-relative one.
    let name = "kronos_init_relative_test.sqlite";
    let resolved = kronos::config::Config::resolve_db_path(name);
    let _ = std::fs::remove_file(&resolved);

    kro()
        .args(["--db", name, "--test", "init"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&resolved).expect("open resolved db");
    let found: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='users'",
            [],
            |row| row.get(0),
        )
        .expect("query sqlite_master");
    assert_eq!(found, 1, "schema missing at {}", resolved.display());

    drop(conn);
    let _ = std::fs::remove_file(&resolved);
}
