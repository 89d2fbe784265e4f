#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn kro() -> Command {
    cargo_bin_cmd!("kronos")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kronos.sqlite", name));
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

/// Initialize the schema without touching the user's config file.
pub fn init_db(db_path: &str) {
    kro()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Create an employee and return nothing; ids are assigned 1, 2, ... in
/// creation order on a fresh DB.
pub fn add_user(db_path: &str, staff_id: &str, first: &str, last: &str) {
    kro()
        .args([
            "--db", db_path, "user", "add", "--staff-id", staff_id, "--first", first, "--last",
            last, "--password", "secret",
        ])
        .assert()
        .success();
}

/// Record a backfilled clock event.
pub fn clock_at(db_path: &str, user: i64, action: &str, at: &str) {
    kro()
        .args([
            "--db",
            db_path,
            "clock",
            "--user",
            &user.to_string(),
            "--action",
            action,
            "--at",
            at,
        ])
        .assert()
        .success();
}

/// Initialize DB with one employee (id 1) ready to clock.
pub fn init_db_with_user(db_path: &str) {
    init_db(db_path);
    add_user(db_path, "EMP001", "Ada", "Wong");
}
