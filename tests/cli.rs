//! End-to-end tests for the rowscope binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;

fn seed_store(root: &Path) {
    let table_dir = root.join("local").join("local");
    fs::create_dir_all(&table_dir).unwrap();
    let rows = json!([
        {"key": "user#1", "families": {"profile": [
            {"column": "profile:name", "timestamp": 100, "value": b"ada".to_vec()},
            {"column": "profile:email", "timestamp": 100, "value": null},
        ]}},
        {"key": "user#2", "families": {
            "profile": [{"column": "profile:name", "timestamp": 100, "value": b"grace".to_vec()}],
            "orders": [{"column": "orders:count", "timestamp": 100, "value": b"17".to_vec()}],
        }},
        {"key": "audit#1", "families": {"log": [
            {"column": "log:state", "timestamp": 100, "value": [0]},
        ]}},
    ]);
    fs::write(table_dir.join("users.json"), rows.to_string()).unwrap();
}

fn rowscope() -> Command {
    Command::cargo_bin("rowscope").unwrap()
}

#[test]
fn test_renders_prefixed_rows_as_table() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    rowscope()
        .args(["-d", dir.path().to_str().unwrap()])
        .args(["-t", "users", "--prefix", "user#", "--limit", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user#1"))
        .stdout(predicate::str::contains("user#2"))
        .stdout(predicate::str::contains("profile"))
        .stdout(predicate::str::contains("ada"))
        .stdout(predicate::str::contains("<deleted>"));
}

#[test]
fn test_column_names_lose_family_prefix() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    rowscope()
        .args(["-d", dir.path().to_str().unwrap()])
        .args(["-t", "users", "--prefix", "user#", "--limit", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name"))
        .stdout(predicate::str::contains("profile:name").not());
}

#[test]
fn test_limit_defaults_to_one_row() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    // keys come back sorted, so the single row is audit#1
    rowscope()
        .args(["-d", dir.path().to_str().unwrap()])
        .args(["-t", "users"])
        .assert()
        .success()
        .stdout(predicate::str::contains("audit#1"))
        .stdout(predicate::str::contains("user#1").not());
}

#[test]
fn test_pending_sentinel_is_mapped() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    rowscope()
        .args(["-d", dir.path().to_str().unwrap()])
        .args(["-t", "users", "--prefix", "audit#"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<pending>"));
}

#[test]
fn test_max_cell_size_truncates_values() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    rowscope()
        .args(["-d", dir.path().to_str().unwrap()])
        .args(["-t", "users", "--prefix", "user#2", "--max-cell-size", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gra"))
        .stdout(predicate::str::contains("grace").not());
}

#[test]
fn test_missing_table_flag_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    rowscope()
        .args(["-d", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--table"));
}

#[test]
fn test_unknown_table_fails() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    rowscope()
        .args(["-d", dir.path().to_str().unwrap()])
        .args(["-t", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("table not found: missing"));
}

#[test]
fn test_empty_result_fails_with_prefix_in_message() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    rowscope()
        .args(["-d", dir.path().to_str().unwrap()])
        .args(["-t", "users", "--prefix", "ghost#"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no rows returned for prefix: ghost#"));
}
