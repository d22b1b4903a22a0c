use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn add_reports_the_assigned_id() {
    let mut cmd = Command::cargo_bin("tudu").unwrap();
    cmd.arg("add")
        .arg("Fix login bug")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Fix login bug' (ID: 1)"));
}

#[test]
fn add_with_fields_emits_json() {
    let mut cmd = Command::cargo_bin("tudu").unwrap();
    cmd.arg("add")
        .arg("Ship release")
        .arg("--priority")
        .arg("High")
        .arg("--category")
        .arg("Work")
        .arg("--tag")
        .arg("urgent")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Ship release\""))
        .stdout(predicate::str::contains("\"High\""))
        .stdout(predicate::str::contains("\"urgent\""));
}

#[test]
fn add_rejects_bad_priority() {
    let mut cmd = Command::cargo_bin("tudu").unwrap();
    cmd.arg("add")
        .arg("Task")
        .arg("--priority")
        .arg("urgent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Priority"));
}

#[test]
fn add_rejects_bad_due_date() {
    let mut cmd = Command::cargo_bin("tudu").unwrap();
    cmd.arg("add")
        .arg("Task")
        .arg("--due")
        .arg("someday")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse"));
}

#[test]
fn list_on_fresh_store_is_empty() {
    let mut cmd = Command::cargo_bin("tudu").unwrap();
    cmd.arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos found."));
}

#[test]
fn list_rejects_unknown_filter_literal() {
    let mut cmd = Command::cargo_bin("tudu").unwrap();
    cmd.arg("list")
        .arg("--status")
        .arg("done")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Status must be one of"));
}

#[test]
fn complete_on_fresh_store_reports_not_found() {
    // One-shot commands get a fresh in-memory store, so any id is missing.
    let mut cmd = Command::cargo_bin("tudu").unwrap();
    cmd.arg("complete")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Todo with ID 1 not found"));
}

#[test]
fn complete_rejects_non_numeric_id() {
    let mut cmd = Command::cargo_bin("tudu").unwrap();
    cmd.arg("complete").arg("abc").assert().failure();
}

#[test]
fn stats_on_fresh_store_shows_zero_percent() {
    let mut cmd = Command::cargo_bin("tudu").unwrap();
    cmd.arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 total"))
        .stdout(predicate::str::contains("0.0%"));
}

#[test]
fn search_rejects_blank_query() {
    let mut cmd = Command::cargo_bin("tudu").unwrap();
    cmd.arg("search")
        .arg("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Search query cannot be empty"));
}
