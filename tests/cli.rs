//! End-to-end tests for the pocketspend binary
//!
//! Each test runs against its own temporary data directory via the
//! POCKETSPEND_DATA_DIR override, so tests never touch real user data.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spend(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocketspend").unwrap();
    cmd.env("POCKETSPEND_DATA_DIR", dir.path());
    cmd
}

#[test]
fn test_add_then_list_shows_entry_and_total() {
    let dir = TempDir::new().unwrap();

    spend(&dir)
        .args(["add", "4.50", "--note", "coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added $4.50"));

    spend(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("$4.50"))
        .stdout(predicate::str::contains("coffee"))
        .stdout(predicate::str::contains("Total: $4.50"));
}

#[test]
fn test_summary_reflects_spending_against_default_budget() {
    let dir = TempDir::new().unwrap();

    spend(&dir).args(["add", "5"]).assert().success();
    spend(&dir).args(["add", "12"]).assert().success();

    spend(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spent:     $17.00"))
        .stdout(predicate::str::contains("Budget:    $50.00"))
        .stdout(predicate::str::contains("Remaining: $33.00"));
}

#[test]
fn test_invalid_amount_is_silent_noop() {
    let dir = TempDir::new().unwrap();

    spend(&dir)
        .args(["add", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing added."));

    // Negative amounts are also dropped without error
    spend(&dir)
        .args(["add", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing added."));

    spend(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn test_delete_by_short_id() {
    let dir = TempDir::new().unwrap();

    spend(&dir).args(["add", "3.25"]).assert().success();

    let output = spend(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .split_whitespace()
        .find(|tok| tok.starts_with("ent-"))
        .expect("list should print the entry id")
        .to_string();

    spend(&dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    spend(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn test_delete_unknown_id_reports_no_match() {
    let dir = TempDir::new().unwrap();

    spend(&dir)
        .args(["delete", "ent-deadbeef"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching entry."));
}

#[test]
fn test_clear_with_yes_empties_day() {
    let dir = TempDir::new().unwrap();

    spend(&dir).args(["add", "9.99"]).assert().success();

    spend(&dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared"));

    spend(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn test_budget_set_and_show() {
    let dir = TempDir::new().unwrap();

    spend(&dir)
        .args(["budget", "set", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily budget set to $30.00"));

    spend(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$30.00"));
}

#[test]
fn test_budget_rejects_non_positive() {
    let dir = TempDir::new().unwrap();

    spend(&dir)
        .args(["budget", "set", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget unchanged."));

    spend(&dir)
        .args(["budget", "set", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget unchanged."));

    // The default survives
    spend(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$50.00"));
}

#[test]
fn test_quick_amount_lifecycle() {
    let dir = TempDir::new().unwrap();

    spend(&dir)
        .args(["quick", "add", "2.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added quick amount $2.50"));

    spend(&dir)
        .args(["quick", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$2.50"));

    spend(&dir)
        .args(["quick", "remove", "2.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed quick amount $2.50"));

    // Removing again is an idempotent no-op
    spend(&dir)
        .args(["quick", "remove", "2.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing removed."));
}

#[test]
fn test_currency_switch_changes_formatting() {
    let dir = TempDir::new().unwrap();

    spend(&dir)
        .args(["currency", "set", "eur"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency set to EUR"));

    spend(&dir).args(["add", "7"]).assert().success();

    spend(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("€7.00"));
}

#[test]
fn test_currency_unknown_code_fails() {
    let dir = TempDir::new().unwrap();

    spend(&dir)
        .args(["currency", "set", "XXX"])
        .assert()
        .failure();
}

#[test]
fn test_week_report_marks_today() {
    let dir = TempDir::new().unwrap();

    spend(&dir).args(["add", "6"]).assert().success();

    spend(&dir)
        .arg("week")
        .assert()
        .success()
        .stdout(predicate::str::contains("Last 7 days"))
        .stdout(predicate::str::contains("<- today"))
        .stdout(predicate::str::contains("$6.00"));
}

#[test]
fn test_month_report() {
    let dir = TempDir::new().unwrap();

    spend(&dir).args(["add", "8.40"]).assert().success();

    spend(&dir)
        .arg("month")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spent in"))
        .stdout(predicate::str::contains("$8.40"));
}

#[test]
fn test_export_json_writes_file() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    spend(&dir)
        .args(["add", "4.50", "--note", "lunch"])
        .assert()
        .success();

    spend(&dir)
        .args(["export", "json", "--out"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let file = std::fs::read_dir(out.path())
        .unwrap()
        .next()
        .unwrap()
        .unwrap();
    let name = file.file_name().into_string().unwrap();
    assert!(name.starts_with("expenses-") && name.ends_with(".json"));

    let contents = std::fs::read_to_string(file.path()).unwrap();
    assert!(contents.contains("4.5"));
    assert!(contents.contains("lunch"));
}

#[test]
fn test_export_csv_writes_header_and_rows() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    spend(&dir)
        .args(["add", "12.00", "--note", "dinner, drinks"])
        .assert()
        .success();

    spend(&dir)
        .args(["export", "csv", "--out"])
        .arg(out.path())
        .assert()
        .success();

    let file = std::fs::read_dir(out.path())
        .unwrap()
        .next()
        .unwrap()
        .unwrap();
    let contents = std::fs::read_to_string(file.path()).unwrap();

    assert!(contents.starts_with("Date,Amount,Category,Note"));
    assert!(contents.contains("12.00"));
    // Commas inside notes are sanitized so the row stays 4 fields
    assert!(contents.contains("dinner; drinks"));
}

#[test]
fn test_add_to_explicit_day() {
    let dir = TempDir::new().unwrap();

    spend(&dir)
        .args(["add", "5", "--day", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-15"));

    spend(&dir)
        .args(["list", "--day", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$5.00"));

    // Today is unaffected
    spend(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn test_category_assignment_and_fallback() {
    let dir = TempDir::new().unwrap();

    spend(&dir)
        .args(["add", "3", "--category", "Coffee"])
        .assert()
        .success();

    spend(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"));

    // Unknown categories fall back to Other rather than failing
    spend(&dir)
        .args(["add", "2", "--category", "NoSuchCategory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("using Other"));
}

#[test]
fn test_data_survives_across_invocations() {
    let dir = TempDir::new().unwrap();

    spend(&dir).args(["add", "1.25"]).assert().success();
    spend(&dir).args(["add", "2.75"]).assert().success();

    spend(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spent:     $4.00"));
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    spend(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_str().unwrap()));
}
