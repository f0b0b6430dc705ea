//! End-to-end tests for the `ibond-tracker` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RATES: &str = "effective_date,variable_rate\n\
                     2023-11-01,0.0430\n\
                     2024-05-01,0.0490\n\
                     2024-11-01,0.0390\n";

fn tracker() -> Command {
    let mut cmd = Command::cargo_bin("ibond-tracker").unwrap();
    cmd.env_remove("IBOND_TRACKER_OUTPUT")
        .env_remove("IBOND_TRACKER_CONFIG")
        .env("RUST_LOG", "warn");
    cmd
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn is_xlsx(path: &Path) -> bool {
    fs::read(path).map(|b| b.starts_with(b"PK")).unwrap_or(false)
}

#[test]
fn generate_writes_workbook() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("tracker.xlsx");

    tracker()
        .args(["generate", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("tracker.xlsx"));

    assert!(is_xlsx(&out));
}

#[test]
fn generate_uses_output_env() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("from-env.xlsx");

    tracker()
        .env("IBOND_TRACKER_OUTPUT", &out)
        .args(["--quiet", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(is_xlsx(&out));
}

#[test]
fn generate_from_config_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("configured.xlsx");
    let config = write(
        dir.path(),
        "tracker.toml",
        &format!(
            "output_path = {:?}\n\
             inventory_rows = 10\n\
             \n\
             [[rates]]\n\
             effective_date = \"2023-11-01\"\n\
             variable_rate = 0.043\n\
             \n\
             [[bonds]]\n\
             bond_id = \"B-1\"\n\
             issue_date = \"2024-01-15\"\n\
             purchase_amount = 1000.0\n\
             fixed_rate = 0.009\n\
             months_to_project = 24\n",
            out.display().to_string()
        ),
    );

    tracker()
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Bonds\": \"1\""))
        .stdout(predicate::str::contains("\"Rates\": \"1\""));

    assert!(is_xlsx(&out));
}

#[test]
fn generate_rejects_inventory_overflow() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "tracker.toml", "inventory_rows = 1\n");
    let bonds = write(
        dir.path(),
        "bonds.csv",
        "bond_id,owner,issue_date,purchase_amount,fixed_rate,months_to_project\n\
         A,,2024-01-15,100,0,12\n\
         B,,2024-02-15,100,0,12\n",
    );

    tracker()
        .arg("--config")
        .arg(&config)
        .args(["generate", "-o"])
        .arg(dir.path().join("never.xlsx"))
        .arg("--bonds-csv")
        .arg(&bonds)
        .assert()
        .failure()
        .stderr(predicate::str::contains("holds 1 rows but 2 were supplied"));
}

#[test]
fn value_at_twelve_months() {
    let dir = TempDir::new().unwrap();
    let rates = write(dir.path(), "rates.csv", RATES);

    tracker()
        .args([
            "--format", "minimal", "value", "--issue", "2024-01-15", "--amount", "1000",
            "--fixed", "0.009", "--months", "12", "--rates-csv",
        ])
        .arg(&rates)
        .assert()
        .success()
        .stdout("1056.18\n");
}

#[test]
fn value_without_covering_rate_fails() {
    let dir = TempDir::new().unwrap();
    let rates = write(
        dir.path(),
        "rates.csv",
        "effective_date,variable_rate\n2024-05-01,0.0490\n2024-11-01,0.0390\n",
    );

    tracker()
        .args([
            "value", "--issue", "2024-01-15", "--amount", "1000", "--fixed", "0.009",
            "--months", "12", "--rates-csv",
        ])
        .arg(&rates)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No variable rate effective on or before 2024-01-15"));
}

#[test]
fn value_rejects_bad_date() {
    tracker()
        .args(["value", "--issue", "01/15/2024", "--amount", "1000", "--fixed", "0", "--months", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn schedule_as_csv() {
    let dir = TempDir::new().unwrap();
    let rates = write(dir.path(), "rates.csv", RATES);

    let output = tracker()
        .args([
            "--format", "csv", "schedule", "--issue", "2024-01-15", "--amount", "1000",
            "--fixed", "0.009", "--months", "12", "--rates-csv",
        ])
        .arg(&rates)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 14, "header plus 13 months:\n{text}");
    assert!(lines[0].starts_with("month,month_index"));
    assert!(lines[1].starts_with("2024-01-15,0,4.30%"));
    assert!(lines[13].starts_with("2025-01-15,12,3.90%"));
    assert!(lines[13].ends_with("1056.18"));
}

#[test]
fn schedule_without_amount_is_a_usage_error() {
    tracker()
        .args(["schedule", "--issue", "2024-01-15", "--fixed", "0.009"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--amount <AMOUNT>"));
}

#[test]
fn schedule_rejects_terms_alongside_bond() {
    tracker()
        .args(["schedule", "--bond", "EX-0001", "--issue", "2024-01-15"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn schedule_for_unknown_bond_is_empty() {
    let dir = TempDir::new().unwrap();
    let rates = write(dir.path(), "rates.csv", RATES);
    let bonds = write(
        dir.path(),
        "bonds.csv",
        "bond_id,owner,issue_date,purchase_amount,fixed_rate,months_to_project\n\
         EX-0001,Sample Owner,2024-01-15,1000,0.009,120\n",
    );

    tracker()
        .args(["--format", "json", "schedule", "--bond", "EX-0002", "--rates-csv"])
        .arg(&rates)
        .arg("--bonds-csv")
        .arg(&bonds)
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn rates_reports_irregular_spacing() {
    let dir = TempDir::new().unwrap();
    let rates = write(
        dir.path(),
        "rates.csv",
        "EffDate,VariableRate\n2024-05-01,0.0490\n2025-05-01,0.0360\n",
    );

    tracker()
        .args(["rates", "--rates-csv"])
        .arg(&rates)
        .assert()
        .success()
        .stdout(predicate::str::contains("4.90%"))
        .stderr(predicate::str::contains("12 months apart"));
}
