//! End-to-end tests for the `ss` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use secretsanta::{ColumnConfig, Table, validate_history, validate_participants};
use tempfile::TempDir;

const EMPLOYEES: &str = "Employee_Name,Employee_EmailID
John Doe,john@acme.com
Jane Smith,jane@acme.com
Bob Wilson,bob@acme.com
Alice Brown,alice@acme.com
";

const PREVIOUS: &str = "Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID
John Doe,john@acme.com,Jane Smith,jane@acme.com
Jane Smith,jane@acme.com,Bob Wilson,bob@acme.com
Bob Wilson,bob@acme.com,Alice Brown,alice@acme.com
Alice Brown,alice@acme.com,John Doe,john@acme.com
";

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn ss() -> Command {
    let mut cmd = Command::cargo_bin("ss").expect("Failed to find ss binary");
    // Keep a developer's config file out of the way
    cmd.env("XDG_CONFIG_HOME", "/nonexistent").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_generates_assignments_with_history() {
    let temp = TempDir::new().unwrap();
    let input = write(temp.path(), "employees.csv", EMPLOYEES);
    let previous = write(temp.path(), "previous.csv", PREVIOUS);
    let output = temp.path().join("out.csv");

    ss().current_dir(temp.path())
        .arg("--input")
        .arg(&input)
        .arg("--previous")
        .arg(&previous)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully generated 4 Secret Santa assignments"));

    let columns = ColumnConfig::default();
    let result = validate_history(&Table::read(&output).unwrap(), &columns).unwrap();
    let before = validate_history(&Table::read(&previous).unwrap(), &columns).unwrap();

    assert_eq!(result.len(), 4);
    for record in result.records() {
        assert_ne!(record.giver_id, record.receiver_id);
        assert_ne!(Some(record.receiver_id.as_str()), before.previous_receiver(&record.giver_id));
    }
}

#[test]
fn test_same_seed_same_output() {
    let temp = TempDir::new().unwrap();
    let input = write(temp.path(), "employees.csv", EMPLOYEES);
    let first = temp.path().join("first.csv");
    let second = temp.path().join("second.csv");

    for output in [&first, &second] {
        ss().current_dir(temp.path())
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(output)
            .args(["--seed", "2024"])
            .assert()
            .success();
    }

    assert_eq!(fs::read_to_string(&first).unwrap(), fs::read_to_string(&second).unwrap());
}

#[test]
fn test_show_prints_every_giver() {
    let temp = TempDir::new().unwrap();
    let input = write(temp.path(), "employees.csv", EMPLOYEES);
    let output = temp.path().join("out.csv");

    ss().current_dir(temp.path())
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--show")
        .assert()
        .success()
        .stdout(predicate::str::contains("<john@acme.com>"))
        .stdout(predicate::str::contains("<alice@acme.com>"));
}

#[test]
fn test_duplicate_ids_exit_one() {
    let temp = TempDir::new().unwrap();
    let input = write(
        temp.path(),
        "employees.csv",
        "Employee_Name,Employee_EmailID\nJohn Doe,john@acme.com\nJohn Smith,john@acme.com\n",
    );
    let output = temp.path().join("out.csv");

    ss().current_dir(temp.path())
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Duplicate email ID"));

    assert!(!output.exists());
}

#[test]
fn test_missing_column_exit_one() {
    let temp = TempDir::new().unwrap();
    let input = write(temp.path(), "employees.csv", "Employee_Name\nJohn Doe\n");

    ss().current_dir(temp.path())
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(temp.path().join("out.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Employee_EmailID"));
}

#[test]
fn test_single_person_exit_one() {
    let temp = TempDir::new().unwrap();
    let input = write(temp.path(), "employees.csv", "Employee_Name,Employee_EmailID\nJohn Doe,john@acme.com\n");

    ss().current_dir(temp.path())
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(temp.path().join("out.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("after maximum attempts"));
}

#[test]
fn test_missing_input_exit_one() {
    let temp = TempDir::new().unwrap();

    ss().current_dir(temp.path())
        .arg("-i")
        .arg(temp.path().join("nope.csv"))
        .arg("-o")
        .arg(temp.path().join("out.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.csv"));
}

#[test]
fn test_bad_config_exit_two() {
    let temp = TempDir::new().unwrap();
    let input = write(temp.path(), "employees.csv", EMPLOYEES);
    let config = write(temp.path(), "bad.yml", "max_attempts: [not, a, number]\n");

    ss().current_dir(temp.path())
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(temp.path().join("out.csv"))
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unexpected error:"));
}

#[test]
fn test_roster_file_still_valid_after_run() {
    let temp = TempDir::new().unwrap();
    let input = write(temp.path(), "employees.csv", EMPLOYEES);

    ss().current_dir(temp.path())
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(temp.path().join("out.csv"))
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&input).unwrap(), EMPLOYEES);
    let participants = validate_participants(&Table::read(&input).unwrap(), &ColumnConfig::default()).unwrap();
    assert_eq!(participants.len(), 4);
}
