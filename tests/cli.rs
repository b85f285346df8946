//! End-to-end CLI tests
//!
//! Each test gets its own data directory via the environment override, so
//! tests never touch real user data and can run in parallel.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn campus(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("campus").unwrap();
    cmd.env("CAMPUS_PLANNER_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn sign_up_set_allowance_and_track_an_expense() {
    let dir = TempDir::new().unwrap();

    campus(&dir)
        .args(["account", "sign-up", "amina"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, amina"));

    campus(&dir)
        .args(["allowance", "set", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CFA5000.00"));

    campus(&dir)
        .args(["expense", "add", "Lunch", "700", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining balance: CFA4300.00"));

    campus(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("CFA700.00"));
}

#[test]
fn invalid_amount_and_category_are_rejected() {
    let dir = TempDir::new().unwrap();

    campus(&dir)
        .args(["account", "sign-up", "kofi"])
        .assert()
        .success();

    campus(&dir)
        .args(["expense", "add", "Lunch", "-5", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    campus(&dir)
        .args(["expense", "add", "Lunch", "5", "snacks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category"));

    campus(&dir)
        .args(["expense", "add", "Lunch", "abc", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn commands_require_a_session() {
    let dir = TempDir::new().unwrap();

    campus(&dir)
        .args(["allowance", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn study_planner_round_trip() {
    let dir = TempDir::new().unwrap();

    campus(&dir)
        .args(["account", "sign-up", "ada"])
        .assert()
        .success();

    campus(&dir)
        .args(["task", "add", "Revise algebra", "2030-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Revise algebra"));

    campus(&dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pending"));

    campus(&dir)
        .args(["reminder", "add", "Statistics", "Thursday", "7PM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thursday"));

    campus(&dir)
        .args(["report", "study"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 pending"))
        .stdout(predicate::str::contains("Statistics"));
}

#[test]
fn sign_out_then_commands_fail() {
    let dir = TempDir::new().unwrap();

    campus(&dir)
        .args(["account", "sign-up", "yao"])
        .assert()
        .success();

    campus(&dir)
        .args(["account", "sign-out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));

    campus(&dir)
        .args(["expense", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}
