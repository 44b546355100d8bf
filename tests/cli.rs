//! End-to-end tests for the tomo binary.
//!
//! The interactive timer needs a terminal, so these cover the config
//! surface and argument handling. Each test points HOME at a fresh
//! temp directory so no real config file is touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tomo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tomo").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn help_describes_the_timer() {
    let home = TempDir::new().unwrap();

    tomo(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomodoro session timer"));
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();

    tomo(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25 minutes"))
        .stdout(predicate::str::contains("15 minutes"))
        .stdout(predicate::str::contains("not set"));
}

#[test]
fn config_show_json_is_machine_readable() {
    let home = TempDir::new().unwrap();

    tomo(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work_minutes\": 25"))
        .stdout(predicate::str::contains("\"enabled\": true"));
}

#[test]
fn config_set_persists_across_invocations() {
    let home = TempDir::new().unwrap();

    tomo(&home)
        .args([
            "config",
            "set",
            "--work",
            "30",
            "--endpoint",
            "http://localhost:5000/log",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved"));

    tomo(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work_minutes\": 30"))
        .stdout(predicate::str::contains("http://localhost:5000/log"));
}

#[test]
fn config_set_keeps_unrelated_values() {
    let home = TempDir::new().unwrap();

    tomo(&home)
        .args(["config", "set", "--short-break", "10"])
        .assert()
        .success();

    tomo(&home)
        .args(["config", "set", "--notifications", "false"])
        .assert()
        .success();

    tomo(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"short_break_minutes\": 10"))
        .stdout(predicate::str::contains("\"enabled\": false"));
}

#[test]
fn config_set_rejects_zero_duration() {
    let home = TempDir::new().unwrap();

    tomo(&home)
        .args(["config", "set", "--work", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn run_rejects_zero_duration() {
    let home = TempDir::new().unwrap();

    tomo(&home)
        .args(["run", "--long-break", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
