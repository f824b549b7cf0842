//! Integration tests for the `loopscope` binary
//!
//! Only the headless subcommands are exercised; every run gets its own data
//! directory so no config or log file leaks into the user's home.

use assert_cmd::Command;
use predicates::prelude::*;

use super::common::fixtures::{Fixtures, TIMER_SCRIPT};

fn loopscope(fixtures: &Fixtures) -> Command {
    let mut cmd = Command::cargo_bin("loopscope").expect("binary builds");
    cmd.arg("--data-dir").arg(fixtures.path());
    cmd
}

#[test]
fn test_list_shows_builtins() {
    let fixtures = Fixtures::new();
    loopscope(&fixtures)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("canonical"))
        .stdout(predicate::str::contains("12 steps"))
        .stdout(predicate::str::contains("promise-chain"))
        .stdout(predicate::str::contains("nested-timers"));
}

#[test]
fn test_run_prints_final_output_in_order() {
    let fixtures = Fixtures::new();
    loopscope(&fixtures)
        .args(["run", "--script", "canonical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[12/12]"))
        .stdout(predicate::str::contains("canonical: step 12/12 (done)"))
        .stdout(predicate::str::contains("call stack: (empty)"))
        .stdout(predicate::str::contains(
            "output:\n  Start\n  End\n  Promise\n  Timeout\n",
        ));
}

#[test]
fn test_run_json_report() {
    let fixtures = Fixtures::new();
    let output = loopscope(&fixtures)
        .args(["run", "--format", "json"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(report["script"], "canonical");
    assert_eq!(report["phase"], "done");
    assert_eq!(report["total_steps"], 12);
    assert_eq!(
        report["state"]["output"],
        serde_json::json!(["Start", "End", "Promise", "Timeout"])
    );
    assert_eq!(report["state"]["call_stack"], serde_json::json!([]));
}

#[test]
fn test_run_stops_after_requested_steps() {
    let fixtures = Fixtures::new();
    let output = loopscope(&fixtures)
        .args(["run", "--format", "json", "--steps", "1"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(report["phase"], "running");
    assert_eq!(report["state"]["cursor"], 1);
    assert_eq!(report["state"]["call_stack"], serde_json::json!(["console.log"]));
    assert_eq!(report["state"]["output"], serde_json::json!(["Start"]));
}

#[test]
fn test_run_verbose_lists_ops() {
    let fixtures = Fixtures::new();
    loopscope(&fixtures)
        .args(["run", "--steps", "1", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("· push console.log"))
        .stdout(predicate::str::contains("· log \"Start\""));
}

#[test]
fn test_run_script_file() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("timer.toml", TIMER_SCRIPT);
    loopscope(&fixtures)
        .args(["run", "--script"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("tiny-timer: step 2/2 (done)"));
}

#[test]
fn test_unknown_script_fails() {
    let fixtures = Fixtures::new();
    loopscope(&fixtures)
        .args(["run", "--script", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_first_run_writes_example_config() {
    let fixtures = Fixtures::new();
    loopscope(&fixtures).arg("list").assert().success();

    let config = std::fs::read_to_string(fixtures.path().join("config.toml"))
        .expect("config written on first run");
    assert!(config.contains("[playback]"));
    assert!(fixtures.path().join("logs").join("loopscope.log").exists());
}

#[test]
fn test_explicit_broken_config_fails() {
    let fixtures = Fixtures::new();
    let config = fixtures.write("broken.toml", "[playback\n");
    loopscope(&fixtures)
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}
