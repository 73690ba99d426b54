// CLI regression tests: exit codes, written files and miette diagnostics.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

mod common;

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

use common::{fixture_path, scratch_dir};

fn testgen() -> Command {
    Command::cargo_bin("whenwords-testgen").unwrap()
}

#[test]
fn generate_writes_program_and_reports_counts() {
    let dir = scratch_dir("generate");
    let output = dir.join("tests.c");

    testgen()
        .arg("generate")
        .arg("--spec")
        .arg(fixture_path("whenwords.yaml"))
        .arg("--output")
        .arg(&output)
        .arg("--no-color")
        .assert()
        .success()
        .stderr(contains("Generated").and(contains("duration: 5")));

    let program = fs::read_to_string(&output).unwrap();
    assert!(program.starts_with("#include <math.h>\n"));
    assert!(program.contains("{\"compact max_units 1\", 9000, 1, 1, 2, \"2h 30m\", 0},"));
    assert!(!dir.join("tests.c.tmp").exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn stdout_mode_prints_program() {
    testgen()
        .arg("generate")
        .arg("--spec")
        .arg(fixture_path("whenwords.yaml"))
        .arg("--stdout")
        .assert()
        .success()
        .stdout(contains("int main(void) {").and(contains("#include \"whenwords.h\"")));
}

#[test]
fn check_passes_after_generate_and_fails_when_stale() {
    let dir = scratch_dir("check");
    let output = dir.join("tests.c");
    let spec = fixture_path("whenwords.yaml");

    testgen()
        .arg("generate")
        .arg("--spec")
        .arg(&spec)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    testgen()
        .args(["generate", "--check", "--no-color", "--spec"])
        .arg(&spec)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(contains("Up to date"));

    let edited = fs::read_to_string(&output)
        .unwrap()
        .replace("\"2 hours ago\"", "\"3 hours ago\"");
    fs::write(&output, &edited).unwrap();

    testgen()
        .args(["generate", "--check", "--no-color", "--spec"])
        .arg(&spec)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(contains("Stale").and(contains("+    {\"2 hours ago - 90 minutes\"")));

    // --check never writes.
    assert_eq!(fs::read_to_string(&output).unwrap(), edited);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_spec_fails_without_writing() {
    let dir = scratch_dir("malformed");
    let spec = dir.join("tests.yaml");
    let output = dir.join("tests.c");
    fs::write(&spec, "duration:\n  name: not a list\n").unwrap();

    testgen()
        .arg("generate")
        .arg("--spec")
        .arg(&spec)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(contains("testgen::shape").and(contains("duration")));

    assert!(!output.exists());
    assert!(!dir.join("tests.c.tmp").exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn yaml_syntax_error_is_a_diagnostic() {
    let dir = scratch_dir("syntax");
    let spec = dir.join("tests.yaml");
    fs::write(&spec, "timeago: [\n").unwrap();

    testgen()
        .arg("inspect")
        .arg("--spec")
        .arg(&spec)
        .assert()
        .failure()
        .stderr(contains("testgen::yaml"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_spec_is_an_io_error() {
    let dir = scratch_dir("missing");
    testgen()
        .arg("inspect")
        .arg("--spec")
        .arg(dir.join("nope.yaml"))
        .assert()
        .failure()
        .stderr(contains("testgen::io"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn inspect_lists_counts() {
    testgen()
        .arg("inspect")
        .arg("--spec")
        .arg(fixture_path("whenwords.yaml"))
        .assert()
        .success()
        .stdout(
            contains("parse_duration  4")
                .and(contains("date_range      2"))
                .and(contains("total           16")),
        );
}

#[test]
fn inspect_json_dumps_normalized_suite() {
    let output = testgen()
        .args(["inspect", "--json", "--spec"])
        .arg(fixture_path("whenwords.yaml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let suite: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(suite["timeago"].as_array().unwrap().len(), 3);
    assert_eq!(suite["duration"][3]["options"]["max_units"], 2);
    assert_eq!(suite["duration"][4]["output"], serde_json::Value::Null);
    assert_eq!(suite["parse_duration"][0]["output"], "9000");
}
