//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use whenwords_testgen::suite::{load_suite_file, load_suite_str};
use whenwords_testgen::{generate_program, GeneratorConfig, TestSuite};

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> TestSuite {
    load_suite_file(&fixture_path(name)).unwrap()
}

pub fn suite(yaml: &str) -> TestSuite {
    load_suite_str("inline.yaml", yaml).unwrap()
}

pub fn program(suite: &TestSuite) -> String {
    generate_program(suite, &GeneratorConfig::default())
}

/// The initializer rows of `table`, without indentation or trailing comma.
pub fn table_rows(program: &str, table: &str) -> Vec<String> {
    let header = format!(" {table}[] = {{");
    let mut rows = Vec::new();
    let mut inside = false;
    for line in program.lines() {
        if line.starts_with("static const ") && line.ends_with(&header) {
            inside = true;
            continue;
        }
        if inside {
            if line == "};" {
                break;
            }
            rows.push(line.trim().trim_end_matches(',').to_string());
        }
    }
    rows
}

/// A fresh, empty directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "whenwords-testgen-it-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
