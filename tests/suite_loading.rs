//! Loading the specification document into a suite.

mod common;

use common::{fixture_path, load_fixture, scratch_dir};
use whenwords_testgen::suite::{load_suite_file, suite_from_value, DurationOptions};
use whenwords_testgen::{Category, GenError};

#[test]
fn fixture_loads_every_category_in_order() {
    let suite = load_fixture("whenwords.yaml");
    assert_eq!(suite.summary(), "timeago: 3, duration: 5, parse_duration: 4, human_date: 2, date_range: 2");
    assert_eq!(suite.duration[0].name, "1 minute 30 seconds");
    assert_eq!(suite.date_range[1].output.as_deref(), Some("January 15–16, 2024"));
}

#[test]
fn fixture_options_and_errors() {
    let suite = load_fixture("whenwords.yaml");
    assert_eq!(suite.duration[0].options, None);
    assert_eq!(
        suite.duration[2].options,
        Some(DurationOptions {
            compact: false,
            max_units: Some(1)
        })
    );
    let negative = &suite.duration[4];
    assert!(negative.error);
    assert_eq!(negative.output, None);
    assert_eq!(negative.seconds.as_str(), "-100");

    let empty = &suite.parse_duration[3];
    assert_eq!(empty.input.as_deref(), Some(""));
    assert!(empty.error);
}

#[test]
fn suite_from_value_rejects_non_mapping_root() {
    let doc = serde_yaml::Value::Sequence(vec![]);
    let err = suite_from_value(&doc).unwrap_err();
    assert_eq!(err.code_str(), "testgen::shape");
}

#[test]
fn null_category_counts_as_empty() {
    let dir = scratch_dir("null-category");
    let spec = dir.join("tests.yaml");
    std::fs::write(&spec, "timeago:\nhuman_date: []\n").unwrap();
    let suite = load_suite_file(&spec).unwrap();
    assert_eq!(suite.len(Category::Timeago), 0);
    assert_eq!(suite.len(Category::HumanDate), 0);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unreadable_file_is_an_io_error() {
    let err = load_suite_file(&fixture_path("does-not-exist.yaml")).unwrap_err();
    match err {
        GenError::Io { action, .. } => assert_eq!(action, "read"),
        other => panic!("unexpected error: {other:?}"),
    }
}
