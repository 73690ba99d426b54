//! The in-memory test suite and the loader that builds it from YAML.

pub mod loader;
pub mod model;

pub use loader::{load_suite_file, load_suite_str, suite_from_value};
pub use model::{
    Category, DateRangeCase, DurationCase, DurationOptions, HumanDateCase, NumberLiteral,
    ParseDurationCase, TestSuite, TimeagoCase,
};
