//! Compiles a declarative YAML test specification for the whenwords
//! date/duration library into a self-contained C test program.
//!
//! Pipeline: [`suite`] loads the document, [`emit`] renders the tables and
//! the harness, and [`emit::writer`] writes the result.

pub use crate::config::GeneratorConfig;
pub use crate::diagnostics::GenError;
pub use crate::emit::generate_program;
pub use crate::suite::{Category, TestSuite};

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod suite;
