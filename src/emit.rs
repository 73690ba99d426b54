//! Turns a [`TestSuite`] into the text of a standalone C test program.
//!
//! Emission is a single pass over the suite. The program is assembled from
//! sections, in order:
//!
//! 1. includes
//! 2. record declarations, one struct per category
//! 3. the five static tables
//! 4. the `expect_string` / `expect_number` comparators
//! 5. `main`, which drives every table and reports a summary
//!
//! Rendering happens entirely in memory; [`writer`] is the only part that
//! touches the filesystem.

pub mod harness;
pub mod literal;
pub mod tables;
pub mod writer;

use crate::config::GeneratorConfig;
use crate::suite::TestSuite;

/// Line-oriented builder for generated C source.
#[derive(Debug, Default)]
pub struct CSource {
    text: String,
}

impl CSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl AsRef<str>) -> &mut Self {
        self.text.push_str(line.as_ref());
        self.text.push('\n');
        self
    }

    pub fn lines(&mut self, lines: &[&str]) -> &mut Self {
        for line in lines {
            self.line(line);
        }
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.text.push('\n');
        self
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Renders every section of the program, in file order.
pub fn emit_sections(suite: &TestSuite, config: &GeneratorConfig) -> Vec<String> {
    vec![
        harness::emit_includes(&config.header),
        tables::emit_record_types(),
        tables::emit_tables(suite),
        harness::emit_comparators(),
        harness::emit_driver(),
    ]
}

/// The complete program as one string.
pub fn generate_program(suite: &TestSuite, config: &GeneratorConfig) -> String {
    emit_sections(suite, config).concat()
}
