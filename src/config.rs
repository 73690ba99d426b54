//! Generator settings, built from CLI arguments over these defaults.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// The YAML test specification.
    pub spec_path: PathBuf,
    /// Where the generated C program is written.
    pub output_path: PathBuf,
    /// Header of the library under test, emitted as `#include "<header>"`.
    pub header: String,
    pub use_colors: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            spec_path: PathBuf::from("tests.yaml"),
            output_path: PathBuf::from("tests.c"),
            header: "whenwords.h".to_string(),
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

impl GeneratorConfig {
    /// Replaces any setting for which an override is given.
    pub fn with_overrides(
        mut self,
        spec_path: Option<PathBuf>,
        output_path: Option<PathBuf>,
        header: Option<String>,
        no_color: bool,
    ) -> Self {
        if let Some(spec_path) = spec_path {
            self.spec_path = spec_path;
        }
        if let Some(output_path) = output_path {
            self.output_path = output_path;
        }
        if let Some(header) = header {
            self.header = header;
        }
        if no_color {
            self.use_colors = false;
        }
        self
    }
}
