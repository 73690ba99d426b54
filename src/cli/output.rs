//! User-facing status lines and diffs, written to stderr.

use std::io::Write;

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Unchanged runs longer than this are collapsed in diffs.
const DIFF_CONTEXT_LINES: usize = 6;

pub struct StatusPrinter {
    stream: StandardStream,
}

impl StatusPrinter {
    pub fn new(use_colors: bool) -> Self {
        let choice = if use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stream: StandardStream::stderr(choice),
        }
    }

    pub fn success(&mut self, label: &str, message: &str) {
        self.status(Color::Green, label, message);
    }

    pub fn warning(&mut self, label: &str, message: &str) {
        self.status(Color::Yellow, label, message);
    }

    fn status(&mut self, color: Color, label: &str, message: &str) {
        let _ = self
            .stream
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(self.stream, "{label}");
        let _ = self.stream.reset();
        let _ = writeln!(self.stream, " {message}");
    }

    /// Prints a line diff from `old` to `new`.
    pub fn diff(&mut self, old: &str, new: &str) {
        let changeset = Changeset::new(old, new, "\n");
        for diff in &changeset.diffs {
            match diff {
                Difference::Same(ref x) => {
                    let _ = self.stream.reset();
                    let lines: Vec<&str> = x.lines().collect();
                    if lines.len() > DIFF_CONTEXT_LINES {
                        let _ = writeln!(self.stream, "@@ {} unchanged lines @@", lines.len());
                    } else {
                        for line in lines {
                            let _ = writeln!(self.stream, " {line}");
                        }
                    }
                }
                Difference::Add(ref x) => {
                    let _ = self.stream.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                    for line in x.lines() {
                        let _ = writeln!(self.stream, "+{line}");
                    }
                }
                Difference::Rem(ref x) => {
                    let _ = self.stream.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                    for line in x.lines() {
                        let _ = writeln!(self.stream, "-{line}");
                    }
                }
            }
        }
        let _ = self.stream.reset();
    }
}
