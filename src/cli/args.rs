//! Defines the command-line arguments and subcommands.
//!
//! Unset options fall back to [`GeneratorConfig`](crate::config::GeneratorConfig)
//! defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "whenwords-testgen",
    version,
    about = "Compiles a YAML test specification into a C test program for whenwords."
)]
pub struct TestgenArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the C test program.
    Generate {
        /// The YAML test specification [default: tests.yaml].
        #[arg(long)]
        spec: Option<PathBuf>,
        /// Where to write the program [default: tests.c].
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Header of the library under test [default: whenwords.h].
        #[arg(long)]
        header: Option<String>,
        /// Print the program instead of writing it.
        #[arg(long, conflicts_with = "check")]
        stdout: bool,
        /// Fail with a diff if the output file is out of date; writes nothing.
        #[arg(long)]
        check: bool,
        /// Disable colored status output.
        #[arg(long)]
        no_color: bool,
    },
    /// Load the specification and show what it contains.
    Inspect {
        /// The YAML test specification [default: tests.yaml].
        #[arg(long)]
        spec: Option<PathBuf>,
        /// Print the normalized suite as JSON.
        #[arg(long)]
        json: bool,
    },
}
