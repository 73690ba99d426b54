//! The command-line interface.
//!
//! Dispatches subcommands onto the library pipeline and turns errors into
//! `miette` reports and a non-zero exit status.

use std::{fs, io, process};

use clap::Parser;

use crate::{
    cli::{
        args::{Command, TestgenArgs},
        output::StatusPrinter,
    },
    config::GeneratorConfig,
    emit::{
        emit_sections,
        writer::{emit_all, write_program, ProgramBuffer, StdoutSink},
    },
    suite::{load_suite_file, Category, TestSuite},
    GenError,
};

pub mod args;
pub mod output;

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = TestgenArgs::parse();

    let result = match args.command {
        Command::Generate {
            spec,
            output,
            header,
            stdout,
            check,
            no_color,
        } => {
            let config =
                GeneratorConfig::default().with_overrides(spec, output, header, no_color);
            let mode = if check {
                GenerateMode::Check
            } else if stdout {
                GenerateMode::Stdout
            } else {
                GenerateMode::Write
            };
            handle_generate(&config, mode)
        }
        Command::Inspect { spec, json } => {
            let config = GeneratorConfig::default().with_overrides(spec, None, None, false);
            handle_inspect(&config, json)
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(1);
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GenerateMode {
    Write,
    Stdout,
    Check,
}

/// Returns `Ok(false)` when `--check` finds a stale output file.
fn handle_generate(config: &GeneratorConfig, mode: GenerateMode) -> Result<bool, GenError> {
    let suite = load_suite_file(&config.spec_path)?;
    let sections = emit_sections(&suite, config);
    let mut status = StatusPrinter::new(config.use_colors);

    match mode {
        GenerateMode::Write => {
            write_program(&sections, &config.output_path)?;
            status.success(
                "Generated",
                &format!("{} ({})", config.output_path.display(), suite.summary()),
            );
            Ok(true)
        }
        GenerateMode::Stdout => {
            emit_all(&sections, &mut StdoutSink)?;
            Ok(true)
        }
        GenerateMode::Check => {
            let mut buffer = ProgramBuffer::new();
            emit_all(&sections, &mut buffer)?;
            let path = config.output_path.display();
            match fs::read_to_string(&config.output_path) {
                Ok(existing) if existing == buffer.as_str() => {
                    status.success("Up to date", &path.to_string());
                    Ok(true)
                }
                Ok(existing) => {
                    status.warning("Stale", &format!("{path} differs from generated output"));
                    status.diff(&existing, buffer.as_str());
                    Ok(false)
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    status.warning("Stale", &format!("{path} does not exist"));
                    Ok(false)
                }
                Err(e) => Err(GenError::io("read", &config.output_path, e)),
            }
        }
    }
}

fn handle_inspect(config: &GeneratorConfig, json: bool) -> Result<bool, GenError> {
    let suite = load_suite_file(&config.spec_path)?;
    if json {
        let text =
            serde_json::to_string_pretty(&suite).map_err(|source| GenError::Json { source })?;
        println!("{text}");
    } else {
        print_counts(&suite);
    }
    Ok(true)
}

// ============================================================================
// OUTPUT FUNCTIONS
// ============================================================================

fn print_counts(suite: &TestSuite) {
    for category in Category::ALL {
        println!("{:<16}{}", category.key(), suite.len(category));
    }
    println!("{:<16}{}", "total", suite.total());
}
