//! Output sinks for the generated program.
//!
//! [`FileSink`] writes to a sibling `<name>.tmp` file and renames it over
//! the destination only on [`FileSink::commit`]. Dropping an uncommitted sink
//! deletes the temp file, so the destination is either the previous file or
//! the complete new one.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::diagnostics::GenError;

/// Receives the program one section at a time.
pub trait ProgramSink {
    fn emit(&mut self, section: &str) -> Result<(), GenError>;
}

// ============================================================================
// IN-MEMORY AND STDOUT SINKS
// ============================================================================

/// Collects sections into a String for tests, `--check` and `--stdout`.
#[derive(Debug, Default)]
pub struct ProgramBuffer {
    buffer: String,
}

impl ProgramBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl ProgramSink for ProgramBuffer {
    fn emit(&mut self, section: &str) -> Result<(), GenError> {
        self.buffer.push_str(section);
        Ok(())
    }
}

/// Writes sections straight to stdout.
pub struct StdoutSink;

impl ProgramSink for StdoutSink {
    fn emit(&mut self, section: &str) -> Result<(), GenError> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(section.as_bytes())
            .map_err(|e| GenError::io("write", "<stdout>", e))
    }
}

// ============================================================================
// FILE SINK
// ============================================================================

pub struct FileSink {
    target: PathBuf,
    temp: PathBuf,
    file: Option<BufWriter<File>>,
}

impl FileSink {
    pub fn create(target: &Path) -> Result<Self, GenError> {
        let temp = temp_path(target)?;
        let file = File::create(&temp).map_err(|e| GenError::io("create", &temp, e))?;
        Ok(Self {
            target: target.to_path_buf(),
            temp,
            file: Some(BufWriter::new(file)),
        })
    }

    /// Flushes and moves the temp file onto the destination.
    pub fn commit(mut self) -> Result<(), GenError> {
        let Some(writer) = self.file.take() else {
            return Ok(());
        };
        let file = writer
            .into_inner()
            .map_err(|e| GenError::io("write", &self.temp, e.into_error()))?;
        file.sync_all()
            .map_err(|e| GenError::io("write", &self.temp, e))?;
        drop(file);
        fs::rename(&self.temp, &self.target)
            .map_err(|e| GenError::io("replace", &self.target, e))
    }
}

impl ProgramSink for FileSink {
    fn emit(&mut self, section: &str) -> Result<(), GenError> {
        let Some(writer) = self.file.as_mut() else {
            return Err(GenError::io(
                "write",
                &self.temp,
                io::Error::new(io::ErrorKind::Other, "sink already committed"),
            ));
        };
        writer
            .write_all(section.as_bytes())
            .map_err(|e| GenError::io("write", &self.temp, e))
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Also reached after a failed rename in `commit`.
        self.file.take();
        if self.temp.exists() {
            let _ = fs::remove_file(&self.temp);
        }
    }
}

fn temp_path(target: &Path) -> Result<PathBuf, GenError> {
    let Some(name) = target.file_name() else {
        return Err(GenError::io(
            "create",
            target,
            io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"),
        ));
    };
    let mut temp_name = name.to_os_string();
    temp_name.push(".tmp");
    Ok(target.with_file_name(temp_name))
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Sends every section through `sink` in order.
pub fn emit_all(sections: &[String], sink: &mut dyn ProgramSink) -> Result<(), GenError> {
    for section in sections {
        sink.emit(section)?;
    }
    Ok(())
}

/// Writes the program to `path`, replacing it only once every section has
/// been written.
pub fn write_program(sections: &[String], path: &Path) -> Result<(), GenError> {
    let mut sink = FileSink::create(path)?;
    emit_all(sections, &mut sink)?;
    sink.commit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "whenwords-testgen-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn buffer_concatenates_sections() {
        let mut buffer = ProgramBuffer::new();
        emit_all(&["a\n".to_string(), "b\n".to_string()], &mut buffer).unwrap();
        assert_eq!(buffer.as_str(), "a\nb\n");
    }

    #[test]
    fn write_program_replaces_target_and_cleans_up() {
        let dir = scratch_dir("commit");
        let target = dir.join("tests.c");
        fs::write(&target, "old").unwrap();

        write_program(&["int x;\n".to_string()], &target).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "int x;\n");
        assert!(!dir.join("tests.c.tmp").exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn uncommitted_sink_leaves_target_untouched() {
        let dir = scratch_dir("abort");
        let target = dir.join("tests.c");
        fs::write(&target, "old").unwrap();

        {
            let mut sink = FileSink::create(&target).unwrap();
            sink.emit("partial").unwrap();
        }

        assert_eq!(fs::read_to_string(&target).unwrap(), "old");
        assert!(!dir.join("tests.c.tmp").exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = scratch_dir("missing");
        let target = dir.join("no/such/dir/tests.c");
        let err = write_program(&[String::new()], &target).unwrap_err();
        assert_eq!(err.code_str(), "testgen::io");
        let _ = fs::remove_dir_all(&dir);
    }
}
