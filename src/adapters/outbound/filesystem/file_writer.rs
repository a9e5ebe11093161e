use crate::ports::outbound::TextFileWriter;
use crate::shared::error::TextFileError;
use crate::shared::text::LINE_SEPARATOR;
use crate::shared::Result;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// How the target file is opened before writing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the file, discarding any existing content
    Truncate,
    /// Create the file if missing, keep existing content
    Append,
}

impl WriteMode {
    fn open(self, path: &Path) -> std::io::Result<File> {
        let mut options = OpenOptions::new();
        match self {
            WriteMode::Truncate => options.write(true).create(true).truncate(true),
            WriteMode::Append => options.append(true).create(true),
        };
        options.open(path)
    }

    fn open_error(self, path: &Path, e: std::io::Error) -> TextFileError {
        let path = path.to_path_buf();
        let details = e.to_string();
        match self {
            WriteMode::Truncate => TextFileError::FileOpenError { path, details },
            WriteMode::Append => TextFileError::AppendOpenError { path, details },
        }
    }
}

/// FileSystemWriter adapter for writing a line of text to a file
///
/// No validation happens before the open call: an invalid path
/// surfaces as the open error of the underlying file system.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_line(&self, path: &Path, content: &str, mode: WriteMode) -> Result<()> {
        let file = mode.open(path).map_err(|e| mode.open_error(path, e))?;

        let mut writer = BufWriter::new(file);
        write_terminated(&mut writer, content).map_err(|e| TextFileError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}

fn write_terminated<W: Write>(writer: &mut W, content: &str) -> std::io::Result<()> {
    writer.write_all(content.as_bytes())?;
    writer.write_all(LINE_SEPARATOR.as_bytes())?;
    writer.flush()
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFileWriter for FileSystemWriter {
    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        self.write_line(path, content, WriteMode::Truncate)
    }

    fn append_text(&self, path: &Path, content: &str) -> Result<()> {
        self.write_line(path, content, WriteMode::Append)
    }
}
