//! Whole-file text utilities that never fail from the caller's point of view.
//!
//! Each function performs one blocking read or write, logs the outcome
//! through `tracing` and returns normally. Failures are logged at `ERROR`
//! and then dropped: a failed read returns an empty string, a failed write
//! or append returns `()` without touching the file. Callers that need to
//! tell failure apart from success should use [`FileSystemReader`] and
//! [`FileSystemWriter`] through the port traits instead, which return the
//! error.
//!
//! ```no_run
//! use constitution_writer::text_file::{append_to_file, read_file_content, write_to_file};
//!
//! write_to_file("notes.txt", "first line");
//! append_to_file("notes.txt", "second line");
//! assert_eq!(read_file_content("notes.txt").lines().count(), 2);
//! ```

use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use crate::ports::outbound::{TextFileReader, TextFileWriter};
use crate::shared::error::TextFileError;
use std::path::Path;
use tracing::{error, info};

pub use crate::shared::text::{normalize, LINE_SEPARATOR};

/// Reads the file at `path` and returns its trimmed content.
///
/// Returns an empty string when the file cannot be opened or read.
pub fn read_file_content(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match FileSystemReader::new().read_text(path) {
        Ok(content) => {
            info!(path = %path.display(), "Successfully read from the file");
            content
        }
        Err(e) => {
            error!(path = %path.display(), error = %root_details(&e), "Error reading the file");
            String::new()
        }
    }
}

/// Creates or truncates the file at `path` and writes `content` plus a line terminator.
pub fn write_to_file(path: impl AsRef<Path>, content: &str) {
    write_logged(&FileSystemWriter::new(), path.as_ref(), content);
}

/// Appends `content` plus a line terminator to the file at `path`, creating it if needed.
pub fn append_to_file(path: impl AsRef<Path>, content: &str) {
    append_logged(&FileSystemWriter::new(), path.as_ref(), content);
}

/// Truncating write through any writer, logged and suppressed.
/// Returns whether the write succeeded.
pub(crate) fn write_logged<W: TextFileWriter>(writer: &W, path: &Path, content: &str) -> bool {
    match writer.write_text(path, content) {
        Ok(()) => {
            info!(path = %path.display(), "Successfully wrote to the file");
            true
        }
        Err(e) => {
            log_write_failure(path, &e);
            false
        }
    }
}

/// Appending write through any writer, logged and suppressed.
/// Returns whether the append succeeded.
pub(crate) fn append_logged<W: TextFileWriter>(writer: &W, path: &Path, content: &str) -> bool {
    match writer.append_text(path, content) {
        Ok(()) => {
            info!(path = %path.display(), "Successfully appended to the file");
            true
        }
        Err(e) => {
            log_write_failure(path, &e);
            false
        }
    }
}

fn log_write_failure(path: &Path, e: &anyhow::Error) {
    let details = root_details(e);
    match e.downcast_ref::<TextFileError>() {
        Some(TextFileError::FileOpenError { .. }) => error!(
            path = %path.display(),
            error = %details,
            "The file could not be created or opened"
        ),
        Some(TextFileError::AppendOpenError { .. }) => error!(
            path = %path.display(),
            error = %details,
            "The file could not be created or opened for appending"
        ),
        _ => error!(path = %path.display(), error = %details, "An I/O error occurred"),
    }
}

/// The underlying OS message, without the user-facing hint text
fn root_details(e: &anyhow::Error) -> String {
    match e.downcast_ref::<TextFileError>() {
        Some(
            TextFileError::FileReadError { details, .. }
            | TextFileError::FileOpenError { details, .. }
            | TextFileError::AppendOpenError { details, .. }
            | TextFileError::FileWriteError { details, .. },
        ) => details.clone(),
        None => e.to_string(),
    }
}
