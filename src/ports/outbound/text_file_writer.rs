use crate::shared::Result;
use std::path::Path;

/// TextFileWriter port for writing a single line of content to a file
///
/// Both operations write `content` followed by the platform line
/// terminator. The file handle never outlives the call.
pub trait TextFileWriter {
    /// Creates or truncates the file at `path` and writes `content`
    ///
    /// # Errors
    /// - `TextFileError::FileOpenError` if the file cannot be created or opened
    /// - `TextFileError::FileWriteError` if writing or flushing fails
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;

    /// Opens (or creates) the file at `path` in append mode and writes
    /// `content` after the existing bytes
    ///
    /// # Errors
    /// - `TextFileError::AppendOpenError` if the file cannot be opened for appending
    /// - `TextFileError::FileWriteError` if writing or flushing fails
    fn append_text(&self, path: &Path, content: &str) -> Result<()>;
}
