use crate::shared::Result;
use std::path::Path;

/// TextFileReader port for reading whole-file text content
pub trait TextFileReader {
    /// Reads every line of the file at `path`, joins them with the platform
    /// line terminator and trims leading and trailing whitespace
    ///
    /// # Errors
    /// Returns `TextFileError::FileReadError` if the file cannot be opened
    /// or a line cannot be read (including invalid UTF-8)
    fn read_text(&self, path: &Path) -> Result<String>;
}
