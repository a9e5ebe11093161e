use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Write and append failures never surface here: they are logged and the
/// demo still exits with `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success, including runs where a write or append was logged as failed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error outside the file utilities (e.g. a broken config file)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the text file adapters.
///
/// One variant per failure category: read, open for truncation,
/// open for appending, and I/O after a successful open.
#[derive(Debug, Error)]
pub enum TextFileError {
    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("The file could not be created or opened: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileOpenError { path: PathBuf, details: String },

    #[error("The file could not be created or opened for appending: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    AppendOpenError { path: PathBuf, details: String },

    #[error("An I/O error occurred while writing: {path}\nDetails: {details}\n\n💡 Hint: Please check available disk space")]
    FileWriteError { path: PathBuf, details: String },
}

impl TextFileError {
    /// The path the failed operation targeted
    pub fn path(&self) -> &PathBuf {
        match self {
            TextFileError::FileReadError { path, .. }
            | TextFileError::FileOpenError { path, .. }
            | TextFileError::AppendOpenError { path, .. }
            | TextFileError::FileWriteError { path, .. } => path,
        }
    }
}
