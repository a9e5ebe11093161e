use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use constitution_writer::prelude::*;

/// A call received by the mock writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterCall {
    Write { path: PathBuf, content: String },
    Append { path: PathBuf, content: String },
}

/// Mock TextFileWriter that records calls and can fail either operation
#[derive(Default, Clone)]
pub struct MockTextFileWriter {
    pub calls: Arc<Mutex<Vec<WriterCall>>>,
    pub fail_write: bool,
    pub fail_append: bool,
}

impl MockTextFileWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Truncating writes fail as if the file could not be opened
    pub fn with_write_failure(mut self) -> Self {
        self.fail_write = true;
        self
    }

    /// Appends fail with an I/O error after a successful open
    pub fn with_append_failure(mut self) -> Self {
        self.fail_append = true;
        self
    }

    pub fn get_calls(&self) -> Vec<WriterCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl TextFileWriter for MockTextFileWriter {
    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        self.calls.lock().unwrap().push(WriterCall::Write {
            path: path.to_path_buf(),
            content: content.to_string(),
        });
        if self.fail_write {
            return Err(TextFileError::FileOpenError {
                path: path.to_path_buf(),
                details: "Mock open failure".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn append_text(&self, path: &Path, content: &str) -> Result<()> {
        self.calls.lock().unwrap().push(WriterCall::Append {
            path: path.to_path_buf(),
            content: content.to_string(),
        });
        if self.fail_append {
            return Err(TextFileError::FileWriteError {
                path: path.to_path_buf(),
                details: "Mock write failure".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
