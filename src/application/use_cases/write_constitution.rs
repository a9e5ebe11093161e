use crate::application::dto::{ConstitutionRequest, ConstitutionResponse};
use crate::ports::outbound::TextFileWriter;
use crate::text_file::{append_logged, write_logged};
use tracing::debug;

/// WriteConstitutionUseCase - writes a body, then appends one line
///
/// Each step goes through the logged, non-failing write path: a failed
/// write does not prevent the append from being attempted.
///
/// # Type Parameters
/// * `W` - TextFileWriter implementation
pub struct WriteConstitutionUseCase<W> {
    writer: W,
}

impl<W> WriteConstitutionUseCase<W>
where
    W: TextFileWriter,
{
    /// Creates a new WriteConstitutionUseCase with an injected writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Executes the write-then-append workflow
    pub fn execute(&self, request: ConstitutionRequest) -> ConstitutionResponse {
        debug!(
            path = %request.output_path.display(),
            body_len = request.body.len(),
            "Writing constitution"
        );

        let written = write_logged(&self.writer, &request.output_path, &request.body);
        let appended = append_logged(
            &self.writer,
            &request.output_path,
            &request.appended_line,
        );

        ConstitutionResponse::new(request.output_path, written, appended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::filesystem::FileSystemWriter;
    use crate::domain::{APPENDED_LINE, PREAMBLE};
    use crate::shared::error::TextFileError;
    use crate::shared::text::normalize;
    use crate::shared::Result;
    use std::cell::RefCell;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq)]
    enum Call {
        Write(String),
        Append(String),
    }

    /// Records calls and optionally fails the truncating write
    struct RecordingWriter {
        calls: RefCell<Vec<Call>>,
        fail_write: bool,
    }

    impl RecordingWriter {
        fn new(fail_write: bool) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_write,
            }
        }
    }

    impl TextFileWriter for RecordingWriter {
        fn write_text(&self, path: &Path, content: &str) -> Result<()> {
            self.calls.borrow_mut().push(Call::Write(content.to_string()));
            if self.fail_write {
                return Err(TextFileError::FileOpenError {
                    path: path.to_path_buf(),
                    details: "mock open failure".to_string(),
                }
                .into());
            }
            Ok(())
        }

        fn append_text(&self, _path: &Path, content: &str) -> Result<()> {
            self.calls.borrow_mut().push(Call::Append(content.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_execute_writes_then_appends() {
        let use_case = WriteConstitutionUseCase::new(RecordingWriter::new(false));

        let response = use_case.execute(ConstitutionRequest::default());

        assert!(response.is_complete());
        assert_eq!(
            *use_case.writer.calls.borrow(),
            vec![
                Call::Write(PREAMBLE.to_string()),
                Call::Append(APPENDED_LINE.to_string()),
            ]
        );
    }

    #[test]
    fn test_execute_appends_even_when_write_fails() {
        let use_case = WriteConstitutionUseCase::new(RecordingWriter::new(true));

        let response = use_case.execute(ConstitutionRequest::default());

        assert!(!response.written);
        assert!(response.appended);
        assert!(!response.is_complete());
        assert_eq!(use_case.writer.calls.borrow().len(), 2);
    }

    #[test]
    fn test_execute_against_file_system() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("MyConstitution.txt");
        let use_case = WriteConstitutionUseCase::new(FileSystemWriter::new());

        let response = use_case.execute(ConstitutionRequest::with_output(output_path.clone()));

        assert!(response.is_complete());
        let content = fs::read_to_string(&output_path).unwrap();
        assert_eq!(
            normalize(&content),
            format!("{}\n{}", PREAMBLE, APPENDED_LINE)
        );
    }

    #[test]
    fn test_execute_invalid_directory_reports_both_failures() {
        let use_case = WriteConstitutionUseCase::new(FileSystemWriter::new());
        let request =
            ConstitutionRequest::with_output(PathBuf::from("/invalid/path/MyConstitution.txt"));

        let response = use_case.execute(request);

        assert!(!response.written);
        assert!(!response.appended);
    }
}
