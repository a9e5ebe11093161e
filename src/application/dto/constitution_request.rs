use crate::domain::{APPENDED_LINE, DEFAULT_OUTPUT_FILENAME, PREAMBLE};
use std::path::PathBuf;

/// ConstitutionRequest - what to write, and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstitutionRequest {
    /// File to create or truncate, then append to
    pub output_path: PathBuf,
    /// Body written in truncate mode
    pub body: String,
    /// Line appended after the body
    pub appended_line: String,
}

impl ConstitutionRequest {
    pub fn new(output_path: PathBuf, body: String, appended_line: String) -> Self {
        Self {
            output_path,
            body,
            appended_line,
        }
    }

    /// Fixed preamble and appended line written to `output_path`
    pub fn with_output(output_path: PathBuf) -> Self {
        Self::new(
            output_path,
            PREAMBLE.to_string(),
            APPENDED_LINE.to_string(),
        )
    }
}

impl Default for ConstitutionRequest {
    fn default() -> Self {
        Self::with_output(PathBuf::from(DEFAULT_OUTPUT_FILENAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = ConstitutionRequest::default();
        assert_eq!(request.output_path, PathBuf::from("MyConstitution.txt"));
        assert_eq!(request.body, PREAMBLE);
        assert_eq!(request.appended_line, "This is an appended line.");
    }

    #[test]
    fn test_with_output_keeps_fixed_text() {
        let request = ConstitutionRequest::with_output(PathBuf::from("out/const.txt"));
        assert_eq!(request.output_path, PathBuf::from("out/const.txt"));
        assert_eq!(request.body, PREAMBLE);
    }
}
