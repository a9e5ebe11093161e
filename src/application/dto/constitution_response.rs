use std::path::PathBuf;

/// ConstitutionResponse - outcome of each step of the demo
///
/// Failed steps were already logged; the flags exist for callers and
/// tests, the demo itself ignores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstitutionResponse {
    pub output_path: PathBuf,
    pub written: bool,
    pub appended: bool,
}

impl ConstitutionResponse {
    pub fn new(output_path: PathBuf, written: bool, appended: bool) -> Self {
        Self {
            output_path,
            written,
            appended,
        }
    }

    /// Both the write and the append succeeded
    pub fn is_complete(&self) -> bool {
        self.written && self.appended
    }
}
