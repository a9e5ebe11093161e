//! constitution-writer - whole-file text read/write utilities
//!
//! This library reads a text file into one trimmed string and writes or
//! appends a single line of content to a file, following hexagonal
//! architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): The fixed text the demo writes
//! - **Application Layer** (`application`): The write-then-append use case
//! - **Ports** (`ports`): Reader and writer interfaces returning `Result`
//! - **Adapters** (`adapters`): File system implementations of the ports
//! - **Text file utilities** (`text_file`): Free functions that log and
//!   suppress every failure
//! - **Shared** (`shared`): Error types and text normalization
//!
//! # Example
//!
//! ```no_run
//! use constitution_writer::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! // Explicit errors through the ports
//! let writer = FileSystemWriter::new();
//! writer.write_text(Path::new("notes.txt"), "first line")?;
//! writer.append_text(Path::new("notes.txt"), "second line")?;
//!
//! let content = FileSystemReader::new().read_text(Path::new("notes.txt"))?;
//! assert_eq!(normalize(&content), "first line\nsecond line");
//!
//! // Or the non-failing utilities
//! write_to_file("notes.txt", "replaced");
//! assert_eq!(read_file_content("notes.txt"), "replaced");
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod shared;
pub mod text_file;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, WriteMode};
    pub use crate::application::dto::{ConstitutionRequest, ConstitutionResponse};
    pub use crate::application::use_cases::WriteConstitutionUseCase;
    pub use crate::domain::{APPENDED_LINE, DEFAULT_OUTPUT_FILENAME, PREAMBLE};
    pub use crate::ports::outbound::{TextFileReader, TextFileWriter};
    pub use crate::shared::error::TextFileError;
    pub use crate::shared::Result;
    pub use crate::text_file::{
        append_to_file, normalize, read_file_content, write_to_file, LINE_SEPARATOR,
    };
}
