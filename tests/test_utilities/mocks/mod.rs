/// Mock implementations for testing
mod mock_text_file_writer;

pub use mock_text_file_writer::{MockTextFileWriter, WriterCall};
