/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to read and write whole-file text content.
pub mod text_file_reader;
pub mod text_file_writer;

pub use text_file_reader::TextFileReader;
pub use text_file_writer::TextFileWriter;
