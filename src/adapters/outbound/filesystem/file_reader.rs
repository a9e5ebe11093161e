use crate::ports::outbound::TextFileReader;
use crate::shared::error::TextFileError;
use crate::shared::text::LINE_SEPARATOR;
use crate::shared::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// FileSystemReader adapter for reading text files from the file system
///
/// Reads line by line through a buffered reader. A line ends at `\n`,
/// `\r\n` or a lone `\r`. Bytes that are not valid UTF-8 become U+FFFD
/// instead of failing the read. The file handle is dropped on every
/// return path.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_error(path: &Path, e: std::io::Error) -> anyhow::Error {
        TextFileError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFileReader for FileSystemReader {
    fn read_text(&self, path: &Path) -> Result<String> {
        let file = File::open(path).map_err(|e| Self::read_error(path, e))?;
        let mut reader = BufReader::new(file);

        let mut content = String::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| Self::read_error(path, e))?;
            if read == 0 {
                break;
            }
            for line in split_chunk(&buf) {
                content.push_str(&String::from_utf8_lossy(line));
                content.push_str(LINE_SEPARATOR);
            }
        }

        Ok(content.trim().to_string())
    }
}

/// Splits one `read_until` chunk into lines, treating `\r` as a terminator too
fn split_chunk(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    chunk.split(|&b| b == b'\r')
}
