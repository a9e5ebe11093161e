/// Line terminator written after every line and used to join lines on read
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Converts every `\r\n` to `\n` and trims leading and trailing whitespace
///
/// Two texts that differ only in line terminators or surrounding
/// whitespace normalize to the same string.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").trim().to_string()
}
