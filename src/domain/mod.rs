/// Domain layer - the fixed text the demo writes
pub mod constitution;

pub use constitution::{APPENDED_LINE, DEFAULT_OUTPUT_FILENAME, PREAMBLE};
