/// Shared utilities and error types
pub mod error;
pub mod result;
pub mod text;

pub use result::Result;
