/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the demo workflow and reaches the file system
/// only through the outbound ports.
pub mod dto;
pub mod use_cases;
