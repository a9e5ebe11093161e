/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the application core talks to the
/// file system through them.
pub mod outbound;
