/// Result alias used by every port and adapter.
///
/// Adapters put a `TextFileError` inside the `anyhow::Error`; callers can
/// recover it with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
