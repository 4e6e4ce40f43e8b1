/// Result alias with anyhow::Error as the error type.
/// Typed failures travel inside it as `ScanboardError` and are recovered
/// with `downcast_ref` where the caller needs to branch on them.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
