//! Error types for Horizon Reflow core plumbing.

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors reported by the core plumbing.
///
/// The reflow engine itself never fails; these only surface from the
/// explicit `try_*` variants of connection and task management.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("Invalid or disconnected connection ID")]
    InvalidConnection,
    /// The task already ran or was cancelled.
    #[error("Deferred task {0} is not pending")]
    TaskNotFound(u64),
}
