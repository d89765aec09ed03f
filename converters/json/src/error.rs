//! Error types for the JSON fixture converter.

/// Errors that can occur while rendering or writing fixture files.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error while writing a fixture file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Vector reading or slicing error.
    #[error(transparent)]
    Vectors(#[from] pairfix_vectors::Error),
}
