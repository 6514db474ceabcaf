//! Error types for creative-extract.
//!
//! Extraction itself is total and never fails; these errors cover the edges
//! where callers hand the crate serialized input or custom options.

/// Error type for input decoding and option validation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The serialized card input could not be decoded.
    #[error("Invalid card input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    /// Options are internally inconsistent.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
