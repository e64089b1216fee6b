//! Error types for the dataset explorer.
//!
//! This module defines the centralized error type [`ExplorerError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for explorer operations.
///
/// Consolidates every failure the controller can observe, from transport errors
/// on the three explore endpoints to malformed responses and configuration
/// problems. Variants wrapping external errors use `#[from]` for `?` conversion.
///
/// # Examples
///
/// ```
/// use dataset_explorer::ExplorerError;
///
/// fn validate_base_url(url: &str) -> Result<(), ExplorerError> {
///     if url.is_empty() {
///         return Err(ExplorerError::Config("base_url must not be empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_base_url("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Transport-level failure (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    ///
    /// `body` holds the response text, which the download endpoint uses as its
    /// error message.
    #[error("Server returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body as text (possibly empty).
        body: String,
    },

    /// A response body could not be decoded as the expected JSON shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed (attachments, saved archives, config).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The worker channel was closed while a response was pending.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// User-supplied input could not be interpreted (e.g. a non-numeric id).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A specialized `Result` type for explorer operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;
