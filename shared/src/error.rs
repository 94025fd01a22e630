//! Error types for the book skill.

use thiserror::Error;

use crate::goodreads::MetadataDecodeError;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving book metadata.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport error (DNS, connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Provider returned status {0}")]
    ProviderStatus(u16),

    /// Provider payload could not be decoded
    #[error("Metadata decode error: {0}")]
    Decode(#[from] MetadataDecodeError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
