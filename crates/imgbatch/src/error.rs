//! Error types for batch image resolution

use thiserror::Error;

/// Errors that can occur while resolving image locations
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Bytes (local or fetched) could not be decoded as an image
    #[error("Failed to load image: {0}")]
    Decode(String),

    /// Connection, DNS, timeout, or HTTP status error during fetch
    #[error("Failed to fetch image from URL: {0}")]
    Network(String),

    /// HTTP response succeeded but is not declared as an image
    #[error("URL does not point to an image (content-type: {0})")]
    ContentType(String),

    /// Batch-level: zero entries resolved and strict mode was requested.
    /// Carries the caller's fallback message verbatim.
    #[error("{0}")]
    NoValidImages(String),
}

impl ResolveError {
    /// Wrap a reqwest error as a network failure
    ///
    /// Covers connect errors, DNS failures, timeouts, and non-2xx
    /// statuses surfaced via `error_for_status`.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ResolveError::Network(err.to_string())
    }

    /// Wrap an image decode error
    pub fn from_decode(err: image::ImageError) -> Self {
        ResolveError::Decode(err.to_string())
    }
}
