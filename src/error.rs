//! Error types for store-signals.
//!
//! Errors exist only at the boundary of the crate: input validation and the
//! upstream fetch. Signal extraction itself never fails; every field degrades
//! to its default value instead.

/// Error type for boundary operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The required domain parameter was absent or blank.
    #[error("missing required domain parameter")]
    MissingDomain,

    /// The upstream store-page request returned a non-2xx status.
    #[error("upstream request failed with status {status}")]
    Upstream {
        /// HTTP status code returned by the upstream service.
        status: u16,
    },

    /// The upstream HTTP request could not be completed.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for boundary operations.
pub type Result<T> = std::result::Result<T, Error>;
