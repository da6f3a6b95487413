//! CMS client error types.

use thiserror::Error;

/// Errors that can occur when talking to the CMS content-delivery API.
#[derive(Debug, Error)]
pub enum CmsError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The delivery API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the CMS.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to interpret a delivery API response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The CMS returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}

impl CmsError {
    /// Whether this error is the delivery API's not-found response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
