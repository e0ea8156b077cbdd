use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by image source searches.
///
/// Soft failures (no key, `401`, `429`, empty results) are not errors: they resolve
/// to an empty candidate list. Everything here degrades to the placeholder upstream.
pub enum SourceError {
    /// The request did not complete within the per-attempt timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured per-attempt timeout.
        timeout_ms: u64,
    },

    /// Provider answered with an unexpected non-2xx status.
    #[error("unexpected provider status {status} {reason}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase, if known.
        reason: String,
    },

    /// Connection, DNS, TLS, or other transport failure.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Response body was not the expected JSON shape.
    #[error("failed to decode search response: {0}")]
    Decode(#[source] reqwest::Error),

    /// Source could not serve the request (used by non-HTTP sources).
    #[error("image source unavailable: {0}")]
    Unavailable(String),
}

impl SourceError {
    /// Returns `true` for failures worth retrying (timeouts only).
    pub fn is_retryable(&self) -> bool {
        matches!(self, SourceError::Timeout { .. })
    }

    /// Classifies a reqwest error, mapping timeouts to [`SourceError::Timeout`].
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            SourceError::Timeout { timeout_ms }
        } else if err.is_decode() {
            SourceError::Decode(err)
        } else {
            SourceError::Transport(err)
        }
    }
}

pub type SourceResult<T> = Result<T, SourceError>;
