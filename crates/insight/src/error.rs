use thiserror::Error;

/// Errors from the hosted-model client. The keyword and explanation helpers
/// absorb all of these into soft defaults; the typed variants exist for the
/// logs and for callers that want the real failure.
#[derive(Debug, Error)]
pub enum InsightError {
    /// Configuration cannot produce a valid request (e.g. no API key).
    #[error("invalid insight config: {0}")]
    InvalidConfig(String),

    /// Transport-level failure (DNS, TCP, TLS, timeout).
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("completion endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response parsed as JSON but had no generated text where expected.
    #[error("malformed completion response: {0}")]
    Malformed(String),
}
