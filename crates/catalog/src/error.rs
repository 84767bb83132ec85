use thiserror::Error;

/// Errors raised by catalog requests before they are softened at the trait
/// boundary. Callers of [`crate::BookCatalog`] never see these; they exist
/// so the client internals can log precisely what went wrong.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (DNS, TCP, TLS, timeout).
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body was not the JSON shape we expected.
    #[error("malformed catalog response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_context() {
        let err = CatalogError::Status {
            status: 503,
            url: "https://openlibrary.org/search.json".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("search.json"));
    }

    #[test]
    fn malformed_error_message_passthrough() {
        let err = CatalogError::Malformed("docs is not an array".into());
        assert!(err.to_string().contains("docs is not an array"));
    }
}
