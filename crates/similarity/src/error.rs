use thiserror::Error;

/// Errors produced by the similarity layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimilarityError {
    /// The two vectors being compared have different lengths.
    #[error("vector dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    /// Invalid configuration (thresholds, caps).
    #[error("invalid similarity config: {0}")]
    InvalidConfig(String),
}
