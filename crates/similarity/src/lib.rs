//! Similarity scoring and candidate selection.
//!
//! Three small, pure pieces used by the recommendation pipeline:
//!
//! - [`cosine_similarity`]: bounded similarity between two equal-length
//!   vectors, with a typed error on length mismatch.
//! - [`rank_by_score`]: stable threshold-filter, then descending sort, then top-N.
//! - [`diversify_by_era`]: per-publish-era caps applied to a candidate pool
//!   so one era cannot dominate scoring.
//!
//! Everything here is deterministic and free of I/O; the caller supplies the
//! current year where era classification needs it.

pub mod config;
pub mod cosine;
pub mod era;
pub mod error;
pub mod rank;

pub use crate::config::{EraCaps, SimilarityConfig};
pub use crate::cosine::cosine_similarity;
pub use crate::era::{diversify_by_era, EraBucket};
pub use crate::error::SimilarityError;
pub use crate::rank::rank_by_score;
