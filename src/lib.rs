//! Workspace umbrella crate for the bookmatch recommendation service.
//!
//! This crate stitches the stage crates together: the catalog client finds
//! and describes books, the lexical encoder fingerprints descriptions, the
//! similarity engine scores and selects candidates, and the insight crate
//! turns descriptions into keywords and explanations. [`Recommender`] runs
//! the whole pipeline for one request.

pub use catalog::filter::retain_original_works;
pub use catalog::{
    is_derivative_title, normalize_doc, BookCatalog, BookRecord, CatalogConfig, CatalogError,
    OpenLibraryClient, SearchDoc, WorkDetail,
};
pub use insight::{
    extract_keywords, generate_explanation, ChatCompletionClient, InsightConfig, InsightError,
    LanguageModel, FALLBACK_EXPLANATION,
};
pub use lexical::{encode, LexicalConfig};
pub use similarity::{
    cosine_similarity, diversify_by_era, rank_by_score, EraBucket, EraCaps, SimilarityConfig,
    SimilarityError,
};

pub mod pipeline;

pub use crate::pipeline::{Outcome, PipelineConfig, Recommendation, Recommender};
