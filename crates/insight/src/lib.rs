//! Hosted-model text generation for the recommendation pipeline.
//!
//! Two operations ride on one chat-completion call each: extracting theme
//! keywords from a book description, and explaining why two books are
//! similar. Both are soft: a failed or malformed model call degrades to an
//! empty keyword list or a canned explanation, never an error the pipeline
//! has to handle.
//!
//! The model sits behind the [`LanguageModel`] trait so the pipeline can be
//! driven by [`stub::ScriptedModel`] in tests: hosted completions run with
//! temperature above zero and identical inputs do not produce stable output,
//! which makes the real client useless for assertions.

pub mod api;
pub mod config;
pub mod error;
pub mod explain;
pub mod keywords;
pub mod stub;

pub use crate::api::ChatCompletionClient;
pub use crate::config::InsightConfig;
pub use crate::error::InsightError;
pub use crate::explain::{generate_explanation, FALLBACK_EXPLANATION};
pub use crate::keywords::extract_keywords;

use async_trait::async_trait;

/// One-shot text completion against a hosted chat model.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Send a system/user message pair and return the generated text.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, InsightError>;
}
