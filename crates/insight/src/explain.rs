//! Similarity-explanation generation.

use crate::config::InsightConfig;
use crate::LanguageModel;

const EXPLAIN_SYSTEM_PROMPT: &str =
    "You are a literary expert. Explain why two books are similar in 1-2 concise sentences.";

/// Returned whenever the model cannot produce an explanation.
pub const FALLBACK_EXPLANATION: &str = "Similar themes and style.";

/// Ask the model why two books are similar.
///
/// Soft: any failure yields [`FALLBACK_EXPLANATION`] so a ranked result
/// never ships without explanatory text.
pub async fn generate_explanation(
    model: &dyn LanguageModel,
    title_a: &str,
    description_a: &str,
    title_b: &str,
    description_b: &str,
    cfg: &InsightConfig,
) -> String {
    let user = format!(
        "Why are these two books similar?\n\nBook 1: {title_a}\nDescription: {description_a}\n\n\
Book 2: {title_b}\nDescription: {description_b}"
    );
    match model
        .complete(
            EXPLAIN_SYSTEM_PROMPT,
            &user,
            cfg.explain_temperature,
            cfg.max_tokens,
        )
        .await
    {
        Ok(text) => {
            let text = text.trim().to_string();
            if text.is_empty() {
                FALLBACK_EXPLANATION.to_string()
            } else {
                text
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "explanation generation failed, using fallback");
            FALLBACK_EXPLANATION.to_string()
        }
    }
}
