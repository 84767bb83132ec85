//! Theme-keyword extraction.

use crate::config::InsightConfig;
use crate::LanguageModel;

const KEYWORD_SYSTEM_PROMPT: &str = "You are a literary expert. Extract 8-10 single-word or \
two-word key themes, genres, and keywords from book descriptions. Return ONLY a comma-separated \
list with NO periods or extra punctuation. Example: science fiction, adventure, space, survival, \
mystery";

/// Ask the model for theme keywords describing `description`.
///
/// The raw completion is split on commas and cleaned by [`clean_keywords`].
/// Soft: any model failure yields an empty list; the pipeline then finds
/// zero candidates instead of failing the request.
pub async fn extract_keywords(
    model: &dyn LanguageModel,
    description: &str,
    cfg: &InsightConfig,
) -> Vec<String> {
    let user = format!("Extract keywords from this book description:\n\n{description}");
    match model
        .complete(
            KEYWORD_SYSTEM_PROMPT,
            &user,
            cfg.keyword_temperature,
            cfg.max_tokens,
        )
        .await
    {
        Ok(raw) => clean_keywords(&raw),
        Err(err) => {
            tracing::warn!(error = %err, "keyword extraction failed, returning no keywords");
            Vec::new()
        }
    }
}

/// Normalize a comma-separated keyword reply.
///
/// Each term is trimmed, lower-cased, and stripped of `.,!?;`; terms survive
/// only when longer than two characters and at most two words.
pub fn clean_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|term| {
            term.trim()
                .to_lowercase()
                .replace(['.', ',', '!', '?', ';'], "")
        })
        .filter(|term| term.len() > 2 && term.split_whitespace().count() <= 2)
        .collect()
}
