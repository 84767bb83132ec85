//! The recommendation pipeline.
//!
//! One request flows through strictly sequential stages: look up the
//! original, fetch its description, extract theme keywords, fan out one
//! candidate search per keyword, score candidates against the original,
//! rank, and explain the survivors. Any stage may end the request early
//! with a typed terminal outcome; nothing here retries or propagates an
//! upstream failure, because every collaborator call degrades to a safe
//! default first.
//!
//! Three earlier handler variants (plain search, fixed-limit similarity,
//! era-diversified similarity) collapse into this one pipeline with a
//! `diversify` switch.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Datelike;
use futures::future::join_all;
use serde::{Deserialize, Serialize};

use catalog::filter::retain_original_works;
use catalog::{normalize_doc, BookCatalog, BookRecord, CatalogConfig};
use insight::{extract_keywords, generate_explanation, InsightConfig, LanguageModel};
use lexical::{encode, LexicalConfig};
use similarity::{cosine_similarity, diversify_by_era, rank_by_score, SimilarityConfig};

/// Knobs for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Lexical encoder settings (vector width, keyword flags).
    #[serde(default)]
    pub lexical: LexicalConfig,

    /// Scoring threshold, result count, and era caps.
    #[serde(default)]
    pub similarity: SimilarityConfig,

    /// Maximum cleaned keywords fed into candidate search.
    #[serde(default = "default_keyword_cap")]
    pub keyword_cap: usize,

    /// Per-keyword search result limit.
    #[serde(default = "default_keyword_search_limit")]
    pub keyword_search_limit: usize,

    /// Result limit for the original-title lookup.
    #[serde(default = "default_lookup_limit")]
    pub lookup_limit: usize,

    /// Descriptions shorter than this (in characters) are unusable.
    #[serde(default = "default_min_description_len")]
    pub min_description_len: usize,

    /// Whether keyword-search hits get era-diversity sampling by default.
    /// Overridable per request.
    #[serde(default = "default_diversify")]
    pub diversify: bool,

    /// Per-outbound-call deadline in seconds. A call that exceeds it yields
    /// its soft default, same as any other upstream failure.
    #[serde(default = "default_call_deadline_secs")]
    pub call_deadline_secs: u64,
}

impl PipelineConfig {
    /// Per-call deadline as a [`Duration`].
    pub fn call_deadline(&self) -> Duration {
        Duration::from_secs(self.call_deadline_secs)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            lexical: LexicalConfig::default(),
            similarity: SimilarityConfig::default(),
            keyword_cap: default_keyword_cap(),
            keyword_search_limit: default_keyword_search_limit(),
            lookup_limit: default_lookup_limit(),
            min_description_len: default_min_description_len(),
            diversify: default_diversify(),
            call_deadline_secs: default_call_deadline_secs(),
        }
    }
}

fn default_keyword_cap() -> usize {
    5
}

fn default_keyword_search_limit() -> usize {
    10
}

fn default_lookup_limit() -> usize {
    10
}

fn default_min_description_len() -> usize {
    20
}

fn default_diversify() -> bool {
    true
}

fn default_call_deadline_secs() -> u64 {
    10
}

/// A ranked candidate with its score and explanation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub book: BookRecord,
    pub score: f32,
    pub explanation: String,
}

/// Terminal result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing in the catalog matched the title (after exclusion filtering).
    NotFound,
    /// The matched work has no usable description.
    NoDescription,
    /// Pipeline ran to completion. `results` may still be empty: a model
    /// outage degrades to zero keywords and zero candidates, not an error.
    Success {
        original: BookRecord,
        keywords: Vec<String>,
        results: Vec<Recommendation>,
    },
}

/// Runs the recommendation pipeline against injected collaborators.
pub struct Recommender {
    catalog: Arc<dyn BookCatalog>,
    catalog_config: CatalogConfig,
    model: Arc<dyn LanguageModel>,
    insight_config: InsightConfig,
    config: PipelineConfig,
}

struct ScoredCandidate {
    book: BookRecord,
    score: f32,
}

impl Recommender {
    pub fn new(
        catalog: Arc<dyn BookCatalog>,
        catalog_config: CatalogConfig,
        model: Arc<dyn LanguageModel>,
        insight_config: InsightConfig,
        config: PipelineConfig,
    ) -> Self {
        Self {
            catalog,
            catalog_config,
            model,
            insight_config,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full pipeline for one query.
    ///
    /// `diversify` overrides the configured default when set.
    pub async fn recommend(
        &self,
        title: &str,
        author: Option<&str>,
        diversify: Option<bool>,
    ) -> Outcome {
        let deadline = self.config.call_deadline();
        let deny = &self.catalog_config.title_deny_list;

        // Stage 1: look up the original work.
        let hits = bounded(
            deadline,
            Vec::new(),
            self.catalog
                .search_title_author(title, author, self.config.lookup_limit),
        )
        .await;
        let hits = retain_original_works(hits, deny);
        let Some(original_doc) = hits.into_iter().next() else {
            tracing::info!(title, "no catalog match for title");
            return Outcome::NotFound;
        };
        let original_key = original_doc.key.clone();

        // Stage 2: fetch and validate the description.
        let description = match original_key.as_deref() {
            Some(key) => {
                bounded(deadline, String::new(), self.catalog.fetch_description(key)).await
            }
            None => String::new(),
        };
        let description = description.trim().to_string();
        if description.chars().count() < self.config.min_description_len {
            tracing::info!(title, "description missing or too short");
            return Outcome::NoDescription;
        }

        let mut original = normalize_doc(original_doc, &self.catalog_config.covers_url);
        original.description = description.clone();

        // Stage 3: extract and cap theme keywords.
        let keywords: Vec<String> = bounded(
            deadline,
            Vec::new(),
            extract_keywords(self.model.as_ref(), &description, &self.insight_config),
        )
        .await
        .into_iter()
        .take(self.config.keyword_cap)
        .collect();
        tracing::debug!(title, keyword_count = keywords.len(), "keywords extracted");

        // Stage 4: fan out one candidate search per keyword.
        let candidates = self
            .gather_candidates(&keywords, original_key.as_deref(), diversify, deadline)
            .await;

        // Stage 5: fetch candidate descriptions and score them.
        let scored = self.score_candidates(&description, candidates, deadline).await;

        // Stage 6: threshold, sort, truncate.
        let ranked = rank_by_score(
            scored,
            |c| c.score,
            self.config.similarity.min_score,
            self.config.similarity.top_n,
        );

        // Stage 7: explain the survivors.
        let results = self.explain_all(&original, ranked, deadline).await;

        Outcome::Success {
            original,
            keywords,
            results,
        }
    }

    async fn gather_candidates(
        &self,
        keywords: &[String],
        original_key: Option<&str>,
        diversify: Option<bool>,
        deadline: Duration,
    ) -> Vec<catalog::SearchDoc> {
        let searches = keywords.iter().map(|keyword| {
            let catalog = Arc::clone(&self.catalog);
            let keyword = keyword.clone();
            let limit = self.config.keyword_search_limit;
            async move {
                bounded(
                    deadline,
                    Vec::new(),
                    catalog.search_keyword(&keyword, limit),
                )
                .await
            }
        });
        let batches = join_all(searches).await;

        // Merge, dedupe by catalog key, and drop the original itself.
        // Candidates without a key cannot be described or deduplicated, so
        // they are dropped here too.
        let mut seen = HashSet::new();
        let mut pool = Vec::new();
        for doc in batches.into_iter().flatten() {
            let Some(key) = doc.key.clone() else { continue };
            if Some(key.as_str()) == original_key {
                continue;
            }
            if !seen.insert(key) {
                continue;
            }
            pool.push(doc);
        }
        let pool = retain_original_works(pool, &self.catalog_config.title_deny_list);

        if diversify.unwrap_or(self.config.diversify) {
            let current_year = chrono::Utc::now().year();
            diversify_by_era(
                pool,
                |doc| doc.first_publish_year,
                current_year,
                &self.config.similarity.era_caps,
            )
        } else {
            pool
        }
    }

    async fn score_candidates(
        &self,
        original_description: &str,
        candidates: Vec<catalog::SearchDoc>,
        deadline: Duration,
    ) -> Vec<ScoredCandidate> {
        let original_vector = encode(original_description, &self.config.lexical);

        let fetches = candidates.into_iter().map(|doc| {
            let catalog = Arc::clone(&self.catalog);
            async move {
                let key = doc.key.clone().unwrap_or_default();
                let description =
                    bounded(deadline, String::new(), catalog.fetch_description(&key)).await;
                (doc, description)
            }
        });
        let described = join_all(fetches).await;

        described
            .into_iter()
            .map(|(doc, candidate_description)| {
                let vector = encode(&candidate_description, &self.config.lexical);
                // Equal lengths by construction; a mismatch is still scored
                // soft as zero rather than aborting the batch.
                let score = match cosine_similarity(&original_vector, &vector) {
                    Ok(score) => score,
                    Err(err) => {
                        tracing::warn!(error = %err, "candidate scoring failed, using zero");
                        0.0
                    }
                };
                let mut book = normalize_doc(doc, &self.catalog_config.covers_url);
                let candidate_description = candidate_description.trim();
                if !candidate_description.is_empty() {
                    book.description = candidate_description.to_string();
                }
                ScoredCandidate { book, score }
            })
            .collect()
    }

    async fn explain_all(
        &self,
        original: &BookRecord,
        ranked: Vec<ScoredCandidate>,
        deadline: Duration,
    ) -> Vec<Recommendation> {
        let explanations = ranked.into_iter().map(|candidate| {
            let model = Arc::clone(&self.model);
            let insight_config = self.insight_config.clone();
            let original_title = original.title.clone();
            let original_description = original.description.clone();
            async move {
                let explanation = bounded(
                    deadline,
                    insight::FALLBACK_EXPLANATION.to_string(),
                    generate_explanation(
                        model.as_ref(),
                        &original_title,
                        &original_description,
                        &candidate.book.title,
                        &candidate.book.description,
                        &insight_config,
                    ),
                )
                .await;
                Recommendation {
                    book: candidate.book,
                    score: candidate.score,
                    explanation,
                }
            }
        });
        join_all(explanations).await
    }
}

/// Run `fut` under `deadline`, substituting `default` if it expires.
async fn bounded<T>(deadline: Duration, default: T, fut: impl Future<Output = T>) -> T {
    match tokio::time::timeout(deadline, fut).await {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                deadline_ms = deadline.as_millis() as u64,
                "outbound call exceeded deadline, using default"
            );
            default
        }
    }
}
