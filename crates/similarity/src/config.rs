use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;

/// Per-era candidate caps used by diversity sampling.
///
/// The caps bound how many keyword-search hits from each publish era survive
/// into scoring, so a pool of thirty recent bestsellers cannot crowd out
/// everything older.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EraCaps {
    #[serde(default = "EraCaps::default_recent")]
    pub recent: usize,
    #[serde(default = "EraCaps::default_modern")]
    pub modern: usize,
    #[serde(default = "EraCaps::default_classic")]
    pub classic: usize,
    #[serde(default = "EraCaps::default_vintage")]
    pub vintage: usize,
    #[serde(default = "EraCaps::default_unknown")]
    pub unknown: usize,
}

impl EraCaps {
    pub(crate) fn default_recent() -> usize {
        10
    }

    pub(crate) fn default_modern() -> usize {
        10
    }

    pub(crate) fn default_classic() -> usize {
        5
    }

    pub(crate) fn default_vintage() -> usize {
        3
    }

    pub(crate) fn default_unknown() -> usize {
        2
    }

    /// Upper bound on the pool size after sampling.
    pub fn total(&self) -> usize {
        self.recent + self.modern + self.classic + self.vintage + self.unknown
    }
}

impl Default for EraCaps {
    fn default() -> Self {
        Self {
            recent: Self::default_recent(),
            modern: Self::default_modern(),
            classic: Self::default_classic(),
            vintage: Self::default_vintage(),
            unknown: Self::default_unknown(),
        }
    }
}

/// Configuration for ranking and filtering scored candidates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityConfig {
    /// Candidates must score strictly above this to survive ranking.
    /// A fixed literal with no documented derivation; kept configurable.
    #[serde(default = "SimilarityConfig::default_min_score")]
    pub min_score: f32,
    /// Number of ranked candidates that get explanations. Each explanation is
    /// one extra hosted-model call, so this bounds latency and cost.
    #[serde(default = "SimilarityConfig::default_top_n")]
    pub top_n: usize,
    /// Per-era caps for diversity sampling.
    #[serde(default)]
    pub era_caps: EraCaps,
}

impl SimilarityConfig {
    pub(crate) fn default_min_score() -> f32 {
        0.3
    }

    pub(crate) fn default_top_n() -> usize {
        3
    }

    /// Validate the configuration for a single request.
    pub fn validate(&self) -> Result<(), SimilarityError> {
        if !(-1.0..=1.0).contains(&self.min_score) {
            return Err(SimilarityError::InvalidConfig(
                "min_score must be within [-1.0, 1.0]".into(),
            ));
        }
        if self.top_n == 0 {
            return Err(SimilarityError::InvalidConfig(
                "top_n must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            min_score: Self::default_min_score(),
            top_n: Self::default_top_n(),
            era_caps: EraCaps::default(),
        }
    }
}
