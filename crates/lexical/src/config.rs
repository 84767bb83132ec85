use serde::{Deserialize, Serialize};

/// Theme and genre words checked by the keyword-flag dimensions.
///
/// The list (and the 384-dimension width) reproduces the constants the
/// scoring was tuned against; both are plain configuration with no deeper
/// meaning, but changing them changes every score.
pub const DEFAULT_KEYWORDS: [&str; 26] = [
    "fantasy",
    "adventure",
    "magic",
    "mystery",
    "romance",
    "thriller",
    "science",
    "fiction",
    "horror",
    "drama",
    "comedy",
    "war",
    "historical",
    "contemporary",
    "young",
    "adult",
    "children",
    "family",
    "friendship",
    "love",
    "death",
    "hero",
    "villain",
    "quest",
    "journey",
    "discovery",
];

/// Default vector width. Dimensions past the letter counts and keyword flags
/// stay zero; the width matches a common embedding size so stored vectors
/// keep a stable length contract.
pub const DEFAULT_DIMENSIONS: usize = 384;

/// Runtime configuration for the lexical encoder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexicalConfig {
    /// Total vector length. Must be at least `26 + keywords.len()`.
    #[serde(default = "default_dimensions")]
    pub dimensions: usize,
    /// Keyword strings mapped to presence-flag dimensions starting at 26.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

impl Default for LexicalConfig {
    fn default() -> Self {
        Self {
            dimensions: default_dimensions(),
            keywords: default_keywords(),
        }
    }
}

impl LexicalConfig {
    /// Check that every keyword flag fits inside the configured width.
    pub fn validate(&self) -> Result<(), String> {
        let needed = 26 + self.keywords.len();
        if self.dimensions < needed {
            return Err(format!(
                "dimensions must be >= {needed} to fit letter counts and {} keywords, got {}",
                self.keywords.len(),
                self.dimensions
            ));
        }
        Ok(())
    }
}

fn default_dimensions() -> usize {
    DEFAULT_DIMENSIONS
}

fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}
