use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Open Library client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Search/work-detail API root.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Cover-image CDN root.
    #[serde(default = "default_covers_url")]
    pub covers_url: String,

    /// Overall per-request deadline in seconds. A stalled upstream call is
    /// cut here and degrades to the soft default like any other failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// TCP connect deadline in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Default `limit` for search requests.
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Lower-cased substrings that mark a title as derivative material
    /// (study guides and the like). Fixed literals with no documented
    /// derivation; kept configurable.
    #[serde(default = "default_deny_list")]
    pub title_deny_list: Vec<String>,
}

impl CatalogConfig {
    /// Overall request deadline as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect deadline as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            covers_url: default_covers_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            search_limit: default_search_limit(),
            title_deny_list: default_deny_list(),
        }
    }
}

fn default_base_url() -> String {
    "https://openlibrary.org".to_string()
}

fn default_covers_url() -> String {
    "https://covers.openlibrary.org".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_search_limit() -> usize {
    10
}

fn default_deny_list() -> Vec<String> {
    [
        "study guide",
        "companion",
        "analysis",
        "summary",
        "cliff notes",
        "sparknotes",
        "workbook",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = CatalogConfig::default();
        assert_eq!(cfg.base_url, "https://openlibrary.org");
        assert_eq!(cfg.covers_url, "https://covers.openlibrary.org");
        assert_eq!(cfg.timeout(), Duration::from_secs(10));
        assert_eq!(cfg.connect_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.search_limit, 10);
        assert_eq!(cfg.title_deny_list.len(), 7);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: CatalogConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, CatalogConfig::default());
    }

    #[test]
    fn base_url_override_survives_roundtrip() {
        let cfg = CatalogConfig {
            base_url: "http://127.0.0.1:9000".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed: CatalogConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.base_url, "http://127.0.0.1:9000");
    }
}
