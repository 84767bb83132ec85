use bookmatch::{CatalogConfig, InsightConfig, PipelineConfig};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level / filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Open Library client settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Hosted-model client settings
    #[serde(default)]
    pub insight: InsightConfig,

    /// Recommendation pipeline knobs
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            catalog: CatalogConfig::default(),
            insight: InsightConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("bookmatch").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("BOOKMATCH").separator("__"));

        let mut config: ServerConfig = builder.build()?.try_deserialize()?;

        // The original deployment read the model key from GROQ_API_KEY;
        // honor it when the structured config leaves the key unset.
        if config.insight.api_key.is_none() {
            match std::env::var("GROQ_API_KEY") {
                Ok(key) if !key.trim().is_empty() => config.insight.api_key = Some(key),
                _ => tracing::warn!(
                    "no model API key configured; keyword extraction will degrade to empty results"
                ),
            }
        }

        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.enable_cors);
        assert_eq!(cfg.catalog.base_url, "https://openlibrary.org");
        assert_eq!(cfg.pipeline.keyword_cap, 5);
        assert!(cfg.insight.api_key.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn nested_sections_deserialize() {
        let json = serde_json::json!({
            "port": 9999,
            "catalog": { "search_limit": 5 },
            "pipeline": { "diversify": false }
        });
        let cfg: ServerConfig = serde_json::from_value(json).unwrap();
        assert_eq!(cfg.port, 9999);
        assert_eq!(cfg.catalog.search_limit, 5);
        assert!(!cfg.pipeline.diversify);
        // Untouched sections keep their defaults.
        assert_eq!(cfg.pipeline.keyword_cap, 5);
    }
}
