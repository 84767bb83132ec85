use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the hosted chat-completion client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightConfig {
    /// Chat-completions endpoint (OpenAI wire shape).
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token. Usually injected from the `GROQ_API_KEY` environment
    /// variable; requests without a key fail (softly) at call time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature for keyword extraction. Low but non-zero, so
    /// output is not reproducible across identical inputs.
    #[serde(default = "default_keyword_temperature")]
    pub keyword_temperature: f32,

    /// Sampling temperature for explanation generation.
    #[serde(default = "default_explain_temperature")]
    pub explain_temperature: f32,

    /// Token cap per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Overall per-request deadline in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl InsightConfig {
    /// Request deadline as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            model: default_model(),
            keyword_temperature: default_keyword_temperature(),
            explain_temperature: default_explain_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_keyword_temperature() -> f32 {
    0.3
}

fn default_explain_temperature() -> f32 {
    0.5
}

fn default_max_tokens() -> u32 {
    100
}

fn default_timeout_secs() -> u64 {
    15
}
