//! Chat-completion HTTP client.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::InsightConfig;
use crate::error::InsightError;
use crate::LanguageModel;

/// Client for an OpenAI-style `/chat/completions` endpoint.
pub struct ChatCompletionClient {
    http: reqwest::Client,
    config: InsightConfig,
}

impl ChatCompletionClient {
    /// Build a client from configuration.
    pub fn new(config: InsightConfig) -> Result<Self, InsightError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    async fn send(&self, payload: Value) -> Result<Value, InsightError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| InsightError::InvalidConfig("api_key is not set".into()))?;

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::Status { status, body });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| InsightError::Malformed(format!("invalid JSON body: {e}")))
    }
}

#[async_trait]
impl LanguageModel for ChatCompletionClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, InsightError> {
        let payload = build_payload(&self.config.model, system, user, temperature, max_tokens);
        let response = self.send(payload).await?;
        content_from_response(&response)
    }
}

/// Assemble the chat-completion request body.
pub(crate) fn build_payload(
    model: &str,
    system: &str,
    user: &str,
    temperature: f32,
    max_tokens: u32,
) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": system },
            { "role": "user", "content": user },
        ],
        "temperature": temperature,
        "max_tokens": max_tokens,
    })
}

/// Pull `choices[0].message.content` out of a completion response.
pub(crate) fn content_from_response(response: &Value) -> Result<String, InsightError> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| InsightError::Malformed("response has no message content".into()))
}
