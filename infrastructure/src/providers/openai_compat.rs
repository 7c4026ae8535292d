//! OpenAI-compatible completion gateway.
//!
//! Implements [`CompletionGateway`] over any Chat Completions endpoint
//! (OpenAI, Azure, local servers). The middleware issues one non-streaming
//! request per resolution and reads `choices[0].message.content`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use toolweave_application::ports::completion_gateway::{CompletionGateway, GatewayError};
use toolweave_domain::Message;

/// Configuration for the OpenAI-compatible gateway.
#[derive(Clone)]
pub struct OpenAiCompatConfig {
    /// API key sent as a bearer token. `None` skips the auth header, for
    /// local servers that don't check it.
    pub api_key: Option<String>,
    /// Base URL for the API. Override for proxies or local servers.
    pub base_url: String,
    /// Request timeout. `None` uses reqwest's default.
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for OpenAiCompatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for OpenAiCompatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".into(),
            timeout: Some(Duration::from_secs(60)),
        }
    }
}

/// Completion gateway over an OpenAI-compatible Chat Completions API.
#[derive(Debug)]
pub struct OpenAiCompatGateway {
    config: OpenAiCompatConfig,
    client: reqwest::Client,
}

impl OpenAiCompatGateway {
    pub fn new(config: OpenAiCompatConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_default();
        Self { config, client }
    }

    fn completions_url(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{base}/chat/completions")
    }

    fn headers(&self) -> Result<HeaderMap, GatewayError> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        if let Some(key) = &self.config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {key}")).map_err(|_| {
                GatewayError::RequestFailed("API key contains invalid header characters".into())
            })?;
            headers.insert("authorization", value);
        }
        Ok(headers)
    }
}

/// Pull the response text out of a Chat Completions body.
fn extract_content(body: &serde_json::Value) -> Result<String, GatewayError> {
    body.pointer("/choices/0/message/content")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            GatewayError::MalformedResponse(
                "response has no choices[0].message.content text".into(),
            )
        })
}

#[async_trait]
impl CompletionGateway for OpenAiCompatGateway {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String, GatewayError> {
        let body = serde_json::json!({
            "model": model,
            "messages": messages,
            "stream": false,
        });

        debug!(model, url = %self.completions_url(), "Sending completion request");

        let response = self
            .client
            .post(self.completions_url())
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else if e.is_connect() {
                    GatewayError::ConnectionError(e.to_string())
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::ModelNotAvailable(model.to_string()));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!("{status}: {text}")));
        }

        let parsed: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
        extract_content(&parsed)
    }
}
