//! Direct call path: the envelope goes straight to the provider, API key as
//! a query parameter.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::envelope::{PromptRequest, build_envelope};
use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::types::GenerateContentResponse;

/// Configuration for the direct provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Base URL (default: https://generativelanguage.googleapis.com/v1beta)
    pub base_url: String,
    /// Model name (default: gemini-2.5-flash)
    pub model: String,
}

impl GeminiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    pub const DEFAULT_MODEL: &'static str = "gemini-2.5-flash";

    /// Create new config with API key and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Direct provider.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Environment variable for the API key.
    pub const API_KEY_ENV: &'static str = "GEMINI_API_KEY";

    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey("gemini".to_string()));
        }

        Ok(Self {
            config,
            client: Client::new(),
        })
    }

    /// Create provider from environment.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(Self::API_KEY_ENV)
            .map_err(|_| Error::MissingApiKey("gemini".to_string()))?;

        Self::new(GeminiConfig::new(api_key))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn provider_id(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &PromptRequest) -> Result<String> {
        let envelope = build_envelope(request)?;
        let url = self.endpoint();

        debug!(
            target: "plume_llm",
            model = %self.config.model,
            prompt_chars = request.task_text.len(),
            "dispatching generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&envelope)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(target: "plume_llm", status = status.as_u16(), "generateContent failed");
            return Err(Error::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;
        parsed.extract_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GeminiConfig::new("key");
        assert_eq!(config.base_url, GeminiConfig::DEFAULT_BASE_URL);
        assert_eq!(config.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = GeminiConfig::new("key").with_base_url("http://localhost:9000/");
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_endpoint_shape() {
        let provider = GeminiProvider::new(
            GeminiConfig::new("key")
                .with_base_url("http://localhost:9000")
                .with_model("gemini-2.5-flash"),
        )
        .unwrap();
        assert_eq!(
            provider.endpoint(),
            "http://localhost:9000/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            GeminiProvider::new(GeminiConfig::new("")),
            Err(Error::MissingApiKey(_))
        ));
    }
}
