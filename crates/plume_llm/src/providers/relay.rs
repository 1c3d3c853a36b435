//! Relay call path: the bare prompt goes to a pass-through endpoint that
//! holds the API key server-side and forwards the envelope itself.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::envelope::PromptRequest;
use crate::error::{Error, Result};
use crate::provider::Provider;

/// Configuration for the relay provider.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Full URL of the relay endpoint.
    pub url: String,
}

impl RelayConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Request body accepted by the relay.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RelayRequest<'a> {
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<&'a str>,
}

/// Response body returned by the relay.
#[derive(Debug, Deserialize)]
struct RelayResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Relay provider. No key material lives on this side.
pub struct RelayProvider {
    config: RelayConfig,
    client: Client,
}

impl RelayProvider {
    /// Environment variable for the relay URL.
    pub const RELAY_URL_ENV: &'static str = "PLUME_RELAY_URL";

    pub fn new(config: RelayConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(Error::InvalidInput("relay URL is empty".to_string()));
        }

        Ok(Self {
            config,
            client: Client::new(),
        })
    }

    /// Create provider from environment.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(Self::RELAY_URL_ENV)
            .map_err(|_| Error::InvalidInput("PLUME_RELAY_URL is not set".to_string()))?;

        Self::new(RelayConfig::new(url))
    }
}

#[async_trait]
impl Provider for RelayProvider {
    fn provider_id(&self) -> &str {
        "relay"
    }

    async fn generate(&self, request: &PromptRequest) -> Result<String> {
        if request.task_text.trim().is_empty() {
            return Err(Error::InvalidInput("task text is empty".to_string()));
        }

        debug!(
            target: "plume_llm",
            url = %self.config.url,
            prompt_chars = request.task_text.len(),
            "dispatching relay request"
        );

        let body = RelayRequest {
            prompt: &request.task_text,
            system_instruction: request.system_instruction.as_deref(),
        };

        let response = self.client.post(&self.config.url).json(&body).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // The relay reports failures as {error, success:false} with a
            // 4xx/5xx status; surface its message when one is present.
            let message = serde_json::from_str::<RelayResponse>(&text)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(text);
            warn!(target: "plume_llm", status = status.as_u16(), "relay request failed");
            return Err(Error::RequestFailed {
                status: status.as_u16(),
                body: message,
            });
        }

        let parsed: RelayResponse = serde_json::from_str(&text)
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;

        match (parsed.success, parsed.response) {
            (true, Some(reply)) => Ok(reply),
            _ => Err(Error::MalformedResponse(
                parsed
                    .error
                    .unwrap_or_else(|| "relay reply missing response field".to_string()),
            )),
        }
    }
}
