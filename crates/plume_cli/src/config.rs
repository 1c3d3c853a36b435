//! Call-path selection: relay when a relay URL is configured, direct when an
//! API key is, error otherwise. CLI flags override environment.

use plume_llm::{GeminiConfig, GeminiProvider, Provider, RelayProvider};

/// Environment variable overriding the direct-path model.
pub const MODEL_ENV: &str = "PLUME_MODEL";

/// Which call path a configuration resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPath {
    Relay,
    Direct,
}

impl CallPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallPath::Relay => "relay",
            CallPath::Direct => "gemini",
        }
    }
}

/// Status of both call paths, for the `providers` listing.
pub struct PathStatus {
    pub relay_configured: bool,
    pub direct_configured: bool,
}

pub fn path_status() -> PathStatus {
    PathStatus {
        relay_configured: std::env::var(RelayProvider::RELAY_URL_ENV).is_ok(),
        direct_configured: std::env::var(GeminiProvider::API_KEY_ENV).is_ok(),
    }
}

/// The call path the current environment selects, if any.
pub fn active_path() -> Option<CallPath> {
    let status = path_status();
    if status.relay_configured {
        Some(CallPath::Relay)
    } else if status.direct_configured {
        Some(CallPath::Direct)
    } else {
        None
    }
}

/// Build the provider for the active call path.
///
/// The relay path wins when both are configured — it keeps key material off
/// this machine. `model` (from the CLI flag) overrides `PLUME_MODEL`.
pub fn select_provider(model: Option<&str>) -> anyhow::Result<Box<dyn Provider>> {
    match active_path() {
        Some(CallPath::Relay) => Ok(Box::new(RelayProvider::from_env()?)),
        Some(CallPath::Direct) => {
            let api_key = std::env::var(GeminiProvider::API_KEY_ENV)?;
            let mut config = GeminiConfig::new(api_key);
            let model = model
                .map(str::to_string)
                .or_else(|| std::env::var(MODEL_ENV).ok());
            if let Some(model) = model {
                config = config.with_model(model);
            }
            Ok(Box::new(GeminiProvider::new(config)?))
        }
        None => anyhow::bail!(
            "no call path configured: set {} for the direct path or {} for the relay path",
            GeminiProvider::API_KEY_ENV,
            RelayProvider::RELAY_URL_ENV
        ),
    }
}
