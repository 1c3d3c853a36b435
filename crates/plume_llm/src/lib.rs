//! plume_llm — request envelope and call paths for the generative-language API.
//!
//! Two interchangeable call paths implement [`Provider`]:
//!
//! - [`GeminiProvider`] posts the envelope straight to the provider with the
//!   API key as a query parameter.
//! - [`RelayProvider`] posts the bare prompt to a relay endpoint that holds
//!   the key server-side and forwards the same envelope.
//!
//! Every call is stateless: one text segment in, one text reply out. No
//! conversation history is ever carried in an envelope.

pub mod envelope;
pub mod error;
pub mod provider;
pub mod providers;
pub mod types;

#[cfg(test)]
mod tests;

pub use envelope::{PromptRequest, build_envelope};
pub use error::{Error, Result};
pub use provider::Provider;
pub use providers::{GeminiConfig, GeminiProvider, RelayConfig, RelayProvider};
pub use types::{GenerateContentRequest, GenerateContentResponse};
