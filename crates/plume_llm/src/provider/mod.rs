//! Provider trait: one prompt in, one text reply out.

use async_trait::async_trait;

use crate::envelope::PromptRequest;
use crate::error::Result;

/// A call path to the generative-language API.
///
/// Implementations are stateless between calls; each request is
/// self-contained and carries no conversation history.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Short identifier for logs and the `providers` listing.
    fn provider_id(&self) -> &str;

    /// Send one prompt and return the raw reply text.
    async fn generate(&self, request: &PromptRequest) -> Result<String>;
}
