//! Chat assistant: one professional-assistant turn at a time.
//!
//! Each turn sends only the latest message. Displayed history never goes
//! back to the provider.

use plume_llm::{Error, PromptRequest, Provider, Result};

/// Fixed advisory instruction for every chat turn.
pub const SYSTEM_INSTRUCTION: &str = "You are an AI assistant designed to provide professional, \
accurate information. Your responses should be formal, concise, and helpful, free from bias and \
ambiguity, and always grammatically correct.";

/// Send one chat turn and return the assistant's raw reply.
pub async fn run(provider: &dyn Provider, message: &str) -> Result<String> {
    if message.trim().is_empty() {
        return Err(Error::InvalidInput("message is empty".to_string()));
    }

    let request = PromptRequest::new(message).with_system_instruction(SYSTEM_INSTRUCTION);
    provider.generate(&request).await
}
