//! Envelope construction: one prompt in, one provider request out.

use crate::error::{Error, Result};
use crate::types::{
    Content, GenerateContentRequest, GenerationConfig, Part, SafetySetting,
};

/// Fixed sampling parameters for every request.
pub const TEMPERATURE: f32 = 0.9;
pub const TOP_K: u32 = 1;
pub const TOP_P: f32 = 1.0;
pub const MAX_OUTPUT_TOKENS: u32 = 8192;

/// A task prompt plus an optional fixed advisory instruction.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub task_text: String,
    pub system_instruction: Option<String>,
}

impl PromptRequest {
    pub fn new(task_text: impl Into<String>) -> Self {
        Self {
            task_text: task_text.into(),
            system_instruction: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// The single text segment sent to the provider: instruction and task
    /// joined by a blank line, or the task alone.
    pub fn flatten(&self) -> String {
        match &self.system_instruction {
            Some(instruction) => format!("{}\n\n{}", instruction, self.task_text),
            None => self.task_text.clone(),
        }
    }
}

/// Build the provider envelope for a prompt.
///
/// Exactly one content with exactly one text part; fixed generation
/// parameters and safety thresholds. Rejects whitespace-only task text —
/// callers surface that as a warning before any network call.
pub fn build_envelope(request: &PromptRequest) -> Result<GenerateContentRequest> {
    if request.task_text.trim().is_empty() {
        return Err(Error::InvalidInput("task text is empty".to_string()));
    }

    Ok(GenerateContentRequest {
        contents: vec![Content {
            role: None,
            parts: vec![Part {
                text: request.flatten(),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        },
        safety_settings: SafetySetting::defaults(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_single_text_segment() {
        let request = PromptRequest::new("explain lifetimes");
        let envelope = build_envelope(&request).unwrap();

        assert_eq!(envelope.contents.len(), 1);
        assert_eq!(envelope.contents[0].parts.len(), 1);
        assert_eq!(envelope.contents[0].parts[0].text, "explain lifetimes");
    }

    #[test]
    fn test_envelope_joins_system_instruction() {
        let request =
            PromptRequest::new("explain lifetimes").with_system_instruction("Be concise.");
        let envelope = build_envelope(&request).unwrap();

        assert_eq!(
            envelope.contents[0].parts[0].text,
            "Be concise.\n\nexplain lifetimes"
        );
    }

    #[test]
    fn test_envelope_fixed_parameters() {
        let envelope = build_envelope(&PromptRequest::new("hi")).unwrap();
        let config = &envelope.generation_config;

        assert_eq!(config.temperature, 0.9);
        assert_eq!(config.top_k, 1);
        assert_eq!(config.top_p, 1.0);
        assert_eq!(config.max_output_tokens, 8192);
        assert_eq!(envelope.safety_settings.len(), 4);
    }

    #[test]
    fn test_envelope_rejects_empty_task() {
        assert!(matches!(
            build_envelope(&PromptRequest::new("")),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            build_envelope(&PromptRequest::new("   ")),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_envelope_deterministic() {
        let request = PromptRequest::new("same input").with_system_instruction("same system");
        let a = serde_json::to_string(&build_envelope(&request).unwrap()).unwrap();
        let b = serde_json::to_string(&build_envelope(&request).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
