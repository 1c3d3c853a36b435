//! Wire types for the generative-language API.
//!
//! Field names follow the provider's camelCase JSON; variant order and
//! constants mirror the `generateContent` contract.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One text segment of a content item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Sampling parameters, fixed per request by the envelope builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

/// Harm categories the provider filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

impl HarmCategory {
    /// All four filtered categories, in envelope order.
    pub const ALL: [HarmCategory; 4] = [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ];
}

/// Per-category blocking threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: String,
}

impl SafetySetting {
    pub const BLOCK_MEDIUM_AND_ABOVE: &'static str = "BLOCK_MEDIUM_AND_ABOVE";

    /// The fixed set used for every request: all categories at
    /// block-medium-and-above.
    pub fn defaults() -> Vec<SafetySetting> {
        HarmCategory::ALL
            .iter()
            .map(|&category| SafetySetting {
                category,
                threshold: Self::BLOCK_MEDIUM_AND_ABOVE.to_string(),
            })
            .collect()
    }
}

/// The request envelope posted to `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    pub safety_settings: Vec<SafetySetting>,
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// First candidate → content → first part → text.
    ///
    /// Anything missing along that path is a malformed response.
    pub fn extract_text(self) -> Result<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| Error::MalformedResponse("no candidate text in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_serializes_camel_case() {
        let config = GenerationConfig {
            temperature: 0.9,
            top_k: 1,
            top_p: 1.0,
            max_output_tokens: 8192,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["topK"], 1);
        assert_eq!(json["topP"], 1.0);
        assert_eq!(json["maxOutputTokens"], 8192);
    }

    #[test]
    fn test_safety_defaults_cover_all_categories() {
        let settings = SafetySetting::defaults();
        assert_eq!(settings.len(), 4);
        assert!(settings
            .iter()
            .all(|s| s.threshold == SafetySetting::BLOCK_MEDIUM_AND_ABOVE));

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json[0]["category"], "HARM_CATEGORY_HARASSMENT");
        assert_eq!(json[3]["category"], "HARM_CATEGORY_DANGEROUS_CONTENT");
    }

    #[test]
    fn test_extract_text() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "hello" } ] } }
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.extract_text().unwrap(), "hello");
    }

    #[test]
    fn test_extract_text_missing_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            response.extract_text(),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_extract_text_empty_parts() {
        let body = r#"{ "candidates": [ { "content": { "parts": [] } } ] }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert!(response.extract_text().is_err());
    }
}
