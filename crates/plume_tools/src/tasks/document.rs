//! Document summarizer: plain-text and markdown files.

use plume_llm::{Error, PromptRequest, Provider, Result};

/// Maximum characters of document text embedded into the prompt.
pub const CONTENT_LIMIT: usize = 8000;

/// Build the summarization prompt for a document.
pub fn prompt(name: &str, content: &str) -> String {
    let truncated: String = content.chars().take(CONTENT_LIMIT).collect();
    format!(
        "You are an assistant that produces concise, faithful summaries of documents.\n\n\
         Document: \"{name}\"\n\n\
         Summarize the following content in markdown, covering the key points and main \
         conclusions:\n\n\
         {truncated}"
    )
}

/// Summarize one document's text content.
pub async fn run(provider: &dyn Provider, name: &str, content: &str) -> Result<String> {
    if content.trim().is_empty() {
        return Err(Error::InvalidInput("document is empty".to_string()));
    }

    provider
        .generate(&PromptRequest::new(prompt(name, content)))
        .await
}
