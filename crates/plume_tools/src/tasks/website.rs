//! Website summarizer: fetch a page, strip it to text, summarize in markdown.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use plume_llm::{Error, PromptRequest, Provider, Result};

/// Fixed advisory instruction for the summarizer.
pub const SYSTEM_INSTRUCTION: &str = "You are an assistant that summarizes website content, \
focusing on key information while ignoring navigation elements. Respond in markdown format.";

/// Maximum characters of page text embedded into the prompt.
pub const CONTENT_LIMIT: usize = 8000;

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());
static SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script.*?</script>").unwrap());
static STYLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<style.*?</style>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]+>").unwrap());

/// Require an explicit http/https URL before any network call.
pub fn validate_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(Error::InvalidInput(
            "URL must start with http:// or https://".to_string(),
        ))
    }
}

/// Page title, when the markup carries one.
pub fn extract_title(html: &str) -> Option<String> {
    TITLE
        .captures(html)
        .map(|c| c[1].split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|t| !t.is_empty())
}

/// Naive tag strip: drop script/style bodies, drop tags, collapse whitespace.
pub fn strip_tags(html: &str) -> String {
    let text = SCRIPT.replace_all(html, " ");
    let text = STYLE.replace_all(&text, " ");
    let text = TAG.replace_all(&text, " ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build the summarization prompt from extracted page text.
pub fn prompt(title: &str, text: &str) -> String {
    let truncated: String = text.chars().take(CONTENT_LIMIT).collect();
    format!(
        "You are looking at this website titled: {title}\n\n\
         The contents of this website are as follows. Please provide a short summary in \
         markdown. If it includes news or announcements, summarize these too.\n\n\
         {truncated}"
    )
}

/// Fetch and summarize one page.
pub async fn run(provider: &dyn Provider, url: &str) -> Result<String> {
    validate_url(url)?;

    debug!(target: "plume_tools", %url, "fetching page for summarization");

    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::RequestFailed {
            status: status.as_u16(),
            body: format!("fetching {url}"),
        });
    }

    let html = response.text().await?;
    let title = extract_title(&html).unwrap_or_else(|| url.to_string());
    let text = strip_tags(&html);
    if text.is_empty() {
        return Err(Error::InvalidInput(
            "no readable content at that URL".to_string(),
        ));
    }

    let request =
        PromptRequest::new(prompt(&title, &text)).with_system_instruction(SYSTEM_INSTRUCTION);
    provider.generate(&request).await
}
