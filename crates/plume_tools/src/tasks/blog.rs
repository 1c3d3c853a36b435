//! Blog writer: title + keywords + target length into one structured brief.

use plume_llm::{Error, PromptRequest, Provider, Result};

/// What the user asked for.
#[derive(Debug, Clone)]
pub struct BlogBrief {
    pub title: String,
    pub keywords: String,
    pub word_count: u32,
}

impl BlogBrief {
    pub fn new(title: impl Into<String>, keywords: impl Into<String>, word_count: u32) -> Self {
        Self {
            title: title.into(),
            keywords: keywords.into(),
            word_count,
        }
    }
}

/// Build the drafting prompt for a brief.
pub fn prompt(brief: &BlogBrief) -> String {
    format!(
        "Generate a comprehensive, well-structured, and engaging blog post.\n\
         **Title:** \"{}\"\n\
         **Keywords:** \"{}\" (Integrate these naturally throughout the content)\n\
         **Tone:** Professional yet accessible, suitable for a broad audience.\n\
         **Structure:** Include a captivating introduction, informative body paragraphs with \
         clear headings/subheadings, and a concise conclusion (with a call to action if \
         appropriate).\n\
         **Word Count:** Approximately {} words.",
        brief.title, brief.keywords, brief.word_count
    )
}

/// Draft a post. Both title and keywords are required.
pub async fn run(provider: &dyn Provider, brief: &BlogBrief) -> Result<String> {
    if brief.title.trim().is_empty() || brief.keywords.trim().is_empty() {
        return Err(Error::InvalidInput(
            "both a blog title and keywords are required".to_string(),
        ));
    }

    provider.generate(&PromptRequest::new(prompt(brief))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testutil::ScriptedProvider;

    #[test]
    fn test_prompt_embeds_brief() {
        let text = prompt(&BlogBrief::new("Rust in Prod", "safety, speed", 800));
        assert!(text.contains("**Title:** \"Rust in Prod\""));
        assert!(text.contains("**Keywords:** \"safety, speed\""));
        assert!(text.contains("Approximately 800 words."));
    }

    #[tokio::test]
    async fn test_run_has_no_system_instruction() {
        let provider = ScriptedProvider::new(vec!["draft".to_string()]);
        run(&provider, &BlogBrief::new("T", "k", 500)).await.unwrap();

        let seen = provider.seen();
        assert!(seen[0].system_instruction.is_none());
    }

    #[tokio::test]
    async fn test_missing_title_or_keywords_rejected() {
        let provider = ScriptedProvider::new(vec![]);

        let err = run(&provider, &BlogBrief::new("", "k", 500)).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = run(&provider, &BlogBrief::new("T", "  ", 500)).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        assert!(provider.seen().is_empty());
    }
}
