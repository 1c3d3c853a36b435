//! CSV Q&A: headers plus a truncated raw sample, then the user's question.

use plume_core::TabularPreview;
use plume_llm::{Error, PromptRequest, Provider, Result};

/// Build the analysis prompt for a question about an uploaded dataset.
pub fn prompt(preview: &TabularPreview, question: &str) -> String {
    format!(
        "You are an expert data analysis assistant. The user has provided a CSV dataset with \
         the following columns: {}.\n\n\
         Here is a sample of the CSV data:\n\
         ```csv\n\
         {}\n\
         ```\n\n\
         Please answer the following question about the data professionally and provide \
         actionable insights if applicable:\n\n\
         Question: {}",
        preview.headers().join(", "),
        preview.sample(),
        question
    )
}

/// Ask one question about the dataset.
pub async fn run(
    provider: &dyn Provider,
    preview: &TabularPreview,
    question: &str,
) -> Result<String> {
    if question.trim().is_empty() {
        return Err(Error::InvalidInput("question is empty".to_string()));
    }

    provider
        .generate(&PromptRequest::new(prompt(preview, question)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testutil::ScriptedProvider;

    fn preview() -> TabularPreview {
        TabularPreview::parse("name,age,city\nalice,30,oslo\nbob,25,lima").unwrap()
    }

    #[test]
    fn test_prompt_lists_columns_and_sample() {
        let text = prompt(&preview(), "who is oldest?");
        assert!(text.contains("columns: name, age, city."));
        assert!(text.contains("```csv\nname,age,city\nalice,30,oslo\nbob,25,lima\n```"));
        assert!(text.ends_with("Question: who is oldest?"));
    }

    #[tokio::test]
    async fn test_blank_question_rejected() {
        let provider = ScriptedProvider::new(vec![]);
        let err = run(&provider, &preview(), "").await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(provider.seen().is_empty());
    }
}
