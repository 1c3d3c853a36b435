//! Code explainer: reproduce, overview, then line-by-line.

use plume_llm::{Error, PromptRequest, Provider, Result};

/// Build the explanation prompt for a snippet.
pub fn prompt(language: &str, code: &str) -> String {
    format!(
        "You are a senior software engineer and code reviewer.\n\n\
         1. First, **print the entire {language} code snippet exactly as provided**, clearly \
         labeled as 'Full Code:'.\n\n\
         2. Then provide a **comprehensive overview explanation** of what the entire code \
         does.\n\n\
         3. Finally, give a **detailed, line-by-line explanation** of the code. For each line:\n\
         \x20  - Explain what the line does.\n\
         \x20  - Explain each key word, function, or syntax element.\n\
         \x20  - Use bullet points or markdown formatting for clarity.\n\
         \x20  - Explain context if part of a block (function, loop, condition).\n\
         \x20  - Write lines in code blocks.\n\n\
         Here is the code:\n\
         ```{}\n\
         {code}\n\
         ```\n\n\
         Start with the full code, then overview, then line-by-line explanation.",
        language.to_lowercase()
    )
}

/// Explain one snippet.
pub async fn run(provider: &dyn Provider, language: &str, code: &str) -> Result<String> {
    if code.trim().is_empty() {
        return Err(Error::InvalidInput("code snippet is empty".to_string()));
    }

    provider
        .generate(&PromptRequest::new(prompt(language, code)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testutil::ScriptedProvider;

    #[test]
    fn test_prompt_embeds_code_verbatim_with_lowercase_tag() {
        let text = prompt("Python", "def f():\n    return 1");
        assert!(text.contains("entire Python code snippet"));
        assert!(text.contains("```python\ndef f():\n    return 1\n```"));
        assert!(text.contains("'Full Code:'"));
    }

    #[tokio::test]
    async fn test_empty_snippet_rejected() {
        let provider = ScriptedProvider::new(vec![]);
        let err = run(&provider, "Rust", "\n  \n").await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(provider.seen().is_empty());
    }
}
