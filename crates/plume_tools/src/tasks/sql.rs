//! SQL generator: three strictly sequential, stateless requests.
//!
//! Generate the query, then a plausible sample result, then an explanation.
//! Each request is independent — the later prompts embed the generated query
//! text itself, never a reference to prior conversation. A failure anywhere
//! fails the whole flow; nothing is cached or retried.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use plume_llm::{Error, PromptRequest, Provider, Result};

/// What the user asked for.
#[derive(Debug, Clone)]
pub struct SqlRequest {
    pub description: String,
    pub dialect: String,
    pub schema_context: Option<String>,
}

impl SqlRequest {
    pub fn new(description: impl Into<String>, dialect: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            dialect: dialect.into(),
            schema_context: None,
        }
    }

    pub fn with_schema_context(mut self, context: impl Into<String>) -> Self {
        self.schema_context = Some(context.into());
        self
    }
}

/// Everything the flow produces.
#[derive(Debug, Clone)]
pub struct SqlBundle {
    /// The generated query, fence markers stripped.
    pub query: String,
    /// A plausible sample result, as a Markdown table (or the fixed DDL/DML
    /// sentence).
    pub sample_output: String,
    /// Concise explanation of the query.
    pub explanation: String,
}

/// Step 1: generate the query itself.
pub fn generation_prompt(request: &SqlRequest) -> String {
    let context = match &request.schema_context {
        Some(context) => format!("Database Context: {context}\n"),
        None => String::new(),
    };
    format!(
        "Generate a {} SQL query based on the following description:\n\
         Description: {}\n\
         {}\
         Provide only the SQL query as a raw string, without any additional explanations, \
         markdown code block delimiters, or introductory/concluding remarks.",
        request.dialect, request.description, context
    )
}

/// Step 2: ask for a plausible sample result table.
pub fn sample_output_prompt(query: &str) -> String {
    format!(
        "Given the following SQL Query:\n\
         ```sql\n\
         {query}\n\
         ```\n\
         What would be a plausible sample tabular response?\n\
         Provide a concise sample tabular response formatted as a Markdown table, with no \
         additional explanation.\n\
         If the query is for DDL/DML (e.g., CREATE, INSERT, UPDATE, DELETE), state \"No direct \
         tabular output for this type of query.\""
    )
}

/// Step 3: ask for an explanation of the query.
pub fn explanation_prompt(query: &str) -> String {
    format!(
        "Explain the following SQL Query concisely and professionally:\n\
         ```sql\n\
         {query}\n\
         ```\n\
         Focus on what the query does and its purpose."
    )
}

static SQL_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```sql\n?").unwrap());
static BARE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```\n?").unwrap());

/// Strip any ```` ```sql ````/```` ``` ```` markers the model wrapped the
/// query in despite instructions.
pub fn strip_fences(query: &str) -> String {
    let cleaned = SQL_FENCE.replace_all(query, "");
    let cleaned = BARE_FENCE.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

/// Run the full three-step flow.
pub async fn run(provider: &dyn Provider, request: &SqlRequest) -> Result<SqlBundle> {
    if request.description.trim().is_empty() {
        return Err(Error::InvalidInput("query description is empty".to_string()));
    }

    debug!(target: "plume_tools", dialect = %request.dialect, "starting SQL generation flow");

    let query = provider
        .generate(&PromptRequest::new(generation_prompt(request)))
        .await?;

    let sample_output = provider
        .generate(&PromptRequest::new(sample_output_prompt(&query)))
        .await?;

    let explanation = provider
        .generate(&PromptRequest::new(explanation_prompt(&query)))
        .await?;

    Ok(SqlBundle {
        query: strip_fences(&query),
        sample_output,
        explanation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testutil::ScriptedProvider;

    #[test]
    fn test_generation_prompt_with_and_without_context() {
        let bare = generation_prompt(&SqlRequest::new("list all users", "PostgreSQL"));
        assert!(bare.contains("Generate a PostgreSQL SQL query"));
        assert!(bare.contains("Description: list all users"));
        assert!(!bare.contains("Database Context"));

        let with_context = generation_prompt(
            &SqlRequest::new("list all users", "MySQL").with_schema_context("users(id, name)"),
        );
        assert!(with_context.contains("Database Context: users(id, name)"));
    }

    #[test]
    fn test_strip_fences() {
        assert_eq!(
            strip_fences("```sql\nSELECT * FROM users;\n```"),
            "SELECT * FROM users;"
        );
        assert_eq!(strip_fences("SELECT 1;"), "SELECT 1;");
        assert_eq!(strip_fences("```\nSELECT 2;\n```\n"), "SELECT 2;");
    }

    #[tokio::test]
    async fn test_flow_issues_three_prompts_in_order() {
        let provider = ScriptedProvider::new(vec![
            "```sql\nSELECT * FROM users;\n```".to_string(),
            "| id | name |\n|----|------|\n| 1 | a |".to_string(),
            "Selects every user row.".to_string(),
        ]);

        let bundle = run(&provider, &SqlRequest::new("list all users", "PostgreSQL"))
            .await
            .unwrap();

        let seen = provider.seen();
        assert_eq!(seen.len(), 3);
        assert!(seen[0].task_text.contains("Generate a PostgreSQL SQL query"));
        assert!(seen[1].task_text.contains("plausible sample tabular response"));
        assert!(seen[2].task_text.contains("Explain the following SQL Query"));

        // Later prompts embed the raw step-1 reply, fences included.
        assert!(seen[1].task_text.contains("SELECT * FROM users;"));
        assert!(seen[2].task_text.contains("SELECT * FROM users;"));

        // The displayed query is fence-stripped.
        assert_eq!(bundle.query, "SELECT * FROM users;");
        assert_eq!(bundle.explanation, "Selects every user row.");
    }

    #[tokio::test]
    async fn test_second_step_failure_fails_the_flow() {
        // Script runs dry after the first reply; step 2 errors.
        let provider = ScriptedProvider::new(vec!["SELECT 1;".to_string()]);
        let err = run(&provider, &SqlRequest::new("anything", "SQLite"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MalformedResponse(_)));
        assert_eq!(provider.seen().len(), 2);
    }

    #[tokio::test]
    async fn test_blank_description_rejected() {
        let provider = ScriptedProvider::new(vec![]);
        let err = run(&provider, &SqlRequest::new(" ", "PostgreSQL"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(provider.seen().is_empty());
    }
}
