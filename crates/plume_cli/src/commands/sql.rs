//! `plume sql` — generate a query, a sample result, and an explanation.

use std::path::PathBuf;

use anyhow::Result;
use plume_core::sql_artifact;
use plume_tools::sql::{self, SqlRequest};

use crate::commands::finish_with_error;
use crate::config;
use crate::export;
use crate::output;

pub async fn handle(
    model: Option<&str>,
    description: String,
    dialect: String,
    context: Option<String>,
    out: Option<PathBuf>,
    save: bool,
) -> Result<()> {
    let provider = config::select_provider(model)?;

    let mut request = SqlRequest::new(description, dialect);
    if let Some(context) = context {
        request = request.with_schema_context(context);
    }

    let spinner = output::spinner("Generating...");
    let bundle = match sql::run(provider.as_ref(), &request).await {
        Ok(bundle) => {
            output::spinner_success(&spinner, "SQL query generated successfully!");
            bundle
        }
        Err(err) => return finish_with_error(&spinner, "Failed to generate SQL query", err),
    };

    output::header("Query");
    output::reply(&bundle.query);
    output::header("Sample output");
    output::reply(&bundle.sample_output);
    output::header("Explanation");
    output::reply(&bundle.explanation);

    if let Some(path) = export::resolve_path(out, save, "", "sql_query_details", "md") {
        export::write(&path, &sql_artifact(&bundle.query, &bundle.explanation))?;
    }

    Ok(())
}
