//! `plume document` — summarize a text or markdown file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use plume_tools::document;

use crate::commands::finish_with_error;
use crate::config;
use crate::export;
use crate::output;

pub async fn handle(model: Option<&str>, file: PathBuf, out: Option<PathBuf>) -> Result<()> {
    let content = std::fs::read_to_string(&file)
        .with_context(|| format!("reading {}", file.display()))?;
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let provider = config::select_provider(model)?;
    let spinner = output::spinner("Processing...");
    let summary = match document::run(provider.as_ref(), &name, &content).await {
        Ok(summary) => {
            output::spinner_success(&spinner, "Document summarized successfully!");
            summary
        }
        Err(err) => return finish_with_error(&spinner, "Failed to process document", err),
    };

    output::reply(&summary);

    if let Some(path) = out {
        export::write(&path, &summary)?;
    }

    Ok(())
}
