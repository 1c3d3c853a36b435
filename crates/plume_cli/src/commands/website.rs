//! `plume website` — fetch and summarize a web page.

use std::path::PathBuf;

use anyhow::Result;
use plume_tools::website;

use crate::commands::finish_with_error;
use crate::config;
use crate::export;
use crate::output;

pub async fn handle(
    model: Option<&str>,
    url: String,
    out: Option<PathBuf>,
    html: Option<PathBuf>,
) -> Result<()> {
    let provider = config::select_provider(model)?;

    let spinner = output::spinner("Processing...");
    let summary = match website::run(provider.as_ref(), &url).await {
        Ok(summary) => {
            output::spinner_success(&spinner, "Website summarized successfully!");
            summary
        }
        Err(err) => return finish_with_error(&spinner, "Failed to process website", err),
    };

    output::reply(&summary);

    if let Some(path) = out {
        export::write(&path, &summary)?;
    }
    if let Some(path) = html {
        export::write(&path, &plume_markup::render(&summary))?;
    }

    Ok(())
}
