//! `plume blog` — draft a post from a title and keywords.

use std::path::PathBuf;

use anyhow::Result;
use plume_tools::blog::{self, BlogBrief};

use crate::commands::finish_with_error;
use crate::config;
use crate::export;
use crate::output;

pub async fn handle(
    model: Option<&str>,
    title: String,
    keywords: String,
    words: u32,
    out: Option<PathBuf>,
    save: bool,
    html: Option<PathBuf>,
) -> Result<()> {
    let provider = config::select_provider(model)?;
    let brief = BlogBrief::new(title.clone(), keywords, words);

    let spinner = output::spinner("Generating...");
    let draft = match blog::run(provider.as_ref(), &brief).await {
        Ok(draft) => {
            output::spinner_success(&spinner, "Blog post generated successfully!");
            draft
        }
        Err(err) => return finish_with_error(&spinner, "Failed to generate blog post", err),
    };

    output::reply(&draft);

    if let Some(path) = export::resolve_path(out, save, &title, "generated_blog", "md") {
        export::write(&path, &draft)?;
    }
    if let Some(path) = html {
        export::write(&path, &plume_markup::render(&draft))?;
    }

    Ok(())
}
