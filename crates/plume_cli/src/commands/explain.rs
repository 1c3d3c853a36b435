//! `plume explain` — explain a code snippet from a file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plume_tools::code;

use crate::commands::finish_with_error;
use crate::config;
use crate::export;
use crate::output;

/// Guess the language tag from the file extension.
fn guess_language(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("rs") => "Rust",
        Some("py") => "Python",
        Some("js") => "JavaScript",
        Some("ts") => "TypeScript",
        Some("go") => "Go",
        Some("java") => "Java",
        Some("c") | Some("h") => "C",
        Some("cpp") | Some("cc") | Some("hpp") => "C++",
        Some("rb") => "Ruby",
        Some("sh") => "Bash",
        Some("sql") => "SQL",
        _ => "text",
    }
}

pub async fn handle(
    model: Option<&str>,
    file: PathBuf,
    language: Option<String>,
    out: Option<PathBuf>,
    html: Option<PathBuf>,
) -> Result<()> {
    let snippet = std::fs::read_to_string(&file)
        .with_context(|| format!("reading {}", file.display()))?;
    let language = language.unwrap_or_else(|| guess_language(&file).to_string());

    let provider = config::select_provider(model)?;
    let spinner = output::spinner("Analyzing...");
    let explanation = match code::run(provider.as_ref(), &language, &snippet).await {
        Ok(explanation) => {
            output::spinner_success(&spinner, "Code explanation generated successfully!");
            explanation
        }
        Err(err) => return finish_with_error(&spinner, "Failed to explain code", err),
    };

    output::reply(&explanation);

    if let Some(path) = out {
        export::write(&path, &explanation)?;
    }
    if let Some(path) = html {
        export::write(&path, &plume_markup::render(&explanation))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_language() {
        assert_eq!(guess_language(Path::new("main.rs")), "Rust");
        assert_eq!(guess_language(Path::new("app.py")), "Python");
        assert_eq!(guess_language(Path::new("README")), "text");
    }
}
