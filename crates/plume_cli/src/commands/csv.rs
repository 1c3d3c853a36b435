//! `plume csv` — preview a delimited file and ask questions about it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use plume_core::TabularPreview;
use plume_tools::csv_qa;

use crate::commands::finish_with_error;
use crate::config;
use crate::output;

pub async fn handle(model: Option<&str>, file: PathBuf, question: Option<String>) -> Result<()> {
    let raw = std::fs::read_to_string(&file)
        .with_context(|| format!("reading {}", file.display()))?;

    let preview = match TabularPreview::parse(&raw) {
        Ok(preview) => preview,
        Err(err) => {
            output::warning(&err.to_string());
            return Ok(());
        }
    };

    print_preview(&preview);
    output::success(&format!(
        "CSV loaded: {} rows, {} columns.",
        preview.row_count(),
        preview.column_count()
    ));

    let Some(question) = question else {
        return Ok(());
    };

    let provider = config::select_provider(model)?;
    let spinner = output::spinner("Analyzing data...");
    match csv_qa::run(provider.as_ref(), &preview, &question).await {
        Ok(answer) => {
            output::spinner_clear(&spinner);
            output::reply(&answer);
            Ok(())
        }
        Err(err) => finish_with_error(&spinner, "Failed to analyze data", err),
    }
}

fn print_preview(preview: &TabularPreview) {
    let columns: Vec<&str> = preview.headers().iter().map(String::as_str).collect();
    let mut table = output::table(&columns);
    for row in preview.preview_rows() {
        table.add_row(row.clone());
    }
    output::table_print(&table, &columns, preview.preview_rows());
}
