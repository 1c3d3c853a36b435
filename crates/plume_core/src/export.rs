//! Helpers for exporting generated artifacts to local files.
//!
//! Filesystem writes stay at the CLI edge; these assemble names and content.

/// Collapse every whitespace run to a single underscore.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Derive a download filename from a user-provided title.
///
/// Whitespace runs collapse to underscores; a blank title falls back to the
/// fixed default. The extension is appended without a leading dot.
pub fn derive_filename(title: &str, fallback: &str, extension: &str) -> String {
    let stem = collapse_whitespace(title);
    let stem = if stem.is_empty() {
        fallback
    } else {
        stem.as_str()
    };
    format!("{stem}.{extension}")
}

/// Assemble the exported SQL details document: query in a fenced block,
/// then the explanation.
pub fn sql_artifact(query: &str, explanation: &str) -> String {
    format!("### Generated SQL Query:\n```sql\n{query}\n```\n\n### Explanation:\n{explanation}")
}
