//! plume_markup — raw provider text to display-ready markup.
//!
//! The renderer is a fixed, ordered pipeline of rewrite stages over a small
//! intermediate representation ([`Doc`]): escaped text plus a side table of
//! extracted code-block bodies. Order is load-bearing — each stage assumes
//! the ones before it have already consumed their syntax (code fences before
//! inline code, inline code before emphasis, and so on).
//!
//! Anything the pipeline does not cover (tables, links, nested lists) passes
//! through as literal text. Unterminated fences degrade to plain text.

mod doc;
mod stages;

pub use doc::Doc;
pub use stages::{Stage, pipeline};

/// Render raw provider text into display markup.
///
/// Deterministic: identical input yields identical output. Accepts arbitrary
/// text; never fails.
pub fn render(raw: &str) -> String {
    let mut doc = Doc::new(raw);
    for stage in pipeline() {
        doc = (stage.apply)(doc);
    }
    doc.into_text()
}
