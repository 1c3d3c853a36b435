//! The rewrite stages, in pipeline order.
//!
//! Every stage is a pure `Doc -> Doc` function; [`pipeline`] returns the
//! fixed order. Regexes compile once.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::doc::Doc;

/// One named rewrite stage.
pub struct Stage {
    pub name: &'static str,
    pub apply: fn(Doc) -> Doc,
}

/// The fixed stage order. Load-bearing: code fences must leave the text
/// before inline rules run, emphasis before list markers, blocks before
/// coalescing and cleanup.
pub fn pipeline() -> &'static [Stage] {
    static PIPELINE: [Stage; 11] = [
        Stage {
            name: "fenced-code-tagged",
            apply: fenced_code_tagged,
        },
        Stage {
            name: "fenced-code-bare",
            apply: fenced_code_bare,
        },
        Stage {
            name: "inline-code",
            apply: inline_code,
        },
        Stage {
            name: "headings",
            apply: headings,
        },
        Stage {
            name: "emphasis",
            apply: emphasis,
        },
        Stage {
            name: "list-items",
            apply: list_items,
        },
        Stage {
            name: "paragraphs",
            apply: paragraphs,
        },
        Stage {
            name: "list-coalescing",
            apply: list_coalescing,
        },
        Stage {
            name: "paragraph-wrapping",
            apply: paragraph_wrapping,
        },
        Stage {
            name: "restore-code-blocks",
            apply: restore_code_blocks,
        },
        Stage {
            name: "cleanup",
            apply: cleanup,
        },
    ];
    &PIPELINE
}

static FENCE_TAGGED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(\w+)\s*?\n(.*?)\n```").unwrap());
static FENCE_BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```\s*?\n?(.*?)\n?```").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());

static BOLD_ITALIC_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static BOLD_ITALIC_UNDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"___(.+?)___").unwrap());
static BOLD_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static BOLD_UNDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());
static ITALIC_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static ITALIC_UNDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.+?)_").unwrap());

static BULLET_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[*+-] (.+)$").unwrap());
static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\. (.+)$").unwrap());

static PARA_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());
static BLOCK_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\x01|<h[1-6]>|<li>|<ul>|<ol>)").unwrap());

static LI_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<li>.*?</li>(?:\s*<br>\s*<li>.*?</li>)*").unwrap());
static BR_BETWEEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<br>\s*").unwrap());

static WRAP_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\x01|<h[1-6]>|<div|<ul>|<ol>|<p>)").unwrap());

static CODE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x01(\d+)\x01").unwrap());

static EMPTY_BREAK_P: Lazy<Regex> = Lazy::new(|| Regex::new(r"<p>\s*<br>\s*</p>").unwrap());
static BREAK_AFTER_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(</h[1-6]>|</ul>|</div>)\s*<br>").unwrap());

/// Rule 1: tagged fences. The language tag is discarded; the body leaves the
/// text so nothing downstream can rewrite it.
fn fenced_code_tagged(mut doc: Doc) -> Doc {
    let text = std::mem::take(&mut doc.text);
    let replaced = FENCE_TAGGED
        .replace_all(&text, |caps: &Captures| doc.stash_code(caps[2].to_string()))
        .into_owned();
    doc.text = replaced;
    doc
}

/// Rule 2: bare fences, same element.
fn fenced_code_bare(mut doc: Doc) -> Doc {
    let text = std::mem::take(&mut doc.text);
    let replaced = FENCE_BARE
        .replace_all(&text, |caps: &Captures| doc.stash_code(caps[1].to_string()))
        .into_owned();
    doc.text = replaced;
    doc
}

/// Rule 3: single-backtick spans with no embedded newline.
fn inline_code(mut doc: Doc) -> Doc {
    doc.text = INLINE_CODE
        .replace_all(&doc.text, "<code class=\"inline-code\">${1}</code>")
        .into_owned();
    doc
}

/// Rule 4: headings, longest prefix first.
fn headings(mut doc: Doc) -> Doc {
    let text = H3.replace_all(&doc.text, "<h3>${1}</h3>");
    let text = H2.replace_all(&text, "<h2>${1}</h2>");
    let text = H1.replace_all(&text, "<h1>${1}</h1>");
    doc.text = text.into_owned();
    doc
}

/// Rule 5: emphasis, longest marker first so `***` never half-matches.
fn emphasis(mut doc: Doc) -> Doc {
    let text = BOLD_ITALIC_STAR.replace_all(&doc.text, "<strong><em>${1}</em></strong>");
    let text = BOLD_ITALIC_UNDER.replace_all(&text, "<strong><em>${1}</em></strong>");
    let text = BOLD_STAR.replace_all(&text, "<strong>${1}</strong>");
    let text = BOLD_UNDER.replace_all(&text, "<strong>${1}</strong>");
    let text = ITALIC_STAR.replace_all(&text, "<em>${1}</em>");
    let text = ITALIC_UNDER.replace_all(&text, "<em>${1}</em>");
    doc.text = text.into_owned();
    doc
}

/// Rule 6: bullet and numbered markers become list items.
fn list_items(mut doc: Doc) -> Doc {
    let text = BULLET_ITEM.replace_all(&doc.text, "<li>${1}</li>");
    let text = NUMBERED_ITEM.replace_all(&text, "<li>${1}</li>");
    doc.text = text.into_owned();
    doc
}

/// Rule 7: blank-line runs bound paragraphs; remaining newlines become line
/// breaks. Blocks that already open with a block-level element stay bare.
fn paragraphs(mut doc: Doc) -> Doc {
    let text = std::mem::take(&mut doc.text);
    let mut out = String::with_capacity(text.len());
    for block in PARA_SPLIT.split(&text) {
        if block.trim().is_empty() {
            continue;
        }
        let block = block.replace('\n', "<br>");
        if BLOCK_START.is_match(&block) {
            out.push_str(&block);
        } else {
            out.push_str("<p>");
            out.push_str(&block);
            out.push_str("</p>");
        }
    }
    doc.text = out;
    doc
}

/// Rule 8: adjacent list items (line-break separated) coalesce into one
/// enclosing list; the separating breaks go away.
fn list_coalescing(mut doc: Doc) -> Doc {
    let text = std::mem::take(&mut doc.text);
    doc.text = LI_RUN
        .replace_all(&text, |caps: &Captures| {
            let run = BR_BETWEEN.replace_all(&caps[0], "");
            format!("<ul>{run}</ul>")
        })
        .into_owned();
    doc
}

/// Rule 9: a result that does not open with a block element is one paragraph.
fn paragraph_wrapping(mut doc: Doc) -> Doc {
    if !WRAP_START.is_match(&doc.text) {
        doc.text = format!("<p>{}</p>", doc.text);
    }
    doc
}

/// Stashed code bodies come back once every rewrite rule has run.
fn restore_code_blocks(mut doc: Doc) -> Doc {
    let text = std::mem::take(&mut doc.text);
    let blocks = std::mem::take(&mut doc.code_blocks);
    doc.text = CODE_TOKEN
        .replace_all(&text, |caps: &Captures| {
            match caps[1].parse::<usize>().ok().and_then(|i| blocks.get(i)) {
                Some(body) => {
                    format!("<div class=\"code-block\"><pre><code>{body}</code></pre></div>")
                }
                None => caps[0].to_string(),
            }
        })
        .into_owned();
    doc
}

/// Rule 10: drop empty paragraphs, break-only paragraphs, and breaks that
/// directly follow a closed block element.
fn cleanup(mut doc: Doc) -> Doc {
    let text = doc.text.replace("<p></p>", "");
    let text = EMPTY_BREAK_P.replace_all(&text, "");
    let text = BREAK_AFTER_BLOCK.replace_all(&text, "${1}");
    doc.text = text.into_owned();
    doc
}
