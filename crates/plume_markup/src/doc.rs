//! Intermediate representation the rewrite stages operate on.

/// Escaped working text plus extracted code-block bodies.
///
/// Code bodies leave the text early (replaced by `\u{1}N\u{1}` placeholders)
/// so no later stage can touch them, and return in a late stage once every
/// inline and block rule has run.
#[derive(Debug, Clone)]
pub struct Doc {
    pub text: String,
    pub code_blocks: Vec<String>,
}

impl Doc {
    /// Build the IR from raw text, HTML-escaping it so provider output can
    /// never inject markup of its own.
    pub fn new(raw: &str) -> Self {
        let text = raw
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        Self {
            text,
            code_blocks: Vec::new(),
        }
    }

    /// Stash a code body and return its placeholder token.
    pub fn stash_code(&mut self, body: String) -> String {
        let token = format!("\u{1}{}\u{1}", self.code_blocks.len());
        self.code_blocks.push(body);
        token
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
