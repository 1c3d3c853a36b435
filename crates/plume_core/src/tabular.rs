//! Delimited-text ingestion for the CSV Q&A flow.
//!
//! Deliberately naive: split on comma, no quoting or escaping. The preview is
//! for on-screen display; the truncated raw sample is what gets embedded into
//! follow-up prompts.

use crate::error::{PlumeError, Result};

/// Maximum raw characters embedded into a prompt as the data sample.
pub const SAMPLE_LIMIT: usize = 3000;

/// Maximum data rows shown in the preview.
pub const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone)]
pub struct TabularPreview {
    headers: Vec<String>,
    preview: Vec<Vec<String>>,
    row_count: usize,
    sample: String,
}

impl TabularPreview {
    /// Parse comma-delimited text: first line is headers, up to five
    /// non-blank lines after it become the preview.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut lines = raw.lines();
        let header_line = lines
            .next()
            .filter(|l| !l.trim().is_empty())
            .ok_or_else(|| PlumeError::InvalidInput("delimited text is empty".to_string()))?;

        let headers: Vec<String> = header_line.split(',').map(|h| h.trim().to_string()).collect();

        let mut preview = Vec::new();
        let mut row_count = 0;
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            row_count += 1;
            if preview.len() < PREVIEW_ROWS {
                preview.push(line.split(',').map(|c| c.trim().to_string()).collect());
            }
        }

        let sample = raw.chars().take(SAMPLE_LIMIT).collect();

        Ok(Self {
            headers,
            preview,
            row_count,
            sample,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Preview rows (at most [`PREVIEW_ROWS`]).
    pub fn preview_rows(&self) -> &[Vec<String>] {
        &self.preview
    }

    /// Total non-blank data rows in the payload, previewed or not.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// First [`SAMPLE_LIMIT`] characters of the raw payload.
    pub fn sample(&self) -> &str {
        &self.sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headers_and_rows() {
        let preview = TabularPreview::parse("a,b,c\n1,2,3\n4,5,6").unwrap();
        assert_eq!(preview.headers(), &["a", "b", "c"]);
        assert_eq!(preview.preview_rows().len(), 2);
        assert_eq!(preview.preview_rows()[0], vec!["1", "2", "3"]);
        assert_eq!(preview.row_count(), 2);
        assert_eq!(preview.column_count(), 3);
    }

    #[test]
    fn test_preview_caps_at_five_rows() {
        let raw = "h1,h2\n1,a\n2,b\n3,c\n4,d\n5,e\n6,f\n7,g";
        let preview = TabularPreview::parse(raw).unwrap();
        assert_eq!(preview.preview_rows().len(), 5);
        assert_eq!(preview.row_count(), 7);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let preview = TabularPreview::parse("a,b\n1,2\n\n  \n3,4").unwrap();
        assert_eq!(preview.preview_rows().len(), 2);
        assert_eq!(preview.row_count(), 2);
    }

    #[test]
    fn test_cells_trimmed() {
        let preview = TabularPreview::parse(" name , age \n alice , 30 ").unwrap();
        assert_eq!(preview.headers(), &["name", "age"]);
        assert_eq!(preview.preview_rows()[0], vec!["alice", "30"]);
    }

    #[test]
    fn test_no_quoting_support() {
        // Quoted commas still split; this is the documented behavior.
        let preview = TabularPreview::parse("name,quote\nbob,\"a,b\"").unwrap();
        assert_eq!(preview.preview_rows()[0].len(), 3);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            TabularPreview::parse(""),
            Err(PlumeError::InvalidInput(_))
        ));
        assert!(matches!(
            TabularPreview::parse("   "),
            Err(PlumeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_sample_truncates_long_payload() {
        let mut raw = String::from("a,b\n");
        while raw.len() < SAMPLE_LIMIT + 500 {
            raw.push_str("1,2\n");
        }
        let preview = TabularPreview::parse(&raw).unwrap();
        assert_eq!(preview.sample().len(), SAMPLE_LIMIT);
        assert!(raw.starts_with(preview.sample()));
    }
}
