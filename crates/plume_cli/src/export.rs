//! File export: write generated artifacts to disk.

use std::fs;
use std::path::{Path, PathBuf};

use plume_core::derive_filename;

use crate::output;

/// Resolve where to write an artifact: an explicit `--out` path wins, `--save`
/// derives a name from the title (or the fixed fallback), neither means no
/// export.
pub fn resolve_path(
    out: Option<PathBuf>,
    save: bool,
    title: &str,
    fallback: &str,
    extension: &str,
) -> Option<PathBuf> {
    out.or_else(|| save.then(|| PathBuf::from(derive_filename(title, fallback, extension))))
}

/// Write an artifact and report the destination.
pub fn write(path: &Path, content: &str) -> anyhow::Result<()> {
    fs::write(path, content)?;
    output::success(&format!("Saved to {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_explicit_out() {
        let path = resolve_path(
            Some(PathBuf::from("custom.md")),
            true,
            "My Title",
            "generated_blog",
            "md",
        );
        assert_eq!(path, Some(PathBuf::from("custom.md")));
    }

    #[test]
    fn test_resolve_derives_from_title_on_save() {
        let path = resolve_path(None, true, "My Great Post", "generated_blog", "md");
        assert_eq!(path, Some(PathBuf::from("My_Great_Post.md")));

        let path = resolve_path(None, true, "", "generated_blog", "md");
        assert_eq!(path, Some(PathBuf::from("generated_blog.md")));
    }

    #[test]
    fn test_resolve_none_without_flags() {
        assert_eq!(resolve_path(None, false, "t", "f", "md"), None);
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.md");
        write(&path, "content").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }
}
