//! Package manifest parsing and discovery
//!
//! A manifest is a plain-text file listing package identifiers, with
//! optional source annotations and `#` comments. Every file under the
//! manifest directory is parsed, recursively and in sorted order, into
//! one combined entry sequence.

mod parser;

pub use parser::{parse_manifest, ManifestEntry};

use std::fs;

use camino::Utf8Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Parse every file under `dir` into one combined entry sequence.
///
/// `default_source` is applied per file: an unannotated package at the
/// top of any file falls back to it, regardless of annotations in files
/// parsed earlier.
pub fn load_manifest_dir(
    dir: &Utf8Path,
    default_source: Option<&str>,
) -> Result<Vec<ManifestEntry>> {
    if !dir.is_dir() {
        return Err(Error::ManifestDirNotFound {
            path: dir.to_string(),
        });
    }

    let mut entries = Vec::new();
    for file in WalkDir::new(dir).sort_by_file_name() {
        let file = file.map_err(|e| Error::Io(e.into()))?;
        if !file.file_type().is_file() {
            continue;
        }
        let path = file.path();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::in_manifest(path.display().to_string(), Error::Io(e)))?;
        let parsed = parse_manifest(&text, default_source)
            .map_err(|e| Error::in_manifest(path.display().to_string(), e))?;
        debug!(file = %path.display(), entries = parsed.len(), "parsed manifest");
        entries.extend(parsed);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("path should be valid UTF-8")
    }

    #[test]
    fn test_missing_dir_mentions_generate() {
        let dir = TempDir::new().unwrap();
        let missing = utf8(&dir).join("pkgs");
        let err = load_manifest_dir(&missing, Some("pacman")).unwrap_err();
        assert!(matches!(err, Error::ManifestDirNotFound { .. }));
        assert!(err.to_string().contains("decree generate"));
    }

    #[test]
    fn test_empty_dir_yields_no_entries() {
        let dir = TempDir::new().unwrap();
        let entries = load_manifest_dir(&utf8(&dir), Some("pacman")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_files_parsed_in_sorted_order() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b-tools"), "ripgrep\n").unwrap();
        std::fs::write(dir.path().join("a-editors"), "vim\n").unwrap();

        let entries = load_manifest_dir(&utf8(&dir), Some("pacman")).unwrap();
        let packages: Vec<&str> = entries.iter().map(|e| e.package.as_str()).collect();
        assert_eq!(packages, vec!["vim", "ripgrep"]);
    }

    #[test]
    fn test_nested_directories_are_walked() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("work")).unwrap();
        std::fs::write(dir.path().join("base"), "vim\n").unwrap();
        std::fs::write(dir.path().join("work").join("extra"), "git\n").unwrap();

        let entries = load_manifest_dir(&utf8(&dir), Some("pacman")).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_default_source_reset_per_file() {
        // A `[name]` annotation in one file must not leak into the next.
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a"), "[cargo] ripgrep\n").unwrap();
        std::fs::write(dir.path().join("b"), "vim\n").unwrap();

        let entries = load_manifest_dir(&utf8(&dir), Some("pacman")).unwrap();
        assert_eq!(entries[0].source, "cargo");
        assert_eq!(entries[1].source, "pacman");
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken"), "vim (aur)\n").unwrap();

        let err = load_manifest_dir(&utf8(&dir), Some("pacman")).unwrap_err();
        assert!(matches!(err, Error::Manifest { .. }));
        assert!(err.to_string().contains("broken"));
    }
}
