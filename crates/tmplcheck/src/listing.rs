//! Templates directory access.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Read-only view of the templates directory.
#[derive(Debug, Clone)]
pub struct TemplatesDir {
    path: PathBuf,
}

impl TemplatesDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Whether `file` exists directly inside the directory.
    pub fn contains(&self, file: &str) -> bool {
        self.path.join(file).exists()
    }

    /// Names of the regular files directly inside the directory, sorted.
    ///
    /// Subdirectories are not descended into and unreadable entries are
    /// skipped.
    pub fn files(&self) -> BTreeSet<String> {
        if !self.path.is_dir() {
            warn!("Templates directory does not exist: {:?}", self.path);
            return BTreeSet::new();
        }

        let files: BTreeSet<String> = WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();

        debug!("Found {} files in {:?}", files.len(), self.path);
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_files_skips_directories() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("b.json"), "{}").unwrap();
        fs::write(temp.path().join("a-1.webp"), "").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("c.json"), "{}").unwrap();

        let dir = TemplatesDir::new(temp.path());
        let files: Vec<_> = dir.files().into_iter().collect();
        assert_eq!(files, vec!["a-1.webp", "b.json"]);
        assert!(dir.contains("b.json"));
        assert!(!dir.contains("c.json"));
    }

    #[test]
    fn test_missing_directory() {
        let temp = tempdir().unwrap();
        let dir = TemplatesDir::new(temp.path().join("absent"));
        assert!(dir.files().is_empty());
    }
}
