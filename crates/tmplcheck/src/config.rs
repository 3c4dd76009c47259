//! Check configuration.

use std::path::{Path, PathBuf};

/// Default templates directory, relative to the working directory.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Default manifest file name.
pub const DEFAULT_MANIFEST_FILE: &str = "index.json";

/// Default schema file name.
pub const DEFAULT_SCHEMA_FILE: &str = "index.schema.json";

/// Repository metadata files that live next to the templates but are never
/// part of the catalog.
pub const METADATA_FILES: &[&str] = &[".gitignore", "README.md"];

/// Where the catalog lives and which files in it are special.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Directory holding the manifest, schema, workflows and thumbnails
    pub templates_dir: PathBuf,
    /// Manifest file name inside `templates_dir`
    pub manifest_file: String,
    /// Schema file name inside `templates_dir`
    pub schema_file: String,
    /// Additional files ignored by orphan detection
    pub metadata_files: Vec<String>,
}

impl CheckConfig {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            schema_file: DEFAULT_SCHEMA_FILE.to_string(),
            metadata_files: METADATA_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn manifest_file(mut self, file: impl Into<String>) -> Self {
        self.manifest_file = file.into();
        self
    }

    pub fn schema_file(mut self, file: impl Into<String>) -> Self {
        self.schema_file = file.into();
        self
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.templates_dir.join(&self.manifest_file)
    }

    pub fn schema_path(&self) -> PathBuf {
        self.templates_dir.join(&self.schema_file)
    }

    /// Files excluded from orphan detection: the manifest, the schema and
    /// the metadata files.
    pub fn special_files(&self) -> Vec<&str> {
        let mut files = vec![self.manifest_file.as_str(), self.schema_file.as_str()];
        files.extend(self.metadata_files.iter().map(String::as_str));
        files
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATES_DIR)
    }
}
