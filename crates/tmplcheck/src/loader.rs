//! Loading of the manifest and schema documents.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::config::CheckConfig;
use crate::error::{CheckError, CheckResult};
use crate::models::Manifest;

/// Everything the checks read from the two input documents.
#[derive(Debug, Clone)]
pub struct CatalogInputs {
    /// Raw manifest document, as validated by the schema check
    pub manifest_document: Value,
    /// Parsed schema document
    pub schema_document: Value,
    /// Typed view of the manifest
    pub manifest: Manifest,
}

impl CatalogInputs {
    /// Load the manifest and schema named by `config`.
    ///
    /// Both files must exist before either is parsed, so a missing schema is
    /// reported even when the manifest is malformed.
    pub fn load(config: &CheckConfig) -> CheckResult<Self> {
        let manifest_path = config.manifest_path();
        let schema_path = config.schema_path();

        ensure_exists(&config.manifest_file, &manifest_path)?;
        ensure_exists(&config.schema_file, &schema_path)?;

        let manifest_document = load_json(&config.manifest_file, &manifest_path)?;
        let schema_document = load_json(&config.schema_file, &schema_path)?;
        let manifest = Manifest::from_value(&manifest_document);

        debug!(
            "Loaded manifest with {} categories and {} templates",
            manifest.categories.len(),
            manifest.templates().count()
        );

        Ok(Self {
            manifest_document,
            schema_document,
            manifest,
        })
    }
}

/// Read and parse a JSON file, labelling errors with `file`.
fn load_json(file: &str, path: &Path) -> CheckResult<Value> {
    debug!("Reading {} from {:?}", file, path);

    let content = fs::read_to_string(path).map_err(|source| CheckError::Read {
        file: file.to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CheckError::Parse {
        file: file.to_string(),
        source,
    })
}

fn ensure_exists(file: &str, path: &Path) -> CheckResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CheckError::NotFound {
            file: file.to_string(),
            path: path.to_path_buf(),
        })
    }
}
