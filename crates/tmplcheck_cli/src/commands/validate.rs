//! Validate command - Check a template catalog.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use tmplcheck::config::{DEFAULT_MANIFEST_FILE, DEFAULT_SCHEMA_FILE, DEFAULT_TEMPLATES_DIR};
use tmplcheck::{running_in_ci, CheckConfig, Reporter, Validator};

#[derive(Args)]
pub struct ValidateArgs {
    /// Templates directory
    #[arg(long, env = "TMPLCHECK_TEMPLATES_DIR", default_value = DEFAULT_TEMPLATES_DIR)]
    templates_dir: PathBuf,

    /// Manifest file name inside the templates directory
    #[arg(long, default_value = DEFAULT_MANIFEST_FILE)]
    manifest: String,

    /// Schema file name inside the templates directory
    #[arg(long, default_value = DEFAULT_SCHEMA_FILE)]
    schema: String,
}

impl ValidateArgs {
    fn config(&self) -> CheckConfig {
        CheckConfig::new(self.templates_dir.clone())
            .manifest_file(&self.manifest)
            .schema_file(&self.schema)
    }
}

/// Run all checks. Returns whether the catalog passed.
pub fn execute(args: ValidateArgs) -> Result<bool> {
    let config = args.config();
    info!("Validating catalog: {:?}", config.templates_dir);

    let mut reporter = Reporter::new(io::stdout().lock());
    if running_in_ci() {
        debug!("GitHub Actions detected, emitting annotations");
        reporter = reporter.with_annotations(config.manifest_path().display().to_string());
    }

    match Validator::new(config).execute(&mut reporter) {
        Ok(report) => Ok(report.passed()),
        // Input errors were already reported by the validator
        Err(e) if e.is_input_error() => Ok(false),
        Err(e) => Err(e).context("Failed to write report"),
    }
}
