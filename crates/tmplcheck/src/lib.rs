//! # tmplcheck
//!
//! Consistency checks for a catalog of workflow templates.
//!
//! A catalog is a directory holding a manifest (`index.json`), the JSON
//! Schema the manifest must follow (`index.schema.json`), one workflow file
//! per template (`<name>.json`) and numbered thumbnails
//! (`<name>-<N>.<ext>`).
//!
//! ## Checks
//!
//! - **Schema**: the manifest validates against the schema
//! - **File consistency**: referenced workflows exist; unreferenced
//!   workflows and media files are reported as warnings
//! - **Duplicate names**: template names are unique across categories
//! - **Required thumbnails**: every template with a media subtype has
//!   `<name>-1.<ext>`
//!
//! All checks always run; errors fail the run, warnings do not.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tmplcheck::{CheckConfig, Reporter, Validator};
//!
//! let validator = Validator::new(CheckConfig::new("templates"));
//! let mut reporter = Reporter::new(std::io::stdout());
//!
//! match validator.execute(&mut reporter) {
//!     Ok(report) if report.passed() => println!("catalog is consistent"),
//!     Ok(report) => eprintln!("{} error(s)", report.errors().len()),
//!     Err(e) => eprintln!("could not load catalog: {}", e),
//! }
//! ```

pub mod checks;
pub mod config;
pub mod error;
pub mod listing;
pub mod loader;
pub mod models;
pub mod outcome;
pub mod report;
pub mod validator;

pub use checks::{
    DuplicateNameCheck, FileConsistencyCheck, RequiredThumbnailCheck, SchemaCheck, MAX_THUMBNAILS,
};
pub use config::CheckConfig;
pub use error::{CheckError, CheckResult};
pub use listing::TemplatesDir;
pub use loader::CatalogInputs;
pub use models::{Category, Manifest, Template};
pub use outcome::CheckOutcome;
pub use report::{running_in_ci, Reporter, CI_ENV_VAR};
pub use validator::{Stage, StageReport, StageStatus, ValidationReport, Validator};
