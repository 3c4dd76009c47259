//! CLI command definitions.
//!
//! tmplcheck has a single command: validate the catalog. Every option has a
//! default, so running with no arguments checks `./templates`.

use clap::Parser;

pub mod validate;

/// tmplcheck - workflow template catalog validator
#[derive(Parser)]
#[command(name = "tmplcheck")]
#[command(version, about = "tmplcheck - workflow template catalog validator")]
#[command(long_about = r#"
tmplcheck validates a directory of workflow templates:

  1. index.json against index.schema.json
  2. referenced workflow files exist; unreferenced files are reported
  3. template names are unique across categories
  4. every template with a media subtype has its first thumbnail

Set GITHUB_ACTIONS=true to also emit ::warning/::error annotations.

EXIT CODES:
  0 - Success (warnings allowed)
  1 - Validation failure, or index.json/index.schema.json missing or invalid
"#)]
pub struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub args: validate::ValidateArgs,
}
