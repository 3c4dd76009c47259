//! JSON Schema validation of the manifest document.

use jsonschema::JSONSchema;
use serde_json::Value;
use tracing::debug;

use crate::outcome::CheckOutcome;

/// Validates the manifest's shape against the catalog schema.
pub struct SchemaCheck;

impl SchemaCheck {
    /// Validate `manifest` against an already parsed `schema`.
    ///
    /// Only the first violation is reported, followed by its location when
    /// it is not the document root. A schema that fails to compile is
    /// reported as an unexpected error.
    pub fn run(manifest: &Value, schema: &Value) -> CheckOutcome {
        let mut outcome = CheckOutcome::new();

        let compiled = match JSONSchema::compile(schema) {
            Ok(compiled) => compiled,
            Err(e) => {
                outcome.add_error(format!("Unexpected error during validation: {}", e));
                return outcome;
            }
        };

        if let Err(mut errors) = compiled.validate(manifest) {
            if let Some(error) = errors.next() {
                let path = error.instance_path.clone().into_vec().join(".");
                debug!("Schema violation at '{}': {}", path, error);

                outcome.add_error(format!("Schema validation error: {}", error));
                if !path.is_empty() {
                    outcome.add_error(format!("  at path: {}", path));
                }
            }
        }

        outcome
    }
}
