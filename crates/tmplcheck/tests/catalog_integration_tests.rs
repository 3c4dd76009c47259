//! Integration tests for full catalog validation runs.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};

use tmplcheck::{CheckConfig, CheckError, Reporter, Stage, StageStatus, Validator};

fn schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "array",
        "items": {
            "type": "object",
            "required": ["title", "templates"],
            "properties": {
                "title": { "type": "string" },
                "templates": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["name"],
                        "properties": {
                            "name": { "type": "string" },
                            "mediaSubtype": { "type": "string" }
                        }
                    }
                }
            }
        }
    })
}

/// Create a catalog directory with the given manifest and empty files.
fn catalog(manifest: Value, files: &[&str]) -> TempDir {
    let temp = tempdir().unwrap();
    write_json(&temp.path().join("index.json"), &manifest);
    write_json(&temp.path().join("index.schema.json"), &schema());
    for file in files {
        fs::write(temp.path().join(file), "").unwrap();
    }
    temp
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn flux_manifest() -> Value {
    json!([
        {
            "title": "Basics",
            "templates": [{ "name": "flux_basic", "mediaSubtype": "webp" }]
        }
    ])
}

fn validate(dir: &Path) -> (Result<tmplcheck::ValidationReport, CheckError>, String) {
    let validator = Validator::new(CheckConfig::new(dir));
    let mut reporter = Reporter::new(Vec::new());
    let result = validator.execute(&mut reporter);
    let output = String::from_utf8(reporter.into_inner()).unwrap();
    (result, output)
}

#[test]
fn test_clean_catalog_passes() {
    let temp = catalog(
        flux_manifest(),
        &["flux_basic.json", "flux_basic-1.webp", "README.md", ".gitignore"],
    );

    let (result, output) = validate(temp.path());
    let report = result.unwrap();

    assert!(report.passed());
    assert!(report.warnings().is_empty());
    assert!(report
        .stages
        .iter()
        .all(|s| s.status() == StageStatus::Passed));
    assert!(output.contains("✅ All validations passed!"));
}

#[test]
fn test_empty_name_single_error() {
    let manifest = json!([
        { "title": "Video", "templates": [{ "name": "", "mediaSubtype": "webp" }] }
    ]);
    let temp = catalog(manifest, &[]);

    let (result, _) = validate(temp.path());
    let report = result.unwrap();
    let consistency = report.stage(Stage::FileConsistency).unwrap();

    assert_eq!(
        consistency.outcome.errors,
        vec!["Template in category 'Video' missing name"]
    );
    assert!(report.stage(Stage::RequiredThumbnails).unwrap().outcome.valid);
}

#[test]
fn test_required_thumbnail_toggles_with_file() {
    let temp = catalog(flux_manifest(), &["flux_basic.json", "flux_basic-1.webp"]);

    let (result, _) = validate(temp.path());
    assert!(result.unwrap().passed());

    fs::remove_file(temp.path().join("flux_basic-1.webp")).unwrap();

    let (result, _) = validate(temp.path());
    let report = result.unwrap();
    assert_eq!(
        report.stage(Stage::RequiredThumbnails).unwrap().outcome.errors,
        vec!["Missing required thumbnail: flux_basic-1.webp"]
    );
    assert_eq!(report.errors().len(), 1);
}

#[test]
fn test_duplicate_name_across_categories() {
    let manifest = json!([
        { "title": "A", "templates": [{ "name": "flux_basic" }] },
        { "title": "B", "templates": [{ "name": "flux_basic" }] }
    ]);
    let temp = catalog(manifest, &["flux_basic.json"]);

    let (result, output) = validate(temp.path());
    let report = result.unwrap();

    assert_eq!(
        report.errors(),
        vec!["Duplicate template name 'flux_basic' found in categories 'A' and 'B'"]
    );
    assert!(output.contains("❌ Duplicate names found"));
    assert!(output.contains("❌ Validation failed with 1 error(s):"));
}

#[test]
fn test_orphaned_workflow_is_warning_only() {
    let temp = catalog(
        flux_manifest(),
        &["flux_basic.json", "flux_basic-1.webp", "orphan.json"],
    );

    let (result, output) = validate(temp.path());
    let report = result.unwrap();

    assert!(report.passed());
    assert!(report.errors().is_empty());
    assert_eq!(
        report.warnings(),
        vec!["Workflow file not referenced in index.json: orphan.json"]
    );
    assert!(output.contains("⚠️  File consistency check passed with warnings"));
    assert!(output.contains("✅ All validations passed with 1 warning(s)!"));
}

#[test]
fn test_wrong_extension_thumbnail_is_orphaned() {
    let temp = catalog(
        flux_manifest(),
        &["flux_basic.json", "flux_basic-1.webp", "flux_basic-1.png"],
    );

    let (result, _) = validate(temp.path());
    let report = result.unwrap();

    assert_eq!(
        report.warnings(),
        vec!["Media file not referenced in index.json: flux_basic-1.png"]
    );
}

#[test]
fn test_schema_violation_does_not_stop_other_checks() {
    let manifest = json!([
        { "title": "A", "templates": [{ "name": "flux_basic", "mediaSubtype": 3 }] },
        { "title": "B", "templates": [{ "name": "flux_basic" }] }
    ]);
    let temp = catalog(manifest, &["flux_basic.json"]);

    let (result, output) = validate(temp.path());
    let report = result.unwrap();

    assert_eq!(report.stages.len(), 4);
    assert_eq!(
        report.stage(Stage::Schema).unwrap().status(),
        StageStatus::Failed
    );
    assert_eq!(
        report.stage(Stage::DuplicateNames).unwrap().status(),
        StageStatus::Failed
    );
    assert!(report
        .errors()
        .contains(&"  at path: 0.templates.0.mediaSubtype"));
    assert!(output.contains("4\u{fe0f}\u{20e3}  Checking required thumbnails..."));
}

#[test]
fn test_repeated_runs_are_identical() {
    let manifest = json!([
        { "title": "A", "templates": [{ "name": "flux_basic", "mediaSubtype": "webp" }, { "name": "" }] },
        { "title": "B", "templates": [{ "name": "flux_basic" }, { "name": "sdxl", "mediaSubtype": "png" }] }
    ]);
    let temp = catalog(
        manifest,
        &["zeta.json", "alpha.json", "notes.txt", "flux_basic-3.webp", "sdxl-1.jpg"],
    );

    let (first, first_output) = validate(temp.path());
    let (second, second_output) = validate(temp.path());

    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(first_output, second_output);
}

#[test]
fn test_missing_manifest_aborts_before_checks() {
    let temp = tempdir().unwrap();
    write_json(&temp.path().join("index.schema.json"), &schema());

    let (result, output) = validate(temp.path());
    let err = result.unwrap_err();

    assert!(matches!(err, CheckError::NotFound { .. }));
    assert!(err.is_input_error());
    assert!(output.contains(&format!(
        "❌ Error: index.json not found at {}",
        temp.path().join("index.json").display()
    )));
    assert!(!output.contains("1\u{fe0f}\u{20e3}"));
    assert!(!output.contains("=================================================="));
}

#[test]
fn test_malformed_manifest_aborts() {
    let temp = catalog(json!([]), &[]);
    fs::write(temp.path().join("index.json"), "[{ \"title\": ").unwrap();

    let (result, output) = validate(temp.path());

    assert!(matches!(result, Err(CheckError::Parse { .. })));
    assert!(output.contains("❌ Error loading index.json:"));
    assert!(!output.contains("Checking file consistency"));
}

#[test]
fn test_malformed_schema_aborts() {
    let temp = catalog(flux_manifest(), &["flux_basic.json", "flux_basic-1.webp"]);
    fs::write(temp.path().join("index.schema.json"), "{ \"type\": ").unwrap();

    let (result, output) = validate(temp.path());

    assert!(matches!(result, Err(CheckError::Parse { ref file, .. }) if file == "index.schema.json"));
    assert!(output.contains("❌ Error loading index.schema.json:"));
    assert!(!output.contains("1\u{fe0f}\u{20e3}"));
}
