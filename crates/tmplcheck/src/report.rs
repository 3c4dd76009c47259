//! Human-readable report and CI annotations.

use std::io::{self, Write};
use std::path::Path;

use crate::error::CheckError;
use crate::validator::{Stage, StageReport, StageStatus, ValidationReport};

/// Environment variable set to `true` by GitHub Actions runners.
pub const CI_ENV_VAR: &str = "GITHUB_ACTIONS";

/// Whether the process runs inside GitHub Actions.
pub fn running_in_ci() -> bool {
    std::env::var(CI_ENV_VAR).map_or(false, |value| value == "true")
}

/// Writes the staged progress report.
///
/// With annotations enabled, every warning and error is also written as a
/// `::warning file=..::` / `::error file=..::` workflow command tagged to the
/// manifest path.
pub struct Reporter<W: Write> {
    out: W,
    annotation_file: Option<String>,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            annotation_file: None,
        }
    }

    /// Emit CI annotations tagged to `file`.
    pub fn with_annotations(mut self, file: impl Into<String>) -> Self {
        self.annotation_file = Some(file.into());
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn header(&mut self, templates_dir: &Path) -> io::Result<()> {
        writeln!(self.out, "🔍 Validating workflow templates...")?;
        writeln!(self.out, "   Templates directory: {}", templates_dir.display())
    }

    /// Report an input that could not be loaded.
    pub fn fatal(&mut self, error: &CheckError) -> io::Result<()> {
        match error {
            CheckError::NotFound { .. } => writeln!(self.out, "❌ Error: {}", error),
            _ => writeln!(self.out, "❌ {}", error),
        }
    }

    pub fn stage_started(&mut self, stage: Stage) -> io::Result<()> {
        let title = match stage {
            Stage::Schema => "Validating against JSON schema...",
            Stage::FileConsistency => "Checking file consistency...",
            Stage::DuplicateNames => "Checking for duplicate names...",
            Stage::RequiredThumbnails => "Checking required thumbnails...",
        };
        writeln!(self.out)?;
        writeln!(self.out, "{}\u{fe0f}\u{20e3}  {}", stage.number(), title)
    }

    pub fn stage_finished(&mut self, report: &StageReport) -> io::Result<()> {
        let line = match (report.stage, report.status()) {
            (Stage::Schema, StageStatus::Failed) => "❌ Schema validation failed",
            (Stage::Schema, _) => "✅ Schema validation passed",
            (Stage::FileConsistency, StageStatus::Failed) => "❌ File consistency check failed",
            (Stage::FileConsistency, StageStatus::PassedWithWarnings) => {
                "⚠️  File consistency check passed with warnings"
            }
            (Stage::FileConsistency, StageStatus::Passed) => "✅ File consistency check passed",
            (Stage::DuplicateNames, StageStatus::Failed) => "❌ Duplicate names found",
            (Stage::DuplicateNames, _) => "✅ No duplicate names found",
            (Stage::RequiredThumbnails, StageStatus::Failed) => "❌ Missing thumbnails",
            (Stage::RequiredThumbnails, _) => "✅ All templates have thumbnails",
        };
        writeln!(self.out, "   {}", line)
    }

    /// Write the warnings section and the final summary.
    pub fn summary(&mut self, report: &ValidationReport) -> io::Result<()> {
        let warnings = report.warnings();
        let errors = report.errors();

        if !warnings.is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "Warnings:")?;
            for warning in &warnings {
                writeln!(self.out, "  ⚠️  {}", warning)?;
                self.annotate("warning", warning)?;
            }
        }

        writeln!(self.out)?;
        writeln!(self.out, "{}", "=".repeat(50))?;

        if !errors.is_empty() {
            writeln!(self.out, "❌ Validation failed with {} error(s):", errors.len())?;
            writeln!(self.out)?;
            for error in &errors {
                writeln!(self.out, "   • {}", error)?;
                self.annotate("error", error)?;
            }
        } else if !warnings.is_empty() {
            writeln!(
                self.out,
                "✅ All validations passed with {} warning(s)!",
                warnings.len()
            )?;
        } else {
            writeln!(self.out, "✅ All validations passed!")?;
        }

        self.out.flush()
    }

    fn annotate(&mut self, level: &str, message: &str) -> io::Result<()> {
        match &self.annotation_file {
            Some(file) => writeln!(self.out, "::{} file={}::{}", level, file, message),
            None => Ok(()),
        }
    }
}
