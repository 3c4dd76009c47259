//! Check orchestration.

use std::io::Write;

use tracing::{debug, info};

use crate::checks::{DuplicateNameCheck, FileConsistencyCheck, RequiredThumbnailCheck, SchemaCheck};
use crate::config::CheckConfig;
use crate::error::CheckResult;
use crate::listing::TemplatesDir;
use crate::loader::CatalogInputs;
use crate::outcome::CheckOutcome;
use crate::report::Reporter;

/// The checks, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Schema,
    FileConsistency,
    DuplicateNames,
    RequiredThumbnails,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Schema,
        Stage::FileConsistency,
        Stage::DuplicateNames,
        Stage::RequiredThumbnails,
    ];

    /// 1-based position in the run.
    pub fn number(&self) -> usize {
        match self {
            Stage::Schema => 1,
            Stage::FileConsistency => 2,
            Stage::DuplicateNames => 3,
            Stage::RequiredThumbnails => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Schema => "schema",
            Stage::FileConsistency => "file-consistency",
            Stage::DuplicateNames => "duplicate-names",
            Stage::RequiredThumbnails => "required-thumbnails",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a stage ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Passed,
    PassedWithWarnings,
    Failed,
}

/// Outcome of one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub stage: Stage,
    pub outcome: CheckOutcome,
}

impl StageReport {
    pub fn status(&self) -> StageStatus {
        if !self.outcome.valid {
            StageStatus::Failed
        } else if self.outcome.has_warnings() {
            StageStatus::PassedWithWarnings
        } else {
            StageStatus::Passed
        }
    }
}

/// Aggregated outcome of a full run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub stages: Vec<StageReport>,
}

impl ValidationReport {
    /// Record a finished stage and return it.
    pub fn push(&mut self, stage: Stage, outcome: CheckOutcome) -> &StageReport {
        self.stages.push(StageReport { stage, outcome });
        &self.stages[self.stages.len() - 1]
    }

    /// All errors, in stage order.
    pub fn errors(&self) -> Vec<&str> {
        self.stages
            .iter()
            .flat_map(|s| s.outcome.errors.iter().map(String::as_str))
            .collect()
    }

    /// All warnings, in stage order.
    pub fn warnings(&self) -> Vec<&str> {
        self.stages
            .iter()
            .flat_map(|s| s.outcome.warnings.iter().map(String::as_str))
            .collect()
    }

    /// Warnings never fail a run.
    pub fn passed(&self) -> bool {
        self.stages.iter().all(|s| s.outcome.errors.is_empty())
    }

    pub fn stage(&self, stage: Stage) -> Option<&StageReport> {
        self.stages.iter().find(|s| s.stage == stage)
    }
}

/// Runs the catalog checks for one templates directory.
pub struct Validator {
    config: CheckConfig,
    dir: TemplatesDir,
}

impl Validator {
    pub fn new(config: CheckConfig) -> Self {
        let dir = TemplatesDir::new(config.templates_dir.clone());
        Self { config, dir }
    }

    /// Load the manifest and schema.
    pub fn load(&self) -> CheckResult<CatalogInputs> {
        CatalogInputs::load(&self.config)
    }

    /// Run a single stage.
    pub fn run_stage(&self, stage: Stage, inputs: &CatalogInputs) -> CheckOutcome {
        let outcome = match stage {
            Stage::Schema => SchemaCheck::run(&inputs.manifest_document, &inputs.schema_document),
            Stage::FileConsistency => FileConsistencyCheck::run(
                &inputs.manifest,
                &self.dir,
                &self.config.special_files(),
            ),
            Stage::DuplicateNames => DuplicateNameCheck::run(&inputs.manifest),
            Stage::RequiredThumbnails => RequiredThumbnailCheck::run(&inputs.manifest, &self.dir),
        };

        debug!(
            "Stage {} finished with {} errors and {} warnings",
            stage,
            outcome.errors.len(),
            outcome.warnings.len()
        );
        outcome
    }

    /// Load inputs, run every stage and write the report as it goes.
    ///
    /// Every stage runs whatever the earlier stages found. An input that
    /// cannot be loaded is reported and returned as an error before any
    /// stage runs.
    pub fn execute<W: Write>(&self, reporter: &mut Reporter<W>) -> CheckResult<ValidationReport> {
        info!("Validating templates in {:?}", self.config.templates_dir);
        reporter.header(self.config.templates_dir())?;

        let inputs = match self.load() {
            Ok(inputs) => inputs,
            Err(e) => {
                reporter.fatal(&e)?;
                return Err(e);
            }
        };

        let mut report = ValidationReport::default();
        for stage in Stage::ALL {
            reporter.stage_started(stage)?;
            let stage_report = report.push(stage, self.run_stage(stage, &inputs));
            reporter.stage_finished(stage_report)?;
        }

        reporter.summary(&report)?;

        info!(
            "Validation finished: {} errors, {} warnings",
            report.errors().len(),
            report.warnings().len()
        );
        Ok(report)
    }
}
