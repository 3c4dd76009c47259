//! Cross-referencing of manifest entries and files on disk.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::listing::TemplatesDir;
use crate::models::Manifest;
use crate::outcome::CheckOutcome;

/// Highest thumbnail index probed for each template.
///
/// Thumbnails numbered above this bound are never part of the referenced
/// set. Orphan detection still accepts them through the name pattern.
pub const MAX_THUMBNAILS: u32 = 9;

/// Files the manifest refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    /// `<name>.json` for every named template
    pub workflows: BTreeSet<String>,
    /// Probed thumbnails that exist on disk
    pub thumbnails: BTreeSet<String>,
    /// Declared media subtypes per template name; an empty subtype means the
    /// template declared none
    subtypes: BTreeMap<String, BTreeSet<String>>,
}

impl References {
    /// Whether `file` is named `<template>-<digits>.<ext>` for a referenced
    /// template.
    ///
    /// When the template declares a media subtype, `<ext>` must equal it.
    pub fn matches_media(&self, file: &str) -> bool {
        self.subtypes.iter().any(|(name, subtypes)| {
            let Some(rest) = file
                .strip_prefix(name.as_str())
                .and_then(|rest| rest.strip_prefix('-'))
            else {
                return false;
            };

            let (index, ext) = match rest.split_once('.') {
                Some((index, ext)) => (index, Some(ext)),
                None => (rest, None),
            };

            if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
                return false;
            }

            subtypes
                .iter()
                .any(|subtype| subtype.is_empty() || ext == Some(subtype.as_str()))
        })
    }
}

/// Checks that referenced files exist and that every file is referenced.
pub struct FileConsistencyCheck;

impl FileConsistencyCheck {
    /// Collect referenced workflows and thumbnails.
    ///
    /// Templates without a name get an error and are otherwise ignored.
    pub fn collect_references(
        manifest: &Manifest,
        dir: &TemplatesDir,
        outcome: &mut CheckOutcome,
    ) -> References {
        let mut references = References::default();

        for (category, template) in manifest.templates() {
            if template.name.is_empty() {
                outcome.add_error(format!(
                    "Template in category '{}' missing name",
                    category.raw_title()
                ));
                continue;
            }

            references.workflows.insert(template.workflow_file());
            references
                .subtypes
                .entry(template.name.clone())
                .or_default()
                .insert(template.media_subtype.clone());

            if template.media_subtype.is_empty() {
                continue;
            }

            for index in 1..=MAX_THUMBNAILS {
                let thumbnail = template.thumbnail_file(index);
                if dir.contains(&thumbnail) {
                    references.thumbnails.insert(thumbnail);
                }
            }
        }

        references
    }

    /// Run the check.
    ///
    /// `special_files` are excluded from orphan detection.
    pub fn run(manifest: &Manifest, dir: &TemplatesDir, special_files: &[&str]) -> CheckOutcome {
        let mut outcome = CheckOutcome::new();
        let references = Self::collect_references(manifest, dir, &mut outcome);

        debug!(
            "Manifest references {} workflows and {} existing thumbnails",
            references.workflows.len(),
            references.thumbnails.len()
        );

        for workflow in &references.workflows {
            if !dir.contains(workflow) {
                outcome.add_error(format!("Referenced workflow file not found: {}", workflow));
            }
        }

        let (workflow_files, media_files): (Vec<String>, Vec<String>) = dir
            .files()
            .into_iter()
            .filter(|file| !special_files.contains(&file.as_str()))
            .partition(|file| file.ends_with(".json"));

        for file in &workflow_files {
            if !references.workflows.contains(file) {
                outcome.add_warning(format!("Workflow file not referenced in index.json: {}", file));
            }
        }

        for file in &media_files {
            if !references.matches_media(file) {
                outcome.add_warning(format!("Media file not referenced in index.json: {}", file));
            }
        }

        outcome
    }
}
