//! Required first thumbnail.

use crate::listing::TemplatesDir;
use crate::models::Manifest;
use crate::outcome::CheckOutcome;

/// Reports templates that declare a media subtype but lack `<name>-1.<ext>`.
pub struct RequiredThumbnailCheck;

impl RequiredThumbnailCheck {
    pub fn run(manifest: &Manifest, dir: &TemplatesDir) -> CheckOutcome {
        let mut outcome = CheckOutcome::new();

        for (_, template) in manifest.templates() {
            if template.name.is_empty() || template.media_subtype.is_empty() {
                continue;
            }

            let thumbnail = template.thumbnail_file(1);
            if !dir.contains(&thumbnail) {
                outcome.add_error(format!("Missing required thumbnail: {}", thumbnail));
            }
        }

        outcome
    }
}
