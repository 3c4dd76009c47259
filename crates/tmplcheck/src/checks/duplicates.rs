//! Global uniqueness of template names.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::models::Manifest;
use crate::outcome::CheckOutcome;

/// Reports template names used more than once across the manifest.
pub struct DuplicateNameCheck;

impl DuplicateNameCheck {
    /// Run the check.
    ///
    /// The first occurrence of a name, in manifest order, is never flagged.
    /// Missing names count as the empty name.
    pub fn run(manifest: &Manifest) -> CheckOutcome {
        let mut outcome = CheckOutcome::new();
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for (category, template) in manifest.templates() {
            let title = category.display_title();
            match seen.entry(template.name.as_str()) {
                Entry::Occupied(first) => outcome.add_error(format!(
                    "Duplicate template name '{}' found in categories '{}' and '{}'",
                    template.name,
                    first.get(),
                    title
                )),
                Entry::Vacant(slot) => {
                    slot.insert(title);
                }
            }
        }

        outcome
    }
}
