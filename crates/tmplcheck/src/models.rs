//! Manifest data model.
//!
//! The manifest (`index.json`) is an array of categories, each holding an
//! ordered list of templates. Only the fields the checks inspect are
//! modelled; everything else is left to the schema check.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Title used by duplicate reports when a category has no `title`.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Rendering of an absent `title` in missing-name reports.
pub const MISSING_TITLE: &str = "null";

/// One catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Template {
    /// Template name; also the workflow file stem
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,
    /// Thumbnail file extension; empty when the template has no thumbnails
    #[serde(rename = "mediaSubtype", default, deserialize_with = "scalar_string")]
    pub media_subtype: String,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_subtype: String::new(),
        }
    }

    pub fn with_media_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.media_subtype = subtype.into();
        self
    }

    /// Workflow file name, e.g. `flux_basic.json`.
    pub fn workflow_file(&self) -> String {
        format!("{}.json", self.name)
    }

    /// Thumbnail file name for the given index, e.g. `flux_basic-1.webp`.
    pub fn thumbnail_file(&self, index: u32) -> String {
        format!("{}-{}.{}", self.name, index, self.media_subtype)
    }
}

/// A titled group of templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "object_items")]
    pub templates: Vec<Template>,
}

impl Category {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            templates: Vec::new(),
        }
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.templates.push(template);
        self
    }

    /// Title for duplicate reports.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Title as written in the manifest, `null` when absent.
    pub fn raw_title(&self) -> &str {
        self.title.as_deref().unwrap_or(MISSING_TITLE)
    }
}

/// Typed view of the manifest document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub categories: Vec<Category>,
}

impl Manifest {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Build the typed view from a parsed document.
    ///
    /// Interpretation is lenient: elements that are not objects are skipped
    /// and scalar fields are read as text. Shape violations are the schema
    /// check's business.
    pub fn from_value(value: &Value) -> Self {
        let Some(items) = value.as_array() else {
            debug!("Manifest root is not an array, no categories to check");
            return Self::default();
        };

        Self {
            categories: deserialize_objects(items),
        }
    }

    /// All templates paired with their category, in manifest order.
    pub fn templates(&self) -> impl Iterator<Item = (&Category, &Template)> {
        self.categories
            .iter()
            .flat_map(|category| category.templates.iter().map(move |t| (category, t)))
    }
}

/// Deserialize every object in `items`, skipping the rest.
fn deserialize_objects<T: for<'de> Deserialize<'de>>(items: &[Value]) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.is_object())
        .filter_map(|item| match T::deserialize(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!("Skipping manifest entry: {}", e);
                None
            }
        })
        .collect()
}

/// Text of a scalar: strings as-is, numbers in their JSON form.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn optional_scalar_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn object_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: for<'a> Deserialize<'a>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => deserialize_objects(&items),
        _ => Vec::new(),
    })
}
