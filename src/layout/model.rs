/*!
 * Layout document model.
 *
 * A page-builder layout is stored as one JSON object per post:
 * `{"elements":[{"id":1,"text":"..."}, ...]}`. These types give that shape
 * a schema while keeping every field the crate does not understand, so a
 * translated copy carries the original layout through untouched.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::LayoutError;
use crate::json_utils::int_or_numeric_string;

/// Highest layout schema version this crate can read.
pub const LAYOUT_SCHEMA_VERSION: u32 = 1;

/// Complete page-builder layout attached to a post.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// Schema version. Absent means version 1 and is not written back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Translatable elements in display order
    #[serde(default)]
    pub elements: Vec<Element>,

    /// Fields outside the known schema, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One translatable unit of a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Element id, unique within a document. Ids stored as numeric strings
    /// are read as numbers and written back as numbers.
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub id: i64,

    /// Text shown for this element
    pub text: String,

    /// Fields outside the known schema, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Element {
    /// Create an element with no extra fields.
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            extra: Map::new(),
        }
    }
}

impl LayoutDocument {
    /// Create a document from a list of elements.
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            version: None,
            elements,
            extra: Map::new(),
        }
    }

    /// The two-element layout written to posts that have none yet, so there
    /// is something to translate.
    pub fn sample() -> Self {
        Self::new(vec![
            Element::new(1, "Text to translate for first field"),
            Element::new(2, "Text to translate for second field"),
        ])
    }

    /// Decode a stored layout, rejecting newer schema versions.
    pub fn from_json(raw: &str) -> Result<Self, LayoutError> {
        let document: Self = serde_json::from_str(raw)?;
        let version = document.schema_version();
        if version > LAYOUT_SCHEMA_VERSION {
            return Err(LayoutError::UnsupportedVersion {
                found: version,
                supported: LAYOUT_SCHEMA_VERSION,
            });
        }
        Ok(document)
    }

    /// Encode the layout in its stored form.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Effective schema version of this document.
    pub fn schema_version(&self) -> u32 {
        self.version.unwrap_or(1)
    }

    /// Overwrite the text of every element with the given id.
    ///
    /// Returns how many elements were updated. Ids are expected to be
    /// unique, but when they are not all duplicates receive the text.
    pub fn set_text(&mut self, id: i64, text: &str) -> usize {
        let mut updated = 0;
        for element in self.elements.iter_mut().filter(|e| e.id == id) {
            element.text = text.to_string();
            updated += 1;
        }
        updated
    }

    /// Look up the first element with the given id.
    pub fn element(&self, id: i64) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
