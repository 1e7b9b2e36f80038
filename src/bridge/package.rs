/*!
 * Host-supplied translation package descriptor.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifies which integration a translation job belongs to.
///
/// Only `kind` is interpreted; everything else the host sends is kept in
/// `context` and forwarded unchanged with every registered string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Discriminator matched against the integration name
    pub kind: String,

    /// Host context passed through untouched
    #[serde(flatten)]
    pub context: Map<String, Value>,
}

impl PackageDescriptor {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            context: Map::new(),
        }
    }

    /// Add a context field, builder style
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Whether this package belongs to the given integration
    pub fn is_for(&self, integration: &str) -> bool {
        self.kind == integration
    }
}
