/*!
 * Registration string keys.
 *
 * Internally a registered string is identified by the element it came from.
 * On the wire the host only knows a flat name such as `example-element-7`,
 * so `StringKey` converts between the two.
 */

use crate::errors::KeyError;

/// Default prefix of registration names.
pub const DEFAULT_NAME_PREFIX: &str = "example-element-";

/// Structured identity of a registered string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringKey {
    /// Id of the layout element the string belongs to
    pub element_id: i64,
}

impl StringKey {
    pub fn new(element_id: i64) -> Self {
        Self { element_id }
    }

    /// Registration name for this key, e.g. `example-element-7`
    pub fn to_name(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.element_id)
    }

    /// Recover the key from a registration name.
    ///
    /// The remainder after the prefix must be a base-10 integer; surrounding
    /// whitespace is tolerated and leading zeros are accepted.
    pub fn parse(name: &str, prefix: &str) -> Result<Self, KeyError> {
        let rest = name.strip_prefix(prefix).ok_or_else(|| KeyError::MissingPrefix {
            name: name.to_string(),
            prefix: prefix.to_string(),
        })?;

        rest.trim()
            .parse::<i64>()
            .map(Self::new)
            .map_err(|_| KeyError::InvalidId(name.to_string()))
    }
}
