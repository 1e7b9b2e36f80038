/*!
 * Error types for the layout-bridge crate.
 *
 * Each layer has its own error enum, built with thiserror. The bridge
 * surfaces `BridgeError`, which wraps the lower-level failures so callers
 * can tell "nothing to do" outcomes (see `bridge::outcome`) apart from
 * genuine faults.
 */

use thiserror::Error;

/// Errors raised while decoding or encoding a layout document
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The stored value is not a valid layout document
    #[error("Failed to parse layout document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document declares a schema version this crate cannot read
    #[error("Unsupported layout schema version {found} (supported up to {supported})")]
    UnsupportedVersion {
        /// Version found in the document
        found: u32,
        /// Highest version understood by this crate
        supported: u32,
    },
}

/// Errors raised by metadata stores
#[derive(Error, Debug)]
pub enum StoreError {
    /// The SQLite backend failed
    #[error("Database error: {0}")]
    Database(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Database(error.to_string())
    }
}

impl From<anyhow::Error> for StoreError {
    fn from(error: anyhow::Error) -> Self {
        Self::Database(format!("{:#}", error))
    }
}

/// Errors raised when decoding a registration name back into a key
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The name does not start with the integration's prefix
    #[error("String name '{name}' does not start with prefix '{prefix}'")]
    MissingPrefix {
        /// The offending name
        name: String,
        /// The expected prefix
        prefix: String,
    },

    /// The remainder after the prefix is not an integer element id
    #[error("String name '{0}' does not end with a numeric element id")]
    InvalidId(String),
}

/// Errors surfaced by the translation bridge hooks
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The layout stored on a post could not be decoded
    #[error("Malformed layout on post {post_id}: {source}")]
    MalformedLayout {
        /// Post whose metadata is malformed
        post_id: u64,
        /// Underlying decode failure
        #[source]
        source: LayoutError,
    },

    /// Strict reinjection found strings that map to no element
    #[error("{} translated string(s) do not match any element: {}", .0.len(), .0.join(", "))]
    UnmatchedStrings(Vec<String>),

    /// The host registry rejected an entry
    #[error("String registry error: {0}")]
    Registry(String),

    /// Layout encoding failed
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Metadata store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
