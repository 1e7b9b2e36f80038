/*!
 * Outcomes of the bridge hooks.
 *
 * A hook that has nothing to do returns an outcome, not an error, so the
 * caller can tell a foreign package or a missing layout apart from a fault.
 */

use serde::Serialize;

use crate::layout::store::PostId;

/// Result of the string registration hook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RegistrationOutcome {
    /// The package belongs to another integration
    Skipped,
    /// The post has no layout and no fallback layout is configured
    Missing { post_id: PostId },
    /// Strings were handed to the registry
    Registered {
        post_id: PostId,
        /// Number of strings registered
        count: usize,
        /// Whether the fallback layout was written to the post first
        created_fallback: bool,
    },
}

impl RegistrationOutcome {
    /// Number of strings registered
    pub fn count(&self) -> usize {
        match self {
            RegistrationOutcome::Registered { count, .. } => *count,
            _ => 0,
        }
    }
}

/// Per-string account of a reinjection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ReinjectionReport {
    /// Element ids whose text was replaced
    pub applied: Vec<i64>,
    /// Number of elements updated (more than `applied` when ids repeat)
    pub updated_elements: usize,
    /// Names whose translation in the language is not complete
    pub incomplete: Vec<String>,
    /// Names with no result for the language
    pub missing_language: Vec<String>,
    /// Names whose element id matches no element
    pub unmatched: Vec<String>,
    /// Names that are not registration names of this integration
    pub invalid: Vec<String>,
}

impl ReinjectionReport {
    /// Names that could not be tied to an element
    pub fn unresolved(&self) -> Vec<String> {
        self.invalid
            .iter()
            .chain(self.unmatched.iter())
            .cloned()
            .collect()
    }
}

/// Result of the translated-string hook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReinjectionOutcome {
    /// The package belongs to another integration
    Skipped,
    /// The original post has no layout, nothing was written
    MissingOriginal { original_post_id: PostId },
    /// A translated layout was written
    Applied {
        translated_post_id: PostId,
        report: ReinjectionReport,
    },
}

impl ReinjectionOutcome {
    pub fn report(&self) -> Option<&ReinjectionReport> {
        match self {
            ReinjectionOutcome::Applied { report, .. } => Some(report),
            _ => None,
        }
    }
}
