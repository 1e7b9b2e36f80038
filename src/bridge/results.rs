/*!
 * Translation results handed back by the host.
 *
 * The host sends a map keyed by registration name; each value maps a
 * language code to a `{status, value}` pair:
 *
 * ```json
 * {"example-element-1": {"fr": {"status": 10, "value": "Bonjour"}}}
 * ```
 */

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::json_utils::int_or_numeric_string;

/// Status the host uses for a finished translation.
pub const STATUS_COMPLETE: i64 = 10;

/// Outcome for one registered string in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Host status code; only the completion status is usable
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub status: i64,

    /// Translated text
    #[serde(default)]
    pub value: String,
}

impl TranslationResult {
    pub fn new(status: i64, value: impl Into<String>) -> Self {
        Self {
            status,
            value: value.into(),
        }
    }

    /// A finished translation
    pub fn complete(value: impl Into<String>) -> Self {
        Self::new(STATUS_COMPLETE, value)
    }

    /// Whether this result carries the given completion status
    pub fn is_complete(&self, complete_status: i64) -> bool {
        self.status == complete_status
    }
}

/// All translation results for a package, keyed by registration name.
///
/// Names iterate in ascending order, which makes reinjection deterministic
/// when two names resolve to the same element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationResults(BTreeMap<String, HashMap<String, TranslationResult>>);

impl TranslationResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a result for a name and language, builder style
    pub fn with(mut self, name: &str, lang: &str, result: TranslationResult) -> Self {
        self.insert(name, lang, result);
        self
    }

    /// Insert or replace a result for a name and language
    pub fn insert(&mut self, name: &str, lang: &str, result: TranslationResult) {
        self.0
            .entry(name.to_string())
            .or_default()
            .insert(lang.to_string(), result);
    }

    /// Result for a name in a language
    pub fn get(&self, name: &str, lang: &str) -> Option<&TranslationResult> {
        self.0.get(name).and_then(|by_lang| by_lang.get(lang))
    }

    /// Iterate over names with their per-language results
    pub fn iter(&self) -> impl Iterator<Item = (&String, &HashMap<String, TranslationResult>)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
