/*!
 * Integration tests for the translated-string reinjection hook
 */

use layout_bridge::bridge::{
    PageBuilderHooks, ReinjectionOutcome, TranslationResult, TranslationResults,
};
use layout_bridge::layout::{LayoutLookup, MemoryMetaStore, MetaStore};
use layout_bridge::{BridgeError, LayoutDocument, TranslationBridge};

use crate::common::{KIND, META_KEY, bridge_with_layout, init_logging, json, layout_of};

const ORIGINAL: &str = r#"{"elements":[{"id":1,"text":"A"},{"id":2,"text":"B"}]}"#;

fn stored_json(bridge: &TranslationBridge<MemoryMetaStore>, post_id: u64) -> serde_json::Value {
    let raw = bridge
        .layouts()
        .inner()
        .get_meta(post_id, META_KEY)
        .unwrap()
        .expect("layout should be stored");
    json(&raw)
}

#[test]
fn test_stringTranslated_withCompleteResult_shouldWriteTranslatedCopy() {
    init_logging();
    let bridge = bridge_with_layout(1, ORIGINAL);
    let results: TranslationResults =
        serde_json::from_str(r#"{"example-element-1": {"fr": {"status":10,"value":"X"}}}"#).unwrap();

    let outcome = bridge.string_translated(KIND, 2, 1, &results, "fr").unwrap();

    assert!(matches!(outcome, ReinjectionOutcome::Applied { translated_post_id: 2, .. }));
    assert_eq!(
        stored_json(&bridge, 2),
        json(r#"{"elements":[{"id":1,"text":"X"},{"id":2,"text":"B"}]}"#)
    );
    // The original is never modified
    assert_eq!(stored_json(&bridge, 1), json(ORIGINAL));
}

#[test]
fn test_stringTranslated_withIncompleteStatus_shouldKeepOriginalText() {
    init_logging();
    let bridge = bridge_with_layout(1, ORIGINAL);
    let results = TranslationResults::new()
        .with("example-element-1", "fr", TranslationResult::new(0, "X"))
        .with("example-element-2", "fr", TranslationResult::new(1, "Y"));

    let outcome = bridge.string_translated(KIND, 2, 1, &results, "fr").unwrap();

    assert_eq!(outcome.report().unwrap().incomplete.len(), 2);
    assert_eq!(stored_json(&bridge, 2), json(ORIGINAL));
}

#[test]
fn test_stringTranslated_withOtherLanguageOnly_shouldKeepOriginalText() {
    init_logging();
    let bridge = bridge_with_layout(1, ORIGINAL);
    let results = TranslationResults::new()
        .with("example-element-1", "de", TranslationResult::complete("Ja"));

    let outcome = bridge.string_translated(KIND, 2, 1, &results, "fr").unwrap();

    assert_eq!(
        outcome.report().unwrap().missing_language,
        vec!["example-element-1".to_string()]
    );
    assert_eq!(stored_json(&bridge, 2), json(ORIGINAL));
}

#[test]
fn test_stringTranslated_withUnmatchedId_shouldApplyOnlyMatchingEntries() {
    init_logging();
    let bridge = bridge_with_layout(1, ORIGINAL);
    let results = TranslationResults::new()
        .with("example-element-2", "fr", TranslationResult::complete("Deux"))
        .with("example-element-77", "fr", TranslationResult::complete("Nope"));

    let outcome = bridge.string_translated(KIND, 2, 1, &results, "fr").unwrap();

    let report = outcome.report().unwrap();
    assert_eq!(report.applied, vec![2]);
    assert_eq!(report.unmatched, vec!["example-element-77".to_string()]);
    assert_eq!(
        stored_json(&bridge, 2),
        json(r#"{"elements":[{"id":1,"text":"A"},{"id":2,"text":"Deux"}]}"#)
    );
}

#[test]
fn test_stringTranslated_withForeignKind_shouldNotWrite() {
    init_logging();
    let bridge = bridge_with_layout(1, ORIGINAL);
    let results = TranslationResults::new()
        .with("example-element-1", "fr", TranslationResult::complete("X"));

    let outcome = bridge
        .string_translated("Another Builder", 2, 1, &results, "fr")
        .unwrap();

    assert_eq!(outcome, ReinjectionOutcome::Skipped);
    assert_eq!(bridge.layouts().load(2).unwrap(), LayoutLookup::Missing);
    assert_eq!(bridge.layouts().inner().len(), 1);
}

#[test]
fn test_stringTranslated_withMissingOriginal_shouldNotWrite() {
    init_logging();
    let bridge = TranslationBridge::new(MemoryMetaStore::new());
    let results = TranslationResults::new()
        .with("example-element-1", "fr", TranslationResult::complete("X"));

    let outcome = bridge.string_translated(KIND, 2, 1, &results, "fr").unwrap();

    assert_eq!(outcome, ReinjectionOutcome::MissingOriginal { original_post_id: 1 });
    assert!(bridge.layouts().inner().is_empty());
}

#[test]
fn test_stringTranslated_withMalformedOriginal_shouldReturnErrorWithoutWriting() {
    init_logging();
    let bridge = bridge_with_layout(1, "not json at all");
    let results = TranslationResults::new();

    let result = bridge.string_translated(KIND, 2, 1, &results, "fr");

    assert!(matches!(result, Err(BridgeError::MalformedLayout { post_id: 1, .. })));
    assert_eq!(bridge.layouts().inner().len(), 1);
}

#[test]
fn test_stringTranslated_withDuplicateIds_shouldUpdateAllMatches() {
    init_logging();
    let bridge = bridge_with_layout(
        1,
        r#"{"elements":[{"id":1,"text":"A"},{"id":1,"text":"A again"},{"id":2,"text":"B"}]}"#,
    );
    let results = TranslationResults::new()
        .with("example-element-1", "fr", TranslationResult::complete("X"));

    let outcome = bridge.string_translated(KIND, 2, 1, &results, "fr").unwrap();

    assert_eq!(outcome.report().unwrap().updated_elements, 2);
    assert_eq!(
        stored_json(&bridge, 2),
        json(r#"{"elements":[{"id":1,"text":"X"},{"id":1,"text":"X"},{"id":2,"text":"B"}]}"#)
    );
}

#[test]
fn test_stringTranslated_shouldCarryUnknownFieldsIntoTranslation() {
    init_logging();
    let bridge = bridge_with_layout(
        1,
        r##"{"elements":[{"id":1,"text":"A","align":"center"}],"background":"#fff"}"##,
    );
    let results = TranslationResults::new()
        .with("example-element-1", "es", TranslationResult::complete("Hola"));

    bridge.string_translated(KIND, 3, 1, &results, "es").unwrap();

    assert_eq!(
        stored_json(&bridge, 3),
        json(r##"{"elements":[{"id":1,"text":"Hola","align":"center"}],"background":"#fff"}"##)
    );
}

#[test]
fn test_stringTranslated_overExistingTranslation_shouldReplaceIt() {
    init_logging();
    let bridge = bridge_with_layout(1, ORIGINAL);
    bridge
        .layouts()
        .save(2, &LayoutDocument::new(Vec::new()))
        .unwrap();
    let results = TranslationResults::new()
        .with("example-element-2", "fr", TranslationResult::complete("Bé"));

    bridge.string_translated(KIND, 2, 1, &results, "fr").unwrap();

    let translated = layout_of(&bridge, 2);
    assert_eq!(translated.len(), 2);
    assert_eq!(translated.elements[1].text, "Bé");
}

#[test]
fn test_stringTranslated_withStatusAsString_shouldApplyTranslation() {
    init_logging();
    let bridge = bridge_with_layout(1, ORIGINAL);
    let results: TranslationResults = serde_json::from_str(
        r#"{"example-element-1": {"fr": {"status":"10","value":"X"}},
            "example-element-2": {"fr": {"status":"2","value":"Y"}}}"#,
    )
    .unwrap();

    let outcome = bridge.string_translated(KIND, 2, 1, &results, "fr").unwrap();

    let report = outcome.report().unwrap();
    assert_eq!(report.applied, vec![1]);
    assert_eq!(report.incomplete, vec!["example-element-2".to_string()]);
    assert_eq!(
        stored_json(&bridge, 2),
        json(r#"{"elements":[{"id":1,"text":"X"},{"id":2,"text":"B"}]}"#)
    );
}

#[test]
fn test_stringTranslated_withStringElementIds_shouldMatchNumericNames() {
    init_logging();
    let bridge = bridge_with_layout(1, r#"{"elements":[{"id":"1","text":"A"},{"id":"2","text":"B"}]}"#);
    let results = TranslationResults::new()
        .with("example-element-2", "fr", TranslationResult::complete("Deux"));

    let outcome = bridge.string_translated(KIND, 2, 1, &results, "fr").unwrap();

    assert_eq!(outcome.report().unwrap().applied, vec![2]);
    assert_eq!(
        stored_json(&bridge, 2),
        json(r#"{"elements":[{"id":1,"text":"A"},{"id":2,"text":"Deux"}]}"#)
    );
}
