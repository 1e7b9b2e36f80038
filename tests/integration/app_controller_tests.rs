/*!
 * Integration tests for the application controller behind the CLI
 */

use anyhow::Result;

use layout_bridge::app_config::Config;
use layout_bridge::app_controller::{Controller, similar_language};
use layout_bridge::bridge::{RegistrationOutcome, ReinjectionOutcome, TranslationResult, TranslationResults};
use layout_bridge::layout::{MemoryMetaStore, MetaStore};
use layout_bridge::LayoutDocument;

use crate::common::{KIND, META_KEY, create_temp_dir, create_test_file, init_logging, json};

const ORIGINAL: &str = r#"{"elements":[{"id":1,"text":"A"},{"id":2,"text":"B"}]}"#;

fn controller_with_layout(post_id: u64, raw: &str, config: Config) -> Result<Controller<MemoryMetaStore>> {
    let store = MemoryMetaStore::new();
    store.set_meta(post_id, META_KEY, raw)?;
    Controller::with_config(store, config)
}

#[test]
fn test_controller_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.integration.meta_key = String::new();

    assert!(Controller::with_config(MemoryMetaStore::new(), config).is_err());
}

#[test]
fn test_register_shouldWriteOneJsonLinePerString() -> Result<()> {
    init_logging();
    let controller = Controller::with_config(MemoryMetaStore::new(), Config::default())?;
    let package = controller.resolve_package(None, None)?;
    let mut output = Vec::new();

    let outcome = controller.register(4, &package, &mut output)?;

    assert_eq!(outcome.count(), 2);
    let lines: Vec<serde_json::Value> = String::from_utf8(output)?
        .lines()
        .map(json)
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["name"], "example-element-1");
    assert_eq!(lines[1]["value"], "Text to translate for second field");
    assert_eq!(lines[0]["package"]["kind"], KIND);
    assert_eq!(lines[0]["type"], "LINE");
    Ok(())
}

#[test]
fn test_resolvePackage_withDescriptorFile_shouldOverrideKind() -> Result<()> {
    init_logging();
    let temp_dir = create_temp_dir()?;
    let path = create_test_file(
        temp_dir.path(),
        "package.json",
        r#"{"kind":"Another Builder","name":"7","title":"About"}"#,
    )?;
    let controller = controller_with_layout(7, ORIGINAL, Config::default())?;

    let package = controller.resolve_package(Some(KIND.to_string()), Some(path.as_path()))?;
    assert_eq!(package.kind, "Another Builder");
    assert_eq!(package.context.get("title"), Some(&serde_json::Value::from("About")));

    let mut output = Vec::new();
    let outcome = controller.register(7, &package, &mut output)?;
    assert_eq!(outcome, RegistrationOutcome::Skipped);
    assert!(output.is_empty());
    Ok(())
}

#[test]
fn test_resolvePackage_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = create_temp_dir()?;
    let controller = Controller::with_config(MemoryMetaStore::new(), Config::default())?;

    assert!(controller
        .resolve_package(None, Some(temp_dir.path().join("none.json").as_path()))
        .is_err());
    Ok(())
}

#[test]
fn test_translate_withoutLang_shouldUseConfiguredDefault() -> Result<()> {
    init_logging();
    let temp_dir = create_temp_dir()?;
    let results = create_test_file(
        temp_dir.path(),
        "results.json",
        r#"{"example-element-2": {"de": {"status": "10", "value": "Zwei"},
                                  "fr": {"status": 10, "value": "Deux"}}}"#,
    )?;
    let config = Config {
        default_language: "de".to_string(),
        ..Config::default()
    };
    let controller = controller_with_layout(1, ORIGINAL, config)?;

    assert_eq!(controller.resolve_language(None), "de");
    assert_eq!(controller.resolve_language(Some("fr".to_string())), "fr");

    let outcome = controller.translate(1, 2, &results, None, None)?;

    assert_eq!(outcome.report().map(|r| r.applied.clone()), Some(vec![2]));
    assert_eq!(
        controller.show(2)?,
        LayoutDocument::from_json(r#"{"elements":[{"id":1,"text":"A"},{"id":2,"text":"Zwei"}]}"#)?
    );
    Ok(())
}

#[test]
fn test_translate_withMissingOriginal_shouldFail() -> Result<()> {
    init_logging();
    let temp_dir = create_temp_dir()?;
    let results = create_test_file(temp_dir.path(), "results.json", "{}")?;
    let controller = Controller::with_config(MemoryMetaStore::new(), Config::default())?;

    let error = controller
        .translate(1, 2, &results, Some("fr".to_string()), None)
        .unwrap_err();

    assert!(error.to_string().contains("Original post 1 has no layout"));
    assert!(controller.bridge().layouts().inner().is_empty());
    Ok(())
}

#[test]
fn test_translate_withForeignKind_shouldSucceedWithoutWriting() -> Result<()> {
    init_logging();
    let temp_dir = create_temp_dir()?;
    let results = create_test_file(
        temp_dir.path(),
        "results.json",
        r#"{"example-element-1": {"fr": {"status": 10, "value": "X"}}}"#,
    )?;
    let controller = controller_with_layout(1, ORIGINAL, Config::default())?;

    let outcome = controller.translate(1, 2, &results, None, Some("Another Builder".to_string()))?;

    assert_eq!(outcome, ReinjectionOutcome::Skipped);
    assert!(controller.show(2).is_err());
    Ok(())
}

#[test]
fn test_translate_withUnreadableResults_shouldFail() -> Result<()> {
    let temp_dir = create_temp_dir()?;
    let results = create_test_file(temp_dir.path(), "results.json", "[not json")?;
    let controller = controller_with_layout(1, ORIGINAL, Config::default())?;

    assert!(controller.translate(1, 2, &results, None, None).is_err());
    Ok(())
}

#[test]
fn test_show_shouldReturnStoredLayout() -> Result<()> {
    let controller = controller_with_layout(3, ORIGINAL, Config::default())?;

    assert_eq!(controller.show(3)?.len(), 2);
    let error = controller.show(4).unwrap_err();
    assert!(error.to_string().contains("page-builder-json"));
    Ok(())
}

#[test]
fn test_similarLanguage_shouldSuggestOnlyWhenCodeIsAbsent() {
    let results = TranslationResults::new()
        .with("example-element-1", "pt-pt", TranslationResult::complete("Olá"))
        .with("example-element-2", "pt-br", TranslationResult::complete("Oi"))
        .with("example-element-2", "de", TranslationResult::complete("Hallo"));

    assert_eq!(similar_language("pt", &results), Some("pt-br".to_string()));
    assert_eq!(similar_language("pt-br", &results), None);
    assert_eq!(similar_language("deu", &results), Some("de".to_string()));
    assert_eq!(similar_language("fr", &results), None);
}

#[test]
fn test_openClearAndStats_withDatabaseFile_shouldManageLayouts() -> Result<()> {
    init_logging();
    let temp_dir = create_temp_dir()?;
    let config = Config {
        database_path: Some(temp_dir.path().join("data").join("meta.db")),
        ..Config::default()
    };
    let controller = Controller::open(config)?;
    controller.register(11, &controller.resolve_package(None, None)?, Vec::new())?;
    controller.register(12, &controller.resolve_package(None, None)?, Vec::new())?;

    let (stats, posts) = controller.stats()?;
    assert_eq!(posts, 2);
    assert_eq!(stats.meta_count, 2);

    assert!(controller.clear(11)?);
    assert!(!controller.clear(11)?);
    assert_eq!(controller.stats()?.1, 1);
    assert!(controller.show(11).is_err());
    assert_eq!(
        json(&controller.show(12)?.to_json()?),
        json(r#"{"elements":[{"id":1,"text":"Text to translate for first field"},{"id":2,"text":"Text to translate for second field"}]}"#)
    );
    Ok(())
}
