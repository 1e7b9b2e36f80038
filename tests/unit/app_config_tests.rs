/*!
 * Tests for configuration loading and validation
 */

use anyhow::Result;
use layout_bridge::app_config::{Config, LogLevel};
use layout_bridge::bridge::StringType;

use crate::common::{create_temp_dir, create_test_file};

#[test]
fn test_default_shouldMatchHostIdentifiers() {
    let config = Config::default();

    assert_eq!(config.integration.name, "WPML Example Page Builder");
    assert_eq!(config.integration.meta_key, "page-builder-json");
    assert_eq!(config.integration.name_prefix, "example-element-");
    assert_eq!(config.integration.string_label, "Example Element Text");
    assert_eq!(config.integration.string_type, StringType::Line);
    assert_eq!(config.integration.complete_status, 10);
    assert!(config.create_sample_layout);
    assert!(!config.reinjection.strict);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("conf.json");

    let (config, created) = Config::load_or_create(&path)?;
    assert!(created);
    assert_eq!(config, Config::default());
    assert!(path.exists());

    let (reloaded, created_again) = Config::load_or_create(&path)?;
    assert!(!created_again);
    assert_eq!(reloaded, config);
    Ok(())
}

#[test]
fn test_loadOrCreate_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = create_temp_dir()?;
    let path = create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"integration": {"meta_key": "builder-data"}, "reinjection": {"strict": true}, "log_level": "debug"}"#,
    )?;

    let (config, created) = Config::load_or_create(&path)?;

    assert!(!created);
    assert_eq!(config.integration.meta_key, "builder-data");
    assert_eq!(config.integration.name, "WPML Example Page Builder");
    assert!(config.reinjection.strict);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.default_language, "fr");
    Ok(())
}

#[test]
fn test_loadOrCreate_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = create_temp_dir()?;
    let path = create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}

#[test]
fn test_validate_withBlankIdentifiers_shouldFail() {
    let mut config = Config::default();
    config.integration.name = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.integration.meta_key = String::new();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.integration.name_prefix = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withLanguage_shouldCheckBaseSubtag() {
    let mut config = Config::default();
    config.default_language = "pt-br".to_string();
    assert!(config.validate().is_ok());

    config.default_language = "klingon".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_logLevel_shouldConvertToLevelFilter() {
    assert_eq!(log::LevelFilter::from(LogLevel::Warn), log::LevelFilter::Warn);
    assert_eq!(log::LevelFilter::from(LogLevel::Trace), log::LevelFilter::Trace);
}
