use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};

use crate::bridge::key::DEFAULT_NAME_PREFIX;
use crate::bridge::registry::StringType;
use crate::bridge::results::STATUS_COMPLETE;
use crate::file_utils::FileManager;

/// Application configuration module
/// This module handles loading, validating and saving the settings that
/// tie the bridge to a host: identifiers, metadata key, storage location.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// How this integration identifies itself to the host
    #[serde(default)]
    pub integration: IntegrationConfig,

    /// Reinjection behavior
    #[serde(default)]
    pub reinjection: ReinjectionConfig,

    /// Write the sample layout to posts that have none when registering
    #[serde(default = "default_true")]
    pub create_sample_layout: bool,

    /// SQLite database holding post metadata (defaults to the user data dir)
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Language used when the CLI is not given one
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Identifiers shared with the translation host
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IntegrationConfig {
    /// Name announced to the host and matched against package kinds
    #[serde(default = "default_integration_name")]
    pub name: String,

    /// Post metadata key holding the layout JSON
    #[serde(default = "default_meta_key")]
    pub meta_key: String,

    /// Prefix of registration names (`<prefix><element id>`)
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,

    /// Label shown by the host next to registered strings
    #[serde(default = "default_string_label")]
    pub string_label: String,

    /// Kind of text registered strings hold
    #[serde(default)]
    pub string_type: StringType,

    /// Host status code meaning "translation complete"
    #[serde(default = "default_complete_status")]
    pub complete_status: i64,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            name: default_integration_name(),
            meta_key: default_meta_key(),
            name_prefix: default_name_prefix(),
            string_label: default_string_label(),
            string_type: StringType::default(),
            complete_status: default_complete_status(),
        }
    }
}

/// Settings for applying translated strings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ReinjectionConfig {
    /// Refuse to write a translation when some strings match no element
    #[serde(default)]
    pub strict: bool,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_integration_name() -> String {
    "WPML Example Page Builder".to_string()
}

fn default_meta_key() -> String {
    "page-builder-json".to_string()
}

fn default_name_prefix() -> String {
    DEFAULT_NAME_PREFIX.to_string()
}

fn default_string_label() -> String {
    "Example Element Text".to_string()
}

fn default_complete_status() -> i64 {
    STATUS_COMPLETE
}

fn default_language() -> String {
    "fr".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.integration.name.trim().is_empty() {
            return Err(anyhow!("Integration name must not be empty"));
        }

        if self.integration.meta_key.trim().is_empty() {
            return Err(anyhow!("Layout metadata key must not be empty"));
        }

        // An empty prefix would make every host string look like ours
        if self.integration.name_prefix.is_empty() {
            return Err(anyhow!("Registration name prefix must not be empty"));
        }

        crate::language_utils::validate_language_code(&self.default_language)
            .context("Invalid default language")?;

        Ok(())
    }

    /// Load a configuration file, or write and return the defaults if it does
    /// not exist yet
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<(Self, bool)> {
        let path = path.as_ref();
        if FileManager::file_exists(path) {
            let config: Config = FileManager::read_json(path)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok((config, false))
        } else {
            let config = Config::default();
            FileManager::write_json(path, &config)
                .with_context(|| format!("Failed to write default config to file: {:?}", path))?;
            Ok((config, true))
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            integration: IntegrationConfig::default(),
            reinjection: ReinjectionConfig::default(),
            create_sample_layout: true,
            database_path: None,
            default_language: default_language(),
            log_level: LogLevel::default(),
        }
    }
}
