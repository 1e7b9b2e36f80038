use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use std::io::Write;
use std::path::Path;

use crate::app_config::Config;
use crate::bridge::{
    JsonLinesRegistry, PackageDescriptor, PageBuilderHooks, ReinjectionOutcome,
    RegistrationOutcome, TranslationBridge, TranslationResults,
};
use crate::database::{DatabaseConnection, DatabaseStats, MetaRepository};
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::layout::{LayoutDocument, LayoutLookup, MetaStore, PostId};

// @module: Application controller behind the CLI commands

/// Runs the CLI commands against a bridge built from the configuration
pub struct Controller<S> {
    // @field: App configuration
    config: Config,
    // @field: Bridge over the metadata store
    bridge: TranslationBridge<S>,
}

impl Controller<MetaRepository> {
    /// Open the configured SQLite database, or the default one
    pub fn open(config: Config) -> Result<Self> {
        let repository = match &config.database_path {
            Some(path) => MetaRepository::new(DatabaseConnection::new(path)?),
            None => MetaRepository::new_default()?,
        };
        Self::with_config(repository, config)
    }

    /// Remove the layout stored on a post, returning whether there was one
    pub fn clear(&self, post_id: PostId) -> Result<bool> {
        let layouts = self.bridge.layouts();
        let removed = layouts.inner().delete(post_id, layouts.meta_key())?;
        if removed {
            info!("Removed the layout of post {}", post_id);
        } else {
            warn!("Post {} has no layout to remove", post_id);
        }
        Ok(removed)
    }

    /// Store statistics and the number of posts that hold a layout
    pub fn stats(&self) -> Result<(DatabaseStats, usize)> {
        let layouts = self.bridge.layouts();
        let stats = layouts.inner().stats()?;
        let posts = layouts.inner().posts_with_key(layouts.meta_key())?;
        Ok((stats, posts.len()))
    }
}

impl<S: MetaStore> Controller<S> {
    // @method: Create a controller over a store with the given configuration
    pub fn with_config(store: S, config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        let bridge = TranslationBridge::from_config(store, &config);
        Ok(Self { config, bridge })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bridge(&self) -> &TranslationBridge<S> {
        &self.bridge
    }

    /// Integration list with this integration appended
    pub fn support(&self, existing: Vec<String>) -> Vec<String> {
        self.bridge.support_required(existing)
    }

    /// Package to register: the descriptor file when given, otherwise a bare
    /// package of `kind` (this integration's name by default)
    pub fn resolve_package(
        &self,
        kind: Option<String>,
        package_file: Option<&Path>,
    ) -> Result<PackageDescriptor> {
        match package_file {
            Some(path) => FileManager::read_json(path)
                .with_context(|| format!("Failed to read package descriptor: {:?}", path)),
            None => Ok(PackageDescriptor::new(
                kind.unwrap_or_else(|| self.config.integration.name.clone()),
            )),
        }
    }

    /// Register the strings of a post, writing each entry to `out` as a JSON line
    pub fn register<W: Write>(
        &self,
        post_id: PostId,
        package: &PackageDescriptor,
        out: W,
    ) -> Result<RegistrationOutcome> {
        let mut registry = JsonLinesRegistry::new(out);
        let outcome = self.bridge.register_strings(post_id, package, &mut registry)?;

        match &outcome {
            RegistrationOutcome::Skipped => {
                warn!("Package kind '{}' is not handled by this integration", package.kind)
            }
            RegistrationOutcome::Missing { post_id } => warn!("Post {} has no layout", post_id),
            RegistrationOutcome::Registered { count, created_fallback, .. } => {
                if *created_fallback {
                    info!("Post {} had no layout; the sample layout was stored", post_id);
                }
                info!("Registered {} string(s)", count);
            }
        }

        Ok(outcome)
    }

    /// Target language: the given code, else the configured default
    pub fn resolve_language(&self, lang: Option<String>) -> String {
        lang.unwrap_or_else(|| self.config.default_language.clone())
    }

    /// Apply a results file to the original post's layout and write the
    /// translated post. A missing original layout is an error here.
    pub fn translate(
        &self,
        original: PostId,
        translated: PostId,
        results_file: &Path,
        lang: Option<String>,
        kind: Option<String>,
    ) -> Result<ReinjectionOutcome> {
        let lang = self.resolve_language(lang);
        match language_utils::get_language_name(&lang) {
            Ok(name) => debug!("Target language: {} ({})", name, lang),
            Err(_) => warn!("'{}' is not a known ISO 639 language code", lang),
        }

        let results: TranslationResults = FileManager::read_json(results_file)
            .with_context(|| format!("Failed to read translation results: {:?}", results_file))?;

        if let Some(similar) = similar_language(&lang, &results) {
            warn!(
                "No results are keyed '{}', but '{}' names the same language; pass --lang {} to use them",
                lang, similar, similar
            );
        }

        let kind = kind.unwrap_or_else(|| self.config.integration.name.clone());
        let outcome = self
            .bridge
            .string_translated(&kind, translated, original, &results, &lang)?;

        match &outcome {
            ReinjectionOutcome::Skipped => {
                warn!("Package kind '{}' is not handled by this integration", kind)
            }
            ReinjectionOutcome::MissingOriginal { original_post_id } => {
                return Err(anyhow!("Original post {} has no layout", original_post_id));
            }
            ReinjectionOutcome::Applied { report, .. } => {
                let unresolved = report.unresolved();
                if !unresolved.is_empty() {
                    warn!(
                        "{} translated string(s) did not match an element",
                        unresolved.len()
                    );
                }
            }
        }

        Ok(outcome)
    }

    /// Layout stored on a post
    pub fn show(&self, post_id: PostId) -> Result<LayoutDocument> {
        match self.bridge.layouts().load(post_id)? {
            LayoutLookup::Found(document) => Ok(document),
            LayoutLookup::Missing => Err(anyhow!(
                "Post {} has no '{}' metadata",
                post_id,
                self.bridge.layouts().meta_key()
            )),
        }
    }
}

/// Language key of `results` naming the same base language as `lang`, when
/// no result is keyed by `lang` itself. The smallest such key is returned.
pub fn similar_language(lang: &str, results: &TranslationResults) -> Option<String> {
    if results.iter().any(|(_, by_lang)| by_lang.contains_key(lang)) {
        return None;
    }

    results
        .iter()
        .flat_map(|(_, by_lang)| by_lang.keys())
        .filter(|key| language_utils::language_codes_match(lang, key))
        .min()
        .cloned()
}
