/*!
 * Translation bridge: the three hooks a translation host calls.
 *
 * 1. `support_required`: announce that this integration needs page-builder
 *    translation support
 * 2. `register_strings`: extract the texts of a post's layout and hand them
 *    to the host's string registry
 * 3. `string_translated`: take translated strings back and write a
 *    translated copy of the layout to the translated post
 */

use log::{debug, info, warn};

use crate::app_config::{Config, IntegrationConfig};
use crate::bridge::key::StringKey;
use crate::bridge::outcome::{ReinjectionOutcome, ReinjectionReport, RegistrationOutcome};
use crate::bridge::package::PackageDescriptor;
use crate::bridge::registry::{RegistrationEntry, StringRegistry};
use crate::bridge::results::TranslationResults;
use crate::errors::BridgeError;
use crate::layout::model::LayoutDocument;
use crate::layout::store::{LayoutLookup, LayoutStore, MetaStore, PostId};

/// Builds the layout written to posts that have none at registration time
pub type LayoutFactory = Box<dyn Fn() -> LayoutDocument + Send + Sync>;

/// Hooks a page-builder integration exposes to the translation host
pub trait PageBuilderHooks {
    /// Return the host's integration list with this integration appended
    fn support_required(&self, integrations: Vec<String>) -> Vec<String>;

    /// Register the strings of a post's layout with the host
    fn register_strings(
        &self,
        post_id: PostId,
        package: &PackageDescriptor,
        registry: &mut dyn StringRegistry,
    ) -> Result<RegistrationOutcome, BridgeError>;

    /// Build the translated post's layout from the original and the results
    fn string_translated(
        &self,
        package_kind: &str,
        translated_post_id: PostId,
        original_post_id: PostId,
        results: &TranslationResults,
        lang: &str,
    ) -> Result<ReinjectionOutcome, BridgeError>;
}

/// Page-builder integration backed by a metadata store
pub struct TranslationBridge<S> {
    integration: IntegrationConfig,
    strict: bool,
    layouts: LayoutStore<S>,
    fallback: Option<LayoutFactory>,
}

/// Builder for `TranslationBridge`
pub struct BridgeBuilder<S> {
    store: S,
    integration: IntegrationConfig,
    strict: bool,
    fallback: Option<LayoutFactory>,
}

impl<S: MetaStore> BridgeBuilder<S> {
    /// Use these host identifiers instead of the defaults
    pub fn integration(mut self, integration: IntegrationConfig) -> Self {
        self.integration = integration;
        self
    }

    /// Fail reinjection instead of writing when strings match no element
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Layout to write to posts that have none when registering
    pub fn fallback_layout<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> LayoutDocument + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(factory));
        self
    }

    /// Leave posts without a layout untouched when registering
    pub fn no_fallback(mut self) -> Self {
        self.fallback = None;
        self
    }

    pub fn build(self) -> TranslationBridge<S> {
        let layouts = LayoutStore::new(self.store, self.integration.meta_key.clone());
        TranslationBridge {
            integration: self.integration,
            strict: self.strict,
            layouts,
            fallback: self.fallback,
        }
    }
}

impl<S: MetaStore> TranslationBridge<S> {
    /// Start building a bridge over a store. Defaults: standard identifiers,
    /// non-strict reinjection, sample layout as fallback.
    pub fn builder(store: S) -> BridgeBuilder<S> {
        BridgeBuilder {
            store,
            integration: IntegrationConfig::default(),
            strict: false,
            fallback: Some(Box::new(LayoutDocument::sample)),
        }
    }

    /// Bridge with default settings
    pub fn new(store: S) -> Self {
        Self::builder(store).build()
    }

    /// Bridge configured from the application configuration
    pub fn from_config(store: S, config: &Config) -> Self {
        let builder = Self::builder(store)
            .integration(config.integration.clone())
            .strict(config.reinjection.strict);

        if config.create_sample_layout {
            builder.build()
        } else {
            builder.no_fallback().build()
        }
    }

    pub fn integration(&self) -> &IntegrationConfig {
        &self.integration
    }

    /// Typed access to the layouts this bridge reads and writes
    pub fn layouts(&self) -> &LayoutStore<S> {
        &self.layouts
    }

    fn entry_for(&self, element_text: &str, key: StringKey, package: &PackageDescriptor) -> RegistrationEntry {
        RegistrationEntry {
            value: element_text.to_string(),
            name: key.to_name(&self.integration.name_prefix),
            key: Some(key),
            package: package.clone(),
            title: self.integration.string_label.clone(),
            string_type: self.integration.string_type,
        }
    }
}

impl<S: MetaStore> PageBuilderHooks for TranslationBridge<S> {
    fn support_required(&self, mut integrations: Vec<String>) -> Vec<String> {
        integrations.push(self.integration.name.clone());
        integrations
    }

    fn register_strings(
        &self,
        post_id: PostId,
        package: &PackageDescriptor,
        registry: &mut dyn StringRegistry,
    ) -> Result<RegistrationOutcome, BridgeError> {
        if !package.is_for(&self.integration.name) {
            debug!(
                "Ignoring registration for package kind '{}' on post {}",
                package.kind, post_id
            );
            return Ok(RegistrationOutcome::Skipped);
        }

        let (document, created_fallback) = match self.layouts.load(post_id)? {
            LayoutLookup::Found(document) => (document, false),
            LayoutLookup::Missing => match &self.fallback {
                Some(factory) => {
                    let document = factory();
                    info!("Post {} has no layout, writing the fallback layout", post_id);
                    self.layouts.save(post_id, &document)?;
                    (document, true)
                }
                None => {
                    warn!("Post {} has no layout, nothing to register", post_id);
                    return Ok(RegistrationOutcome::Missing { post_id });
                }
            },
        };

        for element in &document.elements {
            let entry = self.entry_for(&element.text, StringKey::new(element.id), package);
            debug!("Registering {} for post {}", entry.name, post_id);
            registry.register(entry)?;
        }

        info!(
            "Registered {} string(s) for post {}",
            document.len(),
            post_id
        );

        Ok(RegistrationOutcome::Registered {
            post_id,
            count: document.len(),
            created_fallback,
        })
    }

    fn string_translated(
        &self,
        package_kind: &str,
        translated_post_id: PostId,
        original_post_id: PostId,
        results: &TranslationResults,
        lang: &str,
    ) -> Result<ReinjectionOutcome, BridgeError> {
        if package_kind != self.integration.name {
            debug!(
                "Ignoring translations for package kind '{}' on post {}",
                package_kind, original_post_id
            );
            return Ok(ReinjectionOutcome::Skipped);
        }

        let mut document = match self.layouts.load(original_post_id)? {
            LayoutLookup::Found(document) => document,
            LayoutLookup::Missing => {
                warn!(
                    "Original post {} has no layout, nothing to translate",
                    original_post_id
                );
                return Ok(ReinjectionOutcome::MissingOriginal { original_post_id });
            }
        };

        let mut report = ReinjectionReport::default();

        for (name, by_lang) in results.iter() {
            let key = match StringKey::parse(name, &self.integration.name_prefix) {
                Ok(key) => key,
                Err(e) => {
                    warn!("Skipping translated string: {}", e);
                    report.invalid.push(name.clone());
                    continue;
                }
            };

            let Some(result) = by_lang.get(lang) else {
                debug!("No '{}' translation for {}", lang, name);
                report.missing_language.push(name.clone());
                continue;
            };

            if !result.is_complete(self.integration.complete_status) {
                debug!(
                    "Translation of {} into '{}' is not complete (status {})",
                    name, lang, result.status
                );
                report.incomplete.push(name.clone());
                continue;
            }

            match document.set_text(key.element_id, &result.value) {
                0 => {
                    warn!(
                        "Translated string {} matches no element of post {}",
                        name, original_post_id
                    );
                    report.unmatched.push(name.clone());
                }
                updated => {
                    report.applied.push(key.element_id);
                    report.updated_elements += updated;
                }
            }
        }

        if self.strict {
            let unresolved = report.unresolved();
            if !unresolved.is_empty() {
                return Err(BridgeError::UnmatchedStrings(unresolved));
            }
        }

        self.layouts.save(translated_post_id, &document)?;

        info!(
            "Wrote '{}' layout for post {} from post {} ({} element(s) translated)",
            lang,
            translated_post_id,
            original_post_id,
            report.updated_elements
        );

        Ok(ReinjectionOutcome::Applied {
            translated_post_id,
            report,
        })
    }
}
