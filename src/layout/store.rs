/*!
 * Post metadata storage.
 *
 * `MetaStore` is the raw key-value seam a host provides (one string value
 * per post and key). `LayoutStore` sits on top of it and reads and writes
 * typed layout documents under a single metadata key.
 */

use log::{debug, info};
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::errors::{BridgeError, StoreError};
use crate::layout::model::LayoutDocument;

/// Identifier of a post (content item) on the host.
pub type PostId = u64;

/// Raw post metadata storage
pub trait MetaStore: Send + Sync {
    /// Read a metadata value, `None` when the key is not set
    fn get_meta(&self, post_id: PostId, key: &str) -> Result<Option<String>, StoreError>;

    /// Create or replace a metadata value
    fn set_meta(&self, post_id: PostId, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: MetaStore + ?Sized> MetaStore for &S {
    fn get_meta(&self, post_id: PostId, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_meta(post_id, key)
    }

    fn set_meta(&self, post_id: PostId, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_meta(post_id, key, value)
    }
}

/// In-memory metadata store
#[derive(Debug, Default)]
pub struct MemoryMetaStore {
    values: RwLock<HashMap<(PostId, String), String>>,
}

impl MemoryMetaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values across all posts
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl MetaStore for MemoryMetaStore {
    fn get_meta(&self, post_id: PostId, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().get(&(post_id, key.to_string())).cloned())
    }

    fn set_meta(&self, post_id: PostId, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .insert((post_id, key.to_string()), value.to_string());
        Ok(())
    }
}

/// Result of looking up a post's layout
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutLookup {
    /// A layout is stored and decoded
    Found(LayoutDocument),
    /// The post has no layout (key unset or empty)
    Missing,
}

/// Typed access to the layout stored under one metadata key
pub struct LayoutStore<S> {
    store: S,
    meta_key: String,
}

impl<S: MetaStore> LayoutStore<S> {
    pub fn new(store: S, meta_key: impl Into<String>) -> Self {
        Self {
            store,
            meta_key: meta_key.into(),
        }
    }

    /// Metadata key the layout is stored under
    pub fn meta_key(&self) -> &str {
        &self.meta_key
    }

    /// Underlying metadata store
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Load and decode the layout of a post.
    ///
    /// An unset key and an empty value both count as missing.
    pub fn load(&self, post_id: PostId) -> Result<LayoutLookup, BridgeError> {
        let raw = match self.store.get_meta(post_id, &self.meta_key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                debug!("No layout stored for post {}", post_id);
                return Ok(LayoutLookup::Missing);
            }
        };

        let document = LayoutDocument::from_json(&raw)
            .map_err(|source| BridgeError::MalformedLayout { post_id, source })?;

        debug!(
            "Loaded layout for post {} ({} elements)",
            post_id,
            document.len()
        );
        Ok(LayoutLookup::Found(document))
    }

    /// Encode and store a layout on a post, replacing any previous one.
    pub fn save(&self, post_id: PostId, document: &LayoutDocument) -> Result<(), BridgeError> {
        let raw = document.to_json()?;
        self.store.set_meta(post_id, &self.meta_key, &raw)?;
        info!(
            "Stored layout for post {} ({} elements)",
            post_id,
            document.len()
        );
        Ok(())
    }
}
