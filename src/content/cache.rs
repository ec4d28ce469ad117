//! Optional in-process cache for resolved references.
//!
//! Reference resolution costs one upstream round-trip per link. Long-lived
//! deployments can inject this cache to skip refetching entries and assets
//! that rarely change (authors, categories). It is deliberately an explicit
//! handle the caller constructs and hands to the client: tests and the
//! default stateless deployment run without one.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

use super::types::{CmsEntry, ResolvedAsset};

/// Bounded LRU cache over resolved entry and asset references.
pub struct EntryCache {
    entries: Mutex<LruCache<String, CmsEntry>>,
    assets: Mutex<LruCache<String, ResolvedAsset>>,
}

impl EntryCache {
    /// Create a cache holding at most `capacity` entries and assets each.
    ///
    /// A zero capacity is clamped to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(cap)),
            assets: Mutex::new(LruCache::new(cap)),
        }
    }

    pub fn get_entry(&self, id: &str) -> Option<CmsEntry> {
        self.entries.lock().ok()?.get(id).cloned()
    }

    pub fn put_entry(&self, id: &str, entry: &CmsEntry) {
        if let Ok(mut cache) = self.entries.lock() {
            cache.put(id.to_string(), entry.clone());
        }
    }

    pub fn get_asset(&self, id: &str) -> Option<ResolvedAsset> {
        self.assets.lock().ok()?.get(id).cloned()
    }

    pub fn put_asset(&self, id: &str, asset: &ResolvedAsset) {
        if let Ok(mut cache) = self.assets.lock() {
            cache.put(id.to_string(), asset.clone());
        }
    }
}
