//! Thin fetch wrapper around the content platform.
//!
//! Every method fails soft: a network error, a non-2xx status, or an
//! unexpected body shape yields `None` and a log line, never an error the
//! caller must handle. A transient CMS outage must degrade to generic SEO
//! tags, not to a broken page for a crawler.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::cache::EntryCache;
use super::types::{
    CmsAssetResponse, CmsEntry, CmsListResponse, ResolvedAsset, link_target_id,
};
use crate::utils::normalize_asset_url;

/// Stateless client for the content platform.
///
/// Cheap to clone; the underlying `reqwest::Client` is shared. The optional
/// [`EntryCache`] is consulted before any reference fetch and is only
/// present when explicitly injected.
#[derive(Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
    cache: Option<Arc<EntryCache>>,
}

impl ContentClient {
    /// Create a client rooted at `base_url` (no trailing slash).
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            cache: None,
        }
    }

    /// Attach an injectable reference cache.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<EntryCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// GET a list endpoint (`/blog/posts`, `/blog/categories`, ...) with
    /// query-string parameters.
    pub async fn fetch_list(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Option<CmsListResponse> {
        self.get_json(endpoint, params).await
    }

    /// GET a single entry by id.
    pub async fn fetch_entry(&self, id: &str) -> Option<CmsEntry> {
        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get_entry(id)) {
            return Some(cached);
        }

        let entry: CmsEntry = self.get_json(&format!("/entries/{id}"), &[]).await?;
        if let Some(cache) = &self.cache {
            cache.put_entry(id, &entry);
        }
        Some(entry)
    }

    /// GET an asset by id, reduced to its file URL and image dimensions.
    pub async fn fetch_asset(&self, id: &str) -> Option<ResolvedAsset> {
        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get_asset(id)) {
            return Some(cached);
        }

        let asset: CmsAssetResponse = self.get_json(&format!("/assets/{id}"), &[]).await?;
        let file = asset.fields.file?;
        let url = file.url.filter(|u| !u.is_empty())?;
        let dims = file.details.and_then(|d| d.image);

        let resolved = ResolvedAsset {
            url: normalize_asset_url(&url),
            width: dims.and_then(|d| d.width),
            height: dims.and_then(|d| d.height),
        };
        if let Some(cache) = &self.cache {
            cache.put_asset(id, &resolved);
        }
        Some(resolved)
    }

    /// Resolve an embedded asset link field to its URL and dimensions.
    ///
    /// Accepts the raw field value (or its absence) so callers can pass
    /// `entry.fields.get("image")` straight through.
    pub async fn resolve_asset_link(&self, field: Option<&Value>) -> Option<ResolvedAsset> {
        let id = field.and_then(link_target_id)?;
        self.fetch_asset(id).await
    }

    /// Resolve an embedded entry link field to one string field of the
    /// target entry.
    pub async fn resolve_entry_field(
        &self,
        field: Option<&Value>,
        field_name: &str,
    ) -> Option<String> {
        let id = field.and_then(link_target_id)?;
        let entry = self.fetch_entry(id).await?;
        entry.str_field(field_name).map(str::to_string)
    }

    /// Resolve an embedded entry link field to the target's `title`.
    pub async fn resolve_entry_title(&self, field: Option<&Value>) -> Option<String> {
        self.resolve_entry_field(field, "title").await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Option<T> {
        let url = format!("{}{endpoint}", self.base_url);

        let response = match self.http.get(&url).query(params).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, error = %e, "content platform unreachable");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!(%url, %status, "content platform returned non-success");
            return None;
        }

        match response.json::<T>().await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%url, error = %e, "content platform returned unexpected body");
                None
            }
        }
    }
}
