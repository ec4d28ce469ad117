//! Wire types for the content platform.
//!
//! The CMS exposes generic entries whose `fields` map varies by content
//! type, so entries keep a raw `serde_json` field map and the typed shapes
//! are limited to what the gateway actually reads. Deserialization is
//! permissive throughout; a missing field is a soft miss, not an error.

use serde::Deserialize;
use serde_json::Value;

/// Entry identity block.
#[derive(Debug, Clone, Deserialize)]
pub struct CmsSys {
    pub id: String,
}

/// A generic content entry: identity plus an open field map.
#[derive(Debug, Clone, Deserialize)]
pub struct CmsEntry {
    pub sys: CmsSys,
    #[serde(default)]
    pub fields: serde_json::Map<String, Value>,
}

/// Paginated list response from any list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CmsListResponse {
    #[serde(default)]
    pub items: Vec<CmsEntry>,
    #[serde(default)]
    pub total: u64,
}

/// Asset record; only the file URL and image dimensions matter here.
#[derive(Debug, Clone, Deserialize)]
pub struct CmsAssetResponse {
    #[serde(default)]
    pub fields: CmsAssetFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CmsAssetFields {
    pub file: Option<CmsAssetFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsAssetFile {
    pub url: Option<String>,
    pub details: Option<CmsAssetDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsAssetDetails {
    pub image: Option<CmsImageDimensions>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CmsImageDimensions {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// An asset reference resolved down to the data the rewriter needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// Absolute https URL (protocol-relative input normalized)
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl CmsEntry {
    /// Slug under which this entry is addressed in URLs.
    ///
    /// Entries drift between a dedicated `slug` field and an `id` field;
    /// `sys.id` is the last resort.
    #[must_use]
    pub fn slug(&self) -> &str {
        self.str_field("slug")
            .or_else(|| self.str_field("id"))
            .unwrap_or(&self.sys.id)
    }

    /// A non-empty string field, if present.
    #[must_use]
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Extract the target id from an embedded reference link value
/// (`{"sys": {"type": "Link", "linkType": "Entry", "id": "..."}}`).
#[must_use]
pub fn link_target_id(field: &Value) -> Option<&str> {
    field
        .get("sys")
        .and_then(|sys| sys.get("id"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(fields: Value) -> CmsEntry {
        serde_json::from_value(json!({
            "sys": { "id": "sys-id-1" },
            "fields": fields,
        }))
        .expect("valid entry json")
    }

    #[test]
    fn test_slug_prefers_slug_field() {
        let e = entry(json!({ "slug": "new-feature", "id": "other" }));
        assert_eq!(e.slug(), "new-feature");
    }

    #[test]
    fn test_slug_falls_back_to_id_field_then_sys_id() {
        let e = entry(json!({ "id": "from-id-field" }));
        assert_eq!(e.slug(), "from-id-field");

        let e = entry(json!({}));
        assert_eq!(e.slug(), "sys-id-1");
    }

    #[test]
    fn test_empty_slug_is_skipped() {
        let e = entry(json!({ "slug": "", "id": "fallback" }));
        assert_eq!(e.slug(), "fallback");
    }

    #[test]
    fn test_link_target_id() {
        let link = json!({ "sys": { "type": "Link", "linkType": "Asset", "id": "img-1" } });
        assert_eq!(link_target_id(&link), Some("img-1"));
        assert_eq!(link_target_id(&json!("not a link")), None);
        assert_eq!(link_target_id(&json!({ "sys": {} })), None);
    }

    #[test]
    fn test_list_response_tolerates_missing_fields() {
        let list: CmsListResponse = serde_json::from_value(json!({
            "items": [{ "sys": { "id": "a" } }],
        }))
        .expect("valid list json");
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.total, 0);
        assert!(list.items[0].fields.is_empty());
    }
}
