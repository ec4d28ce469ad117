//! Test utilities and fixtures for the seo-gateway test suite

use serde_json::{Value, json};

/// SPA shell with one occurrence of every tag the rewriter targets.
#[allow(dead_code)]
pub const SHELL_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Decentraland</title>
    <meta name="description" content="placeholder description">
    <link rel="canonical" href="https://decentraland.org/blog">
    <meta property="og:title" content="placeholder">
    <meta property="og:description" content="placeholder">
    <meta property="og:image" content="https://decentraland.org/placeholder.png">
    <meta property="og:url" content="https://decentraland.org/blog">
    <meta property="og:type" content="website">
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:title" content="placeholder">
    <meta name="twitter:description" content="placeholder">
    <meta name="twitter:image" content="https://decentraland.org/placeholder.png">
    <script type="module" src="/assets/index.js"></script>
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

/// A reference link value as embedded in entry fields.
#[allow(dead_code)]
pub fn link(link_type: &str, id: &str) -> Value {
    json!({ "sys": { "type": "Link", "linkType": link_type, "id": id } })
}

/// A full blog post entry with image/author/category references.
#[allow(dead_code)]
pub fn post_entry(slug: &str, title: &str, description: &str) -> Value {
    json!({
        "sys": { "id": format!("post-{slug}") },
        "fields": {
            "slug": slug,
            "title": title,
            "description": description,
            "publishedDate": "2024-05-01",
            "image": link("Asset", "img-1"),
            "author": link("Entry", "author-1"),
            "category": link("Entry", "category-1"),
        }
    })
}

/// An entry with only a title and slug (categories, authors).
#[allow(dead_code)]
pub fn named_entry(id: &str, slug: &str, title: &str, description: &str) -> Value {
    json!({
        "sys": { "id": id },
        "fields": {
            "slug": slug,
            "title": title,
            "description": description,
        }
    })
}

/// A bare entry carrying a `title` field, as returned by `/entries/{id}`.
#[allow(dead_code)]
pub fn titled_entry(id: &str, title: &str) -> Value {
    json!({
        "sys": { "id": id },
        "fields": { "title": title }
    })
}

/// A list response wrapping the given entries.
#[allow(dead_code)]
pub fn list_response(items: Vec<Value>) -> Value {
    let total = items.len();
    json!({ "items": items, "total": total })
}

/// An asset record with a protocol-relative file URL and image dimensions.
#[allow(dead_code)]
pub fn asset_response(url: &str, width: u32, height: u32) -> Value {
    json!({
        "sys": { "id": "img-1" },
        "fields": {
            "title": "preview",
            "file": {
                "url": url,
                "contentType": "image/png",
                "details": { "image": { "width": width, "height": height } }
            }
        }
    })
}
