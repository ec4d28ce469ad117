//! Per-route SEO data resolution.
//!
//! Given a classified route, fetch exactly the content needed to populate
//! crawler-visible meta tags. Fallback is uniform at every leaf: a missing
//! entry, a missing field, or an unreachable upstream substitutes the module
//! defaults. [`resolve_seo_data`] therefore never fails; the only optional
//! outputs are the article markers (`author`, `published_date`, `category`),
//! whose absence tells the rewriter this page is not an article.

use tracing::debug;

use crate::config::GatewayConfig;
use crate::content::ContentClient;
use crate::content::types::CmsEntry;
use crate::routes::RouteInfo;

/// Request-scoped record feeding the HTML rewriter.
///
/// `title`, `description`, and `image_url` are always non-empty by the time
/// a value leaves this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoData {
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Pixel dimensions of the resolved image, when the asset record has them
    pub image_width: Option<u32>,
    pub image_height: Option<u32>,
    pub author: Option<String>,
    pub published_date: Option<String>,
    pub category: Option<String>,
}

impl SeoData {
    /// The generic record served when nothing better can be resolved.
    #[must_use]
    pub fn site_defaults(config: &GatewayConfig) -> Self {
        Self {
            title: config.default_title().to_string(),
            description: config.default_description().to_string(),
            image_url: config.default_image().to_string(),
            image_width: None,
            image_height: None,
            author: None,
            published_date: None,
            category: None,
        }
    }

    /// Whether the rewriter should mark the page as an article.
    #[must_use]
    pub fn is_article(&self) -> bool {
        self.author.is_some()
    }
}

/// Resolve SEO data for a classified route.
///
/// `search_query` is the raw `q` parameter, only meaningful for the search
/// intent. Upstream failures never propagate; they collapse into the site
/// defaults.
pub async fn resolve_seo_data(
    client: &ContentClient,
    config: &GatewayConfig,
    route: &RouteInfo,
    search_query: Option<&str>,
) -> SeoData {
    let resolved = match route {
        RouteInfo::Post { post_slug, .. } => resolve_post(client, config, post_slug).await,
        RouteInfo::Category { category_slug } => {
            resolve_category(client, config, category_slug).await
        }
        RouteInfo::Author { author_slug } => resolve_author(client, config, author_slug).await,
        RouteInfo::Search => Some(synthesize_search(config, search_query)),
        // Route ambiguity is never a hard failure; fall back to the most
        // recent post as a representative preview.
        RouteInfo::List | RouteInfo::Unknown => resolve_latest(client, config).await,
    };

    resolved.unwrap_or_else(|| {
        debug!(route = route.kind_str(), "serving default seo data");
        SeoData::site_defaults(config)
    })
}

async fn resolve_post(
    client: &ContentClient,
    config: &GatewayConfig,
    post_slug: &str,
) -> Option<SeoData> {
    let list = client
        .fetch_list(
            "/blog/posts",
            &[("limit", config.post_scan_limit().to_string())],
        )
        .await?;

    // First exact slug match wins. Posts past the scan limit fall through
    // to defaults; see `DEFAULT_POST_SCAN_LIMIT`.
    let entry = list.items.iter().find(|item| item.slug() == post_slug)?;

    // Image, author, and category live behind independent reference links;
    // resolve them concurrently.
    let (image, author, category) = futures::join!(
        client.resolve_asset_link(entry.fields.get("image")),
        client.resolve_entry_title(entry.fields.get("author")),
        client.resolve_entry_title(entry.fields.get("category")),
    );

    let mut data = entry_seo_data(entry, config);
    if let Some(asset) = image {
        data.image_url = asset.url;
        data.image_width = asset.width;
        data.image_height = asset.height;
    }
    data.author = author;
    data.published_date = entry.str_field("publishedDate").map(str::to_string);
    data.category = category;
    Some(data)
}

async fn resolve_category(
    client: &ContentClient,
    config: &GatewayConfig,
    category_slug: &str,
) -> Option<SeoData> {
    let list = client.fetch_list("/blog/categories", &[]).await?;
    let entry = list.items.iter().find(|item| item.slug() == category_slug)?;

    let mut data = entry_seo_data(entry, config);
    if let Some(asset) = client.resolve_asset_link(entry.fields.get("image")).await {
        data.image_url = asset.url;
        data.image_width = asset.width;
        data.image_height = asset.height;
    }
    Some(data)
}

async fn resolve_author(
    client: &ContentClient,
    config: &GatewayConfig,
    author_slug: &str,
) -> Option<SeoData> {
    let list = client.fetch_list("/blog/authors", &[]).await?;
    let entry = list.items.iter().find(|item| item.slug() == author_slug)?;

    let mut data = entry_seo_data(entry, config);
    if let Some(title) = entry.str_field("title") {
        data.title = format!("Posts by {title}");
    }
    if let Some(asset) = client.resolve_asset_link(entry.fields.get("image")).await {
        data.image_url = asset.url;
        data.image_width = asset.width;
        data.image_height = asset.height;
    }
    Some(data)
}

async fn resolve_latest(client: &ContentClient, config: &GatewayConfig) -> Option<SeoData> {
    let list = client
        .fetch_list("/blog/posts", &[("limit", "1".to_string())])
        .await?;
    let entry = list.items.first()?;

    // The landing page keeps the generic title; only description and image
    // borrow from the newest post.
    let mut data = SeoData::site_defaults(config);
    if let Some(description) = entry.str_field("description") {
        data.description = description.to_string();
    }
    if let Some(asset) = client.resolve_asset_link(entry.fields.get("image")).await {
        data.image_url = asset.url;
        data.image_width = asset.width;
        data.image_height = asset.height;
    }
    Some(data)
}

/// Search SEO data is synthesized from the query string; no upstream fetch.
fn synthesize_search(config: &GatewayConfig, query: Option<&str>) -> SeoData {
    let site = config.site_name();
    let mut data = SeoData::site_defaults(config);
    match query.filter(|q| !q.is_empty()) {
        Some(q) => {
            data.title = format!("Search: {q}");
            data.description = format!("Search results for \"{q}\" in {site} Blog");
        }
        None => {
            data.title = "Search".to_string();
            data.description = format!("Search the {site} Blog");
        }
    }
    data
}

/// Title/description/image defaults shared by every entry-backed route.
fn entry_seo_data(entry: &CmsEntry, config: &GatewayConfig) -> SeoData {
    let mut data = SeoData::site_defaults(config);
    if let Some(title) = entry.str_field("title") {
        data.title = title.to_string();
    }
    if let Some(description) = entry.str_field("description") {
        data.description = description.to_string();
    }
    data
}
