pub mod config;
pub mod content;
pub mod crawler_detect;
pub mod gateway;
pub mod rewrite;
pub mod routes;
pub mod seo;
pub mod utils;

pub use config::GatewayConfig;
pub use content::{ContentClient, EntryCache};
pub use crawler_detect::{CRAWLER_SIGNATURES, is_crawler_request};
pub use gateway::{AppState, router};
pub use rewrite::rewrite_html;
pub use routes::{RouteInfo, parse_route};
pub use seo::{SeoData, resolve_seo_data};
pub use utils::{normalize_asset_url, request_origin};
