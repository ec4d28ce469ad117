//! HTTP surface of the SEO gateway: router, app state, request handlers.

pub mod handler;
pub mod state;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;

pub use handler::{SeoQuery, seo_path_handler, seo_query_handler};
pub use state::{AppState, ShellError, fetch_shell};

/// Build the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/seo", get(seo_query_handler))
        .route("/api/seo/{*path}", get(seo_path_handler))
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
