//! The request/response cycle of the gateway.
//!
//! Per request: classify the client, then either bypass (307 to the
//! canonical URL) or fetch the shell, resolve SEO data, rewrite, and respond
//! with the rewritten document. Any failure on the crawler path degrades to
//! the same redirect the bypass uses — the two terminal outcomes are
//! "redirected" and "rewritten-200", never a 5xx of the gateway's own
//! making. A client disconnect simply drops the in-flight upstream fetches;
//! there is no shared state to unwind.

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use tracing::{info, warn};

use super::state::{AppState, fetch_shell};
use crate::crawler_detect::is_crawler_request;
use crate::rewrite::rewrite_html;
use crate::routes::{RouteInfo, parse_route};
use crate::seo::resolve_seo_data;
use crate::utils::constants::REWRITTEN_CACHE_CONTROL;
use crate::utils::request_origin;

/// Query parameters recognized on the SEO entry point.
#[derive(Debug, Default, Deserialize)]
pub struct SeoQuery {
    /// Blog path when the platform routes by query parameter
    pub path: Option<String>,
    /// Search term for the search intent
    pub q: Option<String>,
    /// `seo=true` forces the crawler path for manual verification
    pub seo: Option<String>,
}

/// `GET /api/seo?path=/blog/...` — path arrives as a query parameter.
pub async fn seo_query_handler(
    State(state): State<AppState>,
    Query(query): Query<SeoQuery>,
    headers: HeaderMap,
) -> Response {
    let blog_path = query
        .path
        .clone()
        .unwrap_or_else(|| "/blog".to_string());
    handle_seo(state, headers, blog_path, query).await
}

/// `GET /api/seo/blog/...` — the real request path, prefix stripped by the
/// route pattern.
pub async fn seo_path_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(query): Query<SeoQuery>,
    headers: HeaderMap,
) -> Response {
    handle_seo(state, headers, format!("/{path}"), query).await
}

async fn handle_seo(
    state: AppState,
    headers: HeaderMap,
    blog_path: String,
    query: SeoQuery,
) -> Response {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let is_crawler = is_crawler_request(user_agent);
    let seo_test = query.seo.as_deref() == Some("true");

    let origin = request_origin(&headers);
    let canonical_url = format!("{origin}{blog_path}");
    let route = parse_route(&blog_path);

    info!(
        path = %blog_path,
        route = route.kind_str(),
        user_agent = %user_agent.chars().take(50).collect::<String>(),
        is_crawler,
        seo_test,
        "seo gateway request"
    );

    // Real visitors never wait on the CMS: bounce them straight to the SPA.
    if !is_crawler && !seo_test {
        return Redirect::temporary(&canonical_url).into_response();
    }

    match render_for_crawler(&state, &headers, &route, query.q.as_deref(), &canonical_url).await {
        Ok(response) => response,
        Err(e) => {
            warn!(path = %blog_path, error = format!("{e:#}"), "degrading to redirect");
            Redirect::temporary(&canonical_url).into_response()
        }
    }
}

async fn render_for_crawler(
    state: &AppState,
    headers: &HeaderMap,
    route: &RouteInfo,
    search_query: Option<&str>,
    canonical_url: &str,
) -> Result<Response> {
    let shell_origin = state
        .config
        .shell_origin()
        .map(str::to_string)
        .unwrap_or_else(|| request_origin(headers));

    let shell = fetch_shell(&state.http, &shell_origin)
        .await
        .context("failed to fetch spa shell")?;

    // Infallible by construction: upstream failures collapse into defaults.
    let seo = resolve_seo_data(&state.content, &state.config, route, search_query).await;
    let html = rewrite_html(&shell, &seo, canonical_url, state.config.site_name());

    Ok((
        StatusCode::OK,
        [
            ("content-type", "text/html; charset=utf-8".to_string()),
            ("cache-control", REWRITTEN_CACHE_CONTROL.to_string()),
            ("x-seo-gateway", "active".to_string()),
            ("x-seo-route-type", route.kind_str().to_string()),
        ],
        html,
    )
        .into_response())
}
