// SEO gateway binary.
//
// Serves the crawler-facing entry points over HTTP. Configuration comes
// from compile-time defaults with environment overrides:
//   SEO_GATEWAY_CMS_BASE_URL   content platform root
//   SEO_GATEWAY_SHELL_ORIGIN   fixed origin for the SPA shell
//   SEO_GATEWAY_BIND_ADDR      listen address (default 0.0.0.0:8700)
//   RUST_LOG                   log filter (default info)

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use seo_gateway::config::GatewayConfig;
use seo_gateway::gateway::{AppState, router};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config_from_env();
    let bind_addr = config.bind_addr().to_string();

    info!(
        cms_base_url = config.cms_base_url(),
        shell_origin = ?config.shell_origin(),
        %bind_addr,
        "starting seo gateway"
    );

    let state = AppState::from_config(config)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    axum::serve(listener, app)
        .await
        .context("gateway server exited")?;

    Ok(())
}

fn config_from_env() -> GatewayConfig {
    let mut builder = GatewayConfig::builder();
    if let Ok(url) = std::env::var("SEO_GATEWAY_CMS_BASE_URL") {
        builder = builder.cms_base_url(url);
    }
    if let Ok(origin) = std::env::var("SEO_GATEWAY_SHELL_ORIGIN") {
        builder = builder.shell_origin(origin);
    }
    if let Ok(addr) = std::env::var("SEO_GATEWAY_BIND_ADDR") {
        builder = builder.bind_addr(addr);
    }
    builder.build()
}
