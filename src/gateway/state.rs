//! Shared per-process state and the shell-origin fetch.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use thiserror::Error;
use url::Url;

use crate::config::GatewayConfig;
use crate::content::{ContentClient, EntryCache};

/// State handed to every request handler.
///
/// Cloned per request; everything inside is shared. There is no mutable
/// state here — each invocation is independent unless an [`EntryCache`] was
/// explicitly injected.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub content: ContentClient,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build the state: one shared HTTP client with the configured upstream
    /// timeout, and a content client rooted at the CMS base URL.
    pub fn from_config(config: GatewayConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs()))
            .build()
            .context("failed to build upstream http client")?;
        let content = ContentClient::new(http.clone(), config.cms_base_url());

        Ok(Self {
            config: Arc::new(config),
            content,
            http,
        })
    }

    /// Opt in to the reference cache layer.
    #[must_use]
    pub fn with_entry_cache(mut self, cache: Arc<EntryCache>) -> Self {
        self.content = self.content.with_cache(cache);
        self
    }
}

/// Why the SPA shell could not be fetched.
///
/// Either way the orchestrator degrades to the redirect fallback; the split
/// exists for log taxonomy.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("invalid shell origin {0:?}")]
    BadOrigin(String),
    #[error("shell origin returned {0}")]
    Status(reqwest::StatusCode),
    #[error("shell origin unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// GET `{origin}/index.html`, the unmodified SPA shell.
///
/// The origin may come straight from forwarded headers, so it is parsed
/// before use; a garbled host degrades like any other shell failure.
pub async fn fetch_shell(http: &reqwest::Client, origin: &str) -> Result<String, ShellError> {
    let url = Url::parse(origin)
        .and_then(|base| base.join("/index.html"))
        .map_err(|_| ShellError::BadOrigin(origin.to_string()))?;

    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ShellError::Status(status));
    }
    Ok(response.text().await?)
}
