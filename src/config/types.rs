//! Gateway configuration.
//!
//! All knobs have compile-time defaults from [`crate::utils::constants`];
//! the binary applies environment overrides on top. Fields are `pub(crate)`
//! with read-only getters so invariants stay inside the builder.

use crate::utils::constants::{
    CMS_BASE_URL, DEFAULT_BIND_ADDR, DEFAULT_DESCRIPTION, DEFAULT_IMAGE, DEFAULT_POST_SCAN_LIMIT,
    DEFAULT_TITLE, DEFAULT_UPSTREAM_TIMEOUT_SECS, SITE_NAME,
};

/// Runtime configuration for the SEO gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Content platform root; list/entry/asset endpoints hang off this.
    pub(crate) cms_base_url: String,
    pub(crate) site_name: String,
    pub(crate) default_title: String,
    pub(crate) default_description: String,
    pub(crate) default_image: String,
    /// Where to fetch the SPA shell from. `None` means the public origin
    /// reconstructed from the request's forwarded headers.
    pub(crate) shell_origin: Option<String>,
    /// Bounded page size when matching a post slug client-side.
    pub(crate) post_scan_limit: usize,
    /// Per-request timeout applied to every upstream fetch.
    pub(crate) upstream_timeout_secs: u64,
    pub(crate) bind_addr: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            cms_base_url: CMS_BASE_URL.to_string(),
            site_name: SITE_NAME.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            default_description: DEFAULT_DESCRIPTION.to_string(),
            default_image: DEFAULT_IMAGE.to_string(),
            shell_origin: None,
            post_scan_limit: DEFAULT_POST_SCAN_LIMIT,
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl GatewayConfig {
    /// Start building a config from the compile-time defaults.
    #[must_use]
    pub fn builder() -> super::builder::GatewayConfigBuilder {
        super::builder::GatewayConfigBuilder::default()
    }

    #[must_use]
    pub fn cms_base_url(&self) -> &str {
        &self.cms_base_url
    }

    #[must_use]
    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    #[must_use]
    pub fn default_title(&self) -> &str {
        &self.default_title
    }

    #[must_use]
    pub fn default_description(&self) -> &str {
        &self.default_description
    }

    #[must_use]
    pub fn default_image(&self) -> &str {
        &self.default_image
    }

    #[must_use]
    pub fn shell_origin(&self) -> Option<&str> {
        self.shell_origin.as_deref()
    }

    #[must_use]
    pub fn post_scan_limit(&self) -> usize {
        self.post_scan_limit
    }

    #[must_use]
    pub fn upstream_timeout_secs(&self) -> u64 {
        self.upstream_timeout_secs
    }

    #[must_use]
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
}
