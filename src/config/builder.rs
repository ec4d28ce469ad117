//! Fluent builder for [`GatewayConfig`].
//!
//! Every field has a sane default, so `build()` is infallible; the builder
//! exists to keep call sites readable and to normalize inputs (trailing
//! slashes on base URLs) in one place.

use super::types::GatewayConfig;

#[derive(Debug, Clone, Default)]
pub struct GatewayConfigBuilder {
    config: GatewayConfig,
}

impl GatewayConfigBuilder {
    /// Content platform root URL. A trailing slash is stripped so endpoint
    /// concatenation stays predictable.
    #[must_use]
    pub fn cms_base_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.config.cms_base_url = url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn site_name(mut self, name: impl Into<String>) -> Self {
        self.config.site_name = name.into();
        self
    }

    #[must_use]
    pub fn default_title(mut self, title: impl Into<String>) -> Self {
        self.config.default_title = title.into();
        self
    }

    #[must_use]
    pub fn default_description(mut self, description: impl Into<String>) -> Self {
        self.config.default_description = description.into();
        self
    }

    #[must_use]
    pub fn default_image(mut self, image: impl Into<String>) -> Self {
        self.config.default_image = image.into();
        self
    }

    /// Fixed origin to fetch the SPA shell from, overriding the per-request
    /// forwarded-header origin. Used when the shell is served from an
    /// internal host (and by tests).
    #[must_use]
    pub fn shell_origin(mut self, origin: impl Into<String>) -> Self {
        let origin: String = origin.into();
        self.config.shell_origin = Some(origin.trim_end_matches('/').to_string());
        self
    }

    #[must_use]
    pub fn post_scan_limit(mut self, limit: usize) -> Self {
        self.config.post_scan_limit = limit;
        self
    }

    #[must_use]
    pub fn upstream_timeout_secs(mut self, secs: u64) -> Self {
        self.config.upstream_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.bind_addr = addr.into();
        self
    }

    #[must_use]
    pub fn build(self) -> GatewayConfig {
        self.config
    }
}
