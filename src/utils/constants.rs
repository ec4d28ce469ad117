//! Shared configuration constants for the SEO gateway
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic strings.

/// Content platform base URL (space + environment baked in)
///
/// Every outbound CMS request is rooted here. Overridable at runtime via
/// `SEO_GATEWAY_CMS_BASE_URL` for staging environments.
pub const CMS_BASE_URL: &str = "https://cms.decentraland.org/spaces/ea2ybdmmn1kv/environments/master";

/// Site name appended to every rewritten `<title>` and og:title
pub const SITE_NAME: &str = "Decentraland";

/// Title served when the upstream entry is missing or unreachable
pub const DEFAULT_TITLE: &str = "Decentraland Blog";

/// Description served when the upstream entry is missing or unreachable
pub const DEFAULT_DESCRIPTION: &str =
    "Stay up to date with Decentraland announcements, updates, community highlights, and more.";

/// Preview image served when no entry image can be resolved
pub const DEFAULT_IMAGE: &str = "https://cms-images.decentraland.org/ea2ybdmmn1kv/7tYISdowuJYIbSIDqij87H/f3524d454d8e29702792a6b674f5550d/GI_Landscape.Small.png";

/// Per-request timeout for every upstream fetch (CMS and shell origin)
///
/// A slow CMS must degrade to the redirect fallback, never hang the
/// edge invocation. 5 seconds is well under typical crawler patience.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;

/// How many posts a single bounded list fetch scans when matching a slug
///
/// Posts older than this page boundary fall through to default SEO data.
/// Raising it trades latency for completeness on every post request.
pub const DEFAULT_POST_SCAN_LIMIT: usize = 200;

/// Fallback og:image dimensions when the asset record carries none
pub const DEFAULT_OG_IMAGE_WIDTH: u32 = 1200;
pub const DEFAULT_OG_IMAGE_HEIGHT: u32 = 630;

/// `Cache-Control` value on every rewritten 200 response
pub const REWRITTEN_CACHE_CONTROL: &str = "public, max-age=3600";

/// Default bind address for the gateway binary
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8700";
