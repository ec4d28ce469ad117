//! Route classification for blog paths.
//!
//! Maps a URL path to one of a closed set of page intents. Pure string work;
//! no I/O. Ordering of the checks is load-bearing: `/blog/author/:slug` must
//! win over the generic one- and two-segment patterns, and the two-segment
//! post pattern must be tried before the one-segment category pattern.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::strip_trailing_slash;

/// Page intent for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteInfo {
    /// Blog landing / post list
    List,
    /// Single post under a category
    Post {
        category_slug: String,
        post_slug: String,
    },
    /// Category listing
    Category { category_slug: String },
    /// Author page
    Author { author_slug: String },
    /// Search page (SEO data synthesized from the query string)
    Search,
    /// Anything else; treated like the list intent downstream
    Unknown,
}

impl RouteInfo {
    /// Short tag for diagnostics headers and logs.
    #[must_use]
    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Post { .. } => "post",
            Self::Category { .. } => "category",
            Self::Author { .. } => "author",
            Self::Search => "search",
            Self::Unknown => "unknown",
        }
    }
}

static AUTHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/blog/author/([^/]+)$").expect("valid author route pattern"));
static POST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/blog/([^/]+)/([^/]+)$").expect("valid post route pattern"));
static CATEGORY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/blog/([^/]+)$").expect("valid category route pattern"));

/// Classify a request path into a [`RouteInfo`].
#[must_use]
pub fn parse_route(pathname: &str) -> RouteInfo {
    let path = strip_trailing_slash(pathname);

    if path.is_empty() || path == "/blog" {
        return RouteInfo::List;
    }

    if path == "/blog/search" {
        return RouteInfo::Search;
    }

    if let Some(caps) = AUTHOR_RE.captures(path) {
        return RouteInfo::Author {
            author_slug: caps[1].to_string(),
        };
    }

    if let Some(caps) = POST_RE.captures(path) {
        return RouteInfo::Post {
            category_slug: caps[1].to_string(),
            post_slug: caps[2].to_string(),
        };
    }

    if let Some(caps) = CATEGORY_RE.captures(path) {
        return RouteInfo::Category {
            category_slug: caps[1].to_string(),
        };
    }

    RouteInfo::Unknown
}
