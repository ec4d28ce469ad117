//! URL manipulation utilities.
//!
//! Canonical-URL reconstruction from forwarded headers and normalization of
//! the protocol-relative URLs the content platform returns for assets.

use axum::http::HeaderMap;

/// Reconstruct the public origin (`https://host`) of the request.
///
/// The gateway sits behind an edge platform, so the real scheme and host
/// arrive in `x-forwarded-proto` / `x-forwarded-host`, falling back to the
/// plain `host` header. An absent host yields an empty authority, which the
/// caller treats like any other malformed request (redirect fallback).
pub fn request_origin(headers: &HeaderMap) -> String {
    let proto = header_str(headers, "x-forwarded-proto").unwrap_or("https");
    let host = header_str(headers, "x-forwarded-host")
        .or_else(|| header_str(headers, "host"))
        .unwrap_or("");
    format!("{proto}://{host}")
}

/// Normalize a protocol-relative URL (`//images.example.com/a.png`) to https.
///
/// The content platform serves asset URLs without a scheme; crawlers need an
/// absolute URL in og:image.
pub fn normalize_asset_url(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("//") {
        format!("https://{rest}")
    } else {
        url.to_string()
    }
}

/// Strip at most one trailing slash, leaving the root path intact.
pub fn strip_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_origin_from_forwarded_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        headers.insert(
            "x-forwarded-host",
            HeaderValue::from_static("decentraland.org"),
        );
        headers.insert("host", HeaderValue::from_static("internal:8700"));

        assert_eq!(request_origin(&headers), "https://decentraland.org");
    }

    #[test]
    fn test_origin_falls_back_to_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert("host", HeaderValue::from_static("localhost:8700"));

        assert_eq!(request_origin(&headers), "https://localhost:8700");
    }

    #[test]
    fn test_normalize_protocol_relative() {
        assert_eq!(
            normalize_asset_url("//images.ctfassets.net/a/b.png"),
            "https://images.ctfassets.net/a/b.png"
        );
        assert_eq!(
            normalize_asset_url("https://images.ctfassets.net/a/b.png"),
            "https://images.ctfassets.net/a/b.png"
        );
    }

    #[test]
    fn test_strip_trailing_slash() {
        assert_eq!(strip_trailing_slash("/blog/"), "/blog");
        assert_eq!(strip_trailing_slash("/blog"), "/blog");
        assert_eq!(strip_trailing_slash(""), "");
    }
}
