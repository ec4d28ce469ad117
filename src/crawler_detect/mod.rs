//! Crawler classification from the declared user-agent.
//!
//! Search engines and social link-unfurlers announce themselves with stable
//! signature substrings. Matching is case-insensitive and purely textual;
//! this is a routing heuristic, not a security control.

/// Known crawler and preview-bot user-agent signatures.
///
/// Data, not logic: extending coverage means adding a line here. Grouped by
/// category, matched as lower-case substrings.
pub const CRAWLER_SIGNATURES: &[&str] = &[
    // Search engines
    "googlebot",
    "bingbot",
    "slurp",
    "duckduckbot",
    "baiduspider",
    "yandexbot",
    // Social preview bots
    "facebookexternalhit",
    "facebot",
    "twitterbot",
    "linkedinbot",
    "pinterest",
    "redditbot",
    "vkshare",
    // Messenger link unfurlers
    "whatsapp",
    "telegrambot",
    "discordbot",
    "slackbot",
    // Generic preview / headless tooling
    "embedly",
    "opengraph",
    "metatags",
    "prerender",
    "headless",
    "quora link preview",
    "showyoubot",
    "outbrain",
    "rogerbot",
];

/// Decide whether a request should receive rewritten HTML.
///
/// An absent user-agent header arrives as an empty string and is never a
/// crawler. The `seo=true` test override is applied by the orchestrator, not
/// here; this function looks at the user-agent alone.
#[must_use]
pub fn is_crawler_request(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    CRAWLER_SIGNATURES.iter().any(|sig| ua.contains(sig))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_common_crawlers() {
        assert!(is_crawler_request(
            "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)"
        ));
        assert!(is_crawler_request("facebookexternalhit/1.1"));
        assert!(is_crawler_request("Twitterbot/1.0"));
        assert!(is_crawler_request("Slackbot-LinkExpanding 1.0"));
        assert!(is_crawler_request("WhatsApp/2.19.81 A"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(is_crawler_request("GoogleBot/2.1"));
        assert!(is_crawler_request("FACEBOOKEXTERNALHIT/1.1"));
    }

    #[test]
    fn test_browsers_are_not_crawlers() {
        assert!(!is_crawler_request(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
        ));
        assert!(!is_crawler_request(""));
    }

    #[test]
    fn test_headless_tools_are_crawlers() {
        assert!(is_crawler_request(
            "Mozilla/5.0 (X11; Linux x86_64) HeadlessChrome/119.0"
        ));
        assert!(is_crawler_request("prerender"));
    }
}
