//! Targeted meta-tag rewriting over the SPA shell.
//!
//! The shell is a single trusted static document with exactly one occurrence
//! of each tag the gateway cares about, so this module does string-level
//! substitution with tightly anchored regexes instead of full HTML parsing.
//! Each substitution replaces the first match in place; a tag missing from
//! the shell skips that one substitution only. Re-applying the rewrite with
//! the same inputs is a fixed point.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::seo::SeoData;
use crate::utils::constants::{DEFAULT_OG_IMAGE_HEIGHT, DEFAULT_OG_IMAGE_WIDTH};

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title>.*?</title>").expect("valid title pattern"));
static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta name="description" content="[^"]*"[^>]*>"#)
        .expect("valid description pattern")
});
static CANONICAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<link rel="canonical" href="[^"]*"[^>]*>"#).expect("valid canonical pattern")
});

static OG_TITLE_RE: Lazy<Regex> = Lazy::new(|| meta_property_pattern("og:title"));
static OG_DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| meta_property_pattern("og:description"));
static OG_IMAGE_RE: Lazy<Regex> = Lazy::new(|| meta_property_pattern("og:image"));
static OG_URL_RE: Lazy<Regex> = Lazy::new(|| meta_property_pattern("og:url"));
static OG_TYPE_RE: Lazy<Regex> = Lazy::new(|| meta_property_pattern("og:type"));

static TWITTER_TITLE_RE: Lazy<Regex> = Lazy::new(|| meta_name_pattern("twitter:title"));
static TWITTER_DESCRIPTION_RE: Lazy<Regex> =
    Lazy::new(|| meta_name_pattern("twitter:description"));
static TWITTER_IMAGE_RE: Lazy<Regex> = Lazy::new(|| meta_name_pattern("twitter:image"));

static ARTICLE_AUTHOR_RE: Lazy<Regex> = Lazy::new(|| meta_property_pattern("article:author"));
static ARTICLE_TIME_RE: Lazy<Regex> =
    Lazy::new(|| meta_property_pattern("article:published_time"));
static ARTICLE_SECTION_RE: Lazy<Regex> = Lazy::new(|| meta_property_pattern("article:section"));

fn meta_property_pattern(property: &str) -> Regex {
    Regex::new(&format!(
        r#"(?i)<meta property="{}" content="[^"]*"[^>]*>"#,
        regex::escape(property)
    ))
    .expect("valid meta property pattern")
}

fn meta_name_pattern(name: &str) -> Regex {
    Regex::new(&format!(
        r#"(?i)<meta name="{}" content="[^"]*"[^>]*>"#,
        regex::escape(name)
    ))
    .expect("valid meta name pattern")
}

/// Rewrite the shell's SEO-relevant tags from a resolved [`SeoData`] record.
///
/// `canonical_url` is the full public URL of the page (origin + path), never
/// the gateway's own endpoint path. `site_name` is appended to the page
/// title. Everything outside the enumerated tags is passed through
/// byte-for-byte.
#[must_use]
pub fn rewrite_html(original: &str, seo: &SeoData, canonical_url: &str, site_name: &str) -> String {
    let full_title = format!("{} | {}", seo.title, site_name);
    let title_text = html_escape::encode_text(&full_title).into_owned();
    let title_attr = attr(&full_title);
    let description = attr(&seo.description);
    let image = attr(&seo.image_url);
    let url = attr(canonical_url);
    let og_type = if seo.is_article() { "article" } else { "website" };

    let mut html = original.to_string();

    html = replace_first(html, &TITLE_RE, &format!("<title>{title_text}</title>"));
    html = replace_first(
        html,
        &DESCRIPTION_RE,
        &format!(r#"<meta name="description" content="{description}">"#),
    );
    html = replace_first(
        html,
        &CANONICAL_RE,
        &format!(r#"<link rel="canonical" href="{url}">"#),
    );

    html = replace_first(
        html,
        &OG_TITLE_RE,
        &format!(r#"<meta property="og:title" content="{title_attr}">"#),
    );
    html = replace_first(
        html,
        &OG_DESCRIPTION_RE,
        &format!(r#"<meta property="og:description" content="{description}">"#),
    );
    html = replace_first(
        html,
        &OG_IMAGE_RE,
        &format!(r#"<meta property="og:image" content="{image}">"#),
    );
    html = replace_first(
        html,
        &OG_URL_RE,
        &format!(r#"<meta property="og:url" content="{url}">"#),
    );
    html = replace_first(
        html,
        &OG_TYPE_RE,
        &format!(r#"<meta property="og:type" content="{og_type}">"#),
    );

    html = replace_first(
        html,
        &TWITTER_TITLE_RE,
        &format!(r#"<meta name="twitter:title" content="{title_attr}">"#),
    );
    html = replace_first(
        html,
        &TWITTER_DESCRIPTION_RE,
        &format!(r#"<meta name="twitter:description" content="{description}">"#),
    );
    html = replace_first(
        html,
        &TWITTER_IMAGE_RE,
        &format!(r#"<meta name="twitter:image" content="{image}">"#),
    );

    html = inject_image_dimensions(html, seo);
    html = apply_article_meta(html, seo);

    html
}

/// Replace the first match, leaving the document untouched when the target
/// tag is absent.
fn replace_first(html: String, re: &Regex, replacement: &str) -> String {
    match re.replace(&html, NoExpand(replacement)) {
        Cow::Borrowed(_) => html,
        Cow::Owned(rewritten) => rewritten,
    }
}

/// Add og:image:width / og:image:height after the og:image tag when the
/// shell carries none. Skipped entirely if any width tag is already present,
/// which also keeps repeat application stable.
fn inject_image_dimensions(mut html: String, seo: &SeoData) -> String {
    if html.contains("og:image:width") {
        return html;
    }
    let Some(range) = OG_IMAGE_RE.find(&html).map(|m| m.range()) else {
        return html;
    };

    let width = seo.image_width.unwrap_or(DEFAULT_OG_IMAGE_WIDTH);
    let height = seo.image_height.unwrap_or(DEFAULT_OG_IMAGE_HEIGHT);
    let tag = &html[range.clone()];
    let insert = format!(
        "{tag}\n    <meta property=\"og:image:width\" content=\"{width}\">\n    <meta property=\"og:image:height\" content=\"{height}\">"
    );
    html.replace_range(range, &insert);
    html
}

/// Ensure article meta tags exist (and are current) for article pages.
///
/// Tags are injected immediately before `</head>` on first application and
/// replaced in place on any later application, so the document never
/// accumulates duplicates.
fn apply_article_meta(mut html: String, seo: &SeoData) -> String {
    let (Some(author), Some(published)) = (&seo.author, &seo.published_date) else {
        return html;
    };
    let author = attr(author);
    let published = attr(published);

    if ARTICLE_AUTHOR_RE.is_match(&html) {
        html = replace_first(
            html,
            &ARTICLE_AUTHOR_RE,
            &format!(r#"<meta property="article:author" content="{author}">"#),
        );
        html = replace_first(
            html,
            &ARTICLE_TIME_RE,
            &format!(r#"<meta property="article:published_time" content="{published}">"#),
        );
        if let Some(category) = &seo.category {
            html = replace_first(
                html,
                &ARTICLE_SECTION_RE,
                &format!(
                    r#"<meta property="article:section" content="{}">"#,
                    attr(category)
                ),
            );
        }
        return html;
    }

    let mut block = format!(
        "\n    <meta property=\"article:author\" content=\"{author}\">\n    <meta property=\"article:published_time\" content=\"{published}\">"
    );
    if let Some(category) = &seo.category {
        block.push_str(&format!(
            "\n    <meta property=\"article:section\" content=\"{}\">",
            attr(category)
        ));
    }
    block.push_str("\n  </head>");
    html.replacen("</head>", &block, 1)
}

fn attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}
