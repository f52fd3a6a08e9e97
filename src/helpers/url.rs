//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Characters escaped by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URL component
///
/// # Examples
/// ```ignore
/// encode_uri_component("a b&c") // -> "a%20b%26c"
/// ```
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Substitute `{name}` in a path pattern
///
/// # Examples
/// ```ignore
/// fill_path("/content/blog/{slug}.md", "slug", "hello") // -> "/content/blog/hello.md"
/// ```
pub fn fill_path(pattern: &str, name: &str, value: &str) -> String {
    pattern.replace(&format!("{{{}}}", name), value)
}

/// Featured image URL for a declared image name
///
/// Unknown names fall back to the `default` keyword.
pub fn image_url(config: &SiteConfig, image_name: &str) -> String {
    let keyword = config
        .image_keywords
        .get(image_name)
        .or_else(|| config.image_keywords.get("default"))
        .map(String::as_str)
        .unwrap_or_default();
    format!("{}{}", config.image_service, encode_uri_component(keyword))
}

/// Social share links for a page, keyed by platform
pub fn share_urls(title: &str, url: &str) -> Vec<(&'static str, String)> {
    let title = encode_uri_component(title);
    let url = encode_uri_component(url);

    vec![
        (
            "twitter",
            format!("https://twitter.com/intent/tweet?text={}&url={}", title, url),
        ),
        (
            "linkedin",
            format!(
                "https://www.linkedin.com/shareArticle?mini=true&url={}&title={}",
                url, title
            ),
        ),
        (
            "facebook",
            format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
        ),
    ]
}
