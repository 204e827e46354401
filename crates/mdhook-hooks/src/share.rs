//! Social share-link injection.
//!
//! Appends share-button links for X, Facebook, WhatsApp, and LinkedIn to
//! blog pages, keyed on the page URL. All other pages pass through
//! untouched.

use mdhook_core::{PageContext, SiteConfig};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use tracing::trace;

use crate::hook::MarkdownHook;

/// X (Twitter) tweet-intent endpoint.
const X_INTENT: &str = "https://x.com/intent/tweet";

/// Facebook sharer endpoint.
const FB_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";

/// WhatsApp send endpoint.
const WA_SHARER: &str = "https://api.whatsapp.com/send";

/// LinkedIn share-article endpoint.
const LI_SHARER: &str = "https://www.linkedin.com/shareArticle";

/// Pages that receive share links: `blog/` followed by a digit 1-9.
const INCLUDE_PATTERN: &str = r"^blog/[1-9].*";

/// Bytes escaped in share query values: everything except ASCII
/// alphanumerics and `_ . - ~ /`.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Share-link injector for blog pages.
#[derive(Debug)]
pub struct ShareLinks {
    include: Regex,
}

impl Default for ShareLinks {
    fn default() -> Self {
        Self::new()
    }
}

impl ShareLinks {
    /// Create a new injector with the include pattern precompiled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            include: Regex::new(INCLUDE_PATTERN).expect("include pattern is valid"),
        }
    }

    /// Whether a page URL receives share links.
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        self.include.is_match(url)
    }

    /// Append share links to `markdown` if `url` is a blog page; any other
    /// URL returns `markdown` unchanged.
    ///
    /// The page URL is the bare concatenation of `site_url` and `url`, so
    /// `site_url` carries the trailing slash. The title is percent-encoded
    /// with a trailing newline included in the query value. Malformed
    /// inputs produce malformed but syntactically valid links; no errors
    /// are raised.
    pub fn inject(&self, markdown: &str, url: &str, title: &str, site_url: &str) -> String {
        if !self.matches(url) {
            return markdown.to_string();
        }

        let page_url = format!("{site_url}{url}");
        let page_title = utf8_percent_encode(&format!("{title}\n"), QUERY_ESCAPE).to_string();

        trace!(url, "appending share links");

        format!(
            "{markdown}\n\
             [Share on :simple-x:]({X_INTENT}?text={page_title}&url={page_url}){{ .md-button }}\n\
             [Share on :simple-facebook:]({FB_SHARER}?u={page_url}){{ .md-button }}\n\
             [Share on :simple-whatsapp:]({WA_SHARER}?text={page_title}%20{page_url}){{ .md-button }}\n\
             [Share on :simple-linkedin:]({LI_SHARER}?mini=true&url={page_url}&title={page_title}){{ .md-button }}\n"
        )
    }
}

impl MarkdownHook for ShareLinks {
    fn name(&self) -> &'static str {
        "share"
    }

    fn on_page_markdown(&self, markdown: &str, page: &PageContext, site: &SiteConfig) -> String {
        self.inject(markdown, &page.url, &page.title, &site.site_url)
    }
}

/// One-shot share-link injection.
///
/// Compiles the include pattern on every call; hold a [`ShareLinks`] when
/// processing many pages.
#[must_use]
pub fn inject(markdown: &str, url: &str, title: &str, site_url: &str) -> String {
    ShareLinks::new().inject(markdown, url, title, site_url)
}

#[cfg(test)]
mod tests {
    use percent_encoding::percent_decode_str;

    use super::*;

    const SITE_URL: &str = "https://example.com/";

    #[test]
    fn test_non_blog_urls_are_identity() {
        let hook = ShareLinks::new();

        for url in ["docs/intro/", "about/", "index.html", "", "myblog/1-x/"] {
            assert_eq!(hook.inject("Body", url, "Title", SITE_URL), "Body");
        }
    }

    #[test]
    fn test_leading_zero_does_not_match() {
        let hook = ShareLinks::new();
        assert!(!hook.matches("blog/0-post"));
        assert_eq!(hook.inject("Body", "blog/0-post", "Title", SITE_URL), "Body");
    }

    #[test]
    fn test_bare_blog_dir_does_not_match() {
        let hook = ShareLinks::new();
        assert!(!hook.matches("blog/"));
        assert_eq!(hook.inject("Body", "blog/", "Title", SITE_URL), "Body");
    }

    #[test]
    fn test_blog_urls_match() {
        let hook = ShareLinks::new();
        assert!(hook.matches("blog/1-my-post"));
        assert!(hook.matches("blog/9-last/"));
        assert!(hook.matches("blog/2024-review/"));
    }

    #[test]
    fn test_blog_page_gets_exact_template() {
        let hook = ShareLinks::new();
        let out = hook.inject("Body", "blog/1-my-post", "Hello", SITE_URL);

        let expected = concat!(
            "Body\n",
            "[Share on :simple-x:](https://x.com/intent/tweet?text=Hello%0A&url=https://example.com/blog/1-my-post){ .md-button }\n",
            "[Share on :simple-facebook:](https://www.facebook.com/sharer/sharer.php?u=https://example.com/blog/1-my-post){ .md-button }\n",
            "[Share on :simple-whatsapp:](https://api.whatsapp.com/send?text=Hello%0A%20https://example.com/blog/1-my-post){ .md-button }\n",
            "[Share on :simple-linkedin:](https://www.linkedin.com/shareArticle?mini=true&url=https://example.com/blog/1-my-post&title=Hello%0A){ .md-button }\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_double_injection_appends_twice() {
        let hook = ShareLinks::new();
        let once = hook.inject("Body", "blog/1-my-post", "Hello", SITE_URL);
        let twice = hook.inject(&once, "blog/1-my-post", "Hello", SITE_URL);

        assert!(twice.starts_with(&once));
        assert_eq!(twice.matches("[Share on :simple-x:]").count(), 2);
    }

    #[test]
    fn test_title_encoding_escapes_reserved_characters() {
        let hook = ShareLinks::new();
        let out = hook.inject("Body", "blog/1-post", "Rust & C++: 100% safe?", SITE_URL);

        assert!(out.contains("text=Rust%20%26%20C%2B%2B%3A%20100%25%20safe%3F%0A&url="));
    }

    #[test]
    fn test_title_encoding_keeps_unreserved_characters() {
        let hook = ShareLinks::new();
        let out = hook.inject("Body", "blog/1-post", "a_b.c-d~e/f", SITE_URL);

        assert!(out.contains("text=a_b.c-d~e/f%0A&url="));
    }

    #[test]
    fn test_title_encoding_utf8() {
        let hook = ShareLinks::new();
        let out = hook.inject("Body", "blog/1-post", "你好", SITE_URL);

        assert!(out.contains("text=%E4%BD%A0%E5%A5%BD%0A&url="));
    }

    #[test]
    fn test_query_values_round_trip() {
        let hook = ShareLinks::new();
        let title = "Hello World";
        let out = hook.inject("Body", "blog/1-my-post", title, SITE_URL);

        // Pull the text param out of the X link
        let start = out.find("?text=").expect("text param") + "?text=".len();
        let end = out[start..].find("&url=").expect("url param") + start;
        let decoded = percent_decode_str(&out[start..end])
            .decode_utf8()
            .expect("valid UTF-8");

        assert_eq!(decoded, format!("{title}\n"));

        // The url param is the bare site_url + url concatenation
        let url_start = end + "&url=".len();
        let url_end = out[url_start..].find(')').expect("link close") + url_start;
        assert_eq!(&out[url_start..url_end], "https://example.com/blog/1-my-post");
    }

    #[test]
    fn test_free_function_matches_method() {
        let hook = ShareLinks::new();
        let markdown = "Body";

        assert_eq!(
            inject(markdown, "blog/3-notes/", "Notes", SITE_URL),
            hook.inject(markdown, "blog/3-notes/", "Notes", SITE_URL)
        );
    }

    #[test]
    fn test_hook_trait_uses_page_context() {
        let hook = ShareLinks::new();
        let page = PageContext::new("blog/1-my-post/", "Hello");
        let site = SiteConfig {
            title: "Test".to_string(),
            site_url: SITE_URL.to_string(),
            description: None,
        };

        let out = hook.on_page_markdown("Body", &page, &site);
        assert_eq!(out, hook.inject("Body", "blog/1-my-post/", "Hello", SITE_URL));
        assert!(out.contains("https://example.com/blog/1-my-post/"));
    }
}
