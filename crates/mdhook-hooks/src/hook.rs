//! The hook seam: per-page Markdown transforms.

use mdhook_core::{Config, PageContext, SiteConfig};
use tracing::trace;

/// A per-page Markdown transform.
///
/// Hooks receive a page's Markdown together with its context and the site
/// configuration, and return the replacement Markdown. Implementations must
/// be pure with respect to their inputs: no I/O, no mutation of shared
/// state. That is what allows the driver to run them across pages in
/// parallel.
pub trait MarkdownHook: Send + Sync {
    /// Short identifier for logs and reports.
    fn name(&self) -> &'static str;

    /// Transform one page's Markdown.
    fn on_page_markdown(&self, markdown: &str, page: &PageContext, site: &SiteConfig) -> String;
}

/// The ordered set of enabled hooks.
#[derive(Default)]
pub struct HookSet {
    hooks: Vec<Box<dyn MarkdownHook>>,
}

impl HookSet {
    /// Build the hook set from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut hooks: Vec<Box<dyn MarkdownHook>> = Vec::new();

        if config.hooks.share.enabled {
            hooks.push(Box::new(crate::share::ShareLinks::new()));
        }

        Self { hooks }
    }

    /// Number of enabled hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether no hooks are enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Names of the enabled hooks, in application order.
    pub fn names(&self) -> Vec<&'static str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    /// Fold a page's Markdown through every enabled hook.
    pub fn apply(&self, markdown: String, page: &PageContext, site: &SiteConfig) -> String {
        self.hooks.iter().fold(markdown, |md, hook| {
            trace!(hook = hook.name(), url = %page.url, "applying hook");
            hook.on_page_markdown(&md, page, site)
        })
    }
}
