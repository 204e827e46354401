//! Page context passed to hooks, and URL derivation from content paths.

use std::path::{Path, PathBuf};

/// Per-page context supplied to every hook invocation.
///
/// Read-only to hooks; the driver owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Site-relative URL path for the page, directory-URL style with no
    /// leading slash (e.g., "blog/1-my-post/").
    pub url: String,

    /// Human-readable page title.
    pub title: String,
}

impl PageContext {
    /// Create a new page context.
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Parsed content path with slug extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePath {
    /// Original file path, relative to the content root.
    pub path: PathBuf,

    /// URL slug derived from the path.
    pub slug: String,
}

impl PagePath {
    /// Parse a content-relative path to extract the URL slug.
    ///
    /// Supports patterns like:
    /// - `blog/1-my-post.md` → slug: "blog/1-my-post"
    /// - `blog/1-my-post/index.md` → slug: "blog/1-my-post"
    /// - `about.md` → slug: "about"
    ///
    /// Returns `None` for non-Markdown files.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if !matches!(extension.to_lowercase().as_str(), "md" | "markdown") {
            return None;
        }

        let stem = path.file_stem()?.to_str()?;
        let parent = path.parent().unwrap_or(Path::new(""));

        let slug = if stem == "index" {
            // For index files, use the parent directory as the slug
            parent.to_string_lossy().to_string()
        } else if parent.as_os_str().is_empty() {
            stem.to_string()
        } else {
            format!("{}/{}", parent.display(), stem)
        };

        // Normalize: forward slashes, no leading/trailing separators
        let slug = slug.replace('\\', "/").trim_matches('/').to_string();

        Some(Self {
            path: path.to_path_buf(),
            slug,
        })
    }

    /// Get the site-relative URL for this page.
    ///
    /// Directory-URL style: "blog/1-my-post/". The site root index maps to
    /// the empty string.
    #[must_use]
    pub fn url(&self) -> String {
        if self.slug.is_empty() {
            String::new()
        } else {
            format!("{}/", self.slug)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_path_simple() {
        let pp = PagePath::from_path(Path::new("blog/1-my-post.md")).expect("parse path");

        assert_eq!(pp.slug, "blog/1-my-post");
        assert_eq!(pp.url(), "blog/1-my-post/");
    }

    #[test]
    fn test_page_path_index_file() {
        let pp = PagePath::from_path(Path::new("blog/1-my-post/index.md")).expect("parse path");

        assert_eq!(pp.slug, "blog/1-my-post");
        assert_eq!(pp.url(), "blog/1-my-post/");
    }

    #[test]
    fn test_page_path_top_level() {
        let pp = PagePath::from_path(Path::new("about.md")).expect("parse path");

        assert_eq!(pp.slug, "about");
        assert_eq!(pp.url(), "about/");
    }

    #[test]
    fn test_page_path_root_index() {
        let pp = PagePath::from_path(Path::new("index.md")).expect("parse path");

        assert_eq!(pp.slug, "");
        assert_eq!(pp.url(), "");
    }

    #[test]
    fn test_page_path_markdown_extension() {
        let pp = PagePath::from_path(Path::new("docs/guide.markdown")).expect("parse path");

        assert_eq!(pp.slug, "docs/guide");
    }

    #[test]
    fn test_page_path_non_markdown() {
        assert!(PagePath::from_path(Path::new("assets/logo.png")).is_none());
        assert!(PagePath::from_path(Path::new("style.css")).is_none());
        assert!(PagePath::from_path(Path::new("README")).is_none());
    }

    #[test]
    fn test_page_context_new() {
        let page = PageContext::new("blog/1-my-post/", "My Post");
        assert_eq!(page.url, "blog/1-my-post/");
        assert_eq!(page.title, "My Post");
    }
}
