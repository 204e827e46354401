//! Frontmatter parsing for content files.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Frontmatter metadata for content files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Page title.
    #[serde(default)]
    pub title: String,

    /// Publication date.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    /// Whether this is a draft.
    #[serde(default)]
    pub draft: bool,

    /// Page description for meta tags and summaries.
    #[serde(default)]
    pub description: Option<String>,
}

/// Delimiter types for frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML frontmatter delimited by `---`.
    Yaml,
    /// TOML frontmatter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into frontmatter and body.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start();

    // Detect format based on opening delimiter
    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();

    // Find the closing delimiter
    let after_first = &content[delimiter.len()..];
    let closing_pos = after_first.find(delimiter)?;

    let frontmatter = after_first[..closing_pos].trim();
    let body = after_first[closing_pos + delimiter.len()..].trim_start();

    Some((format, frontmatter, body))
}

/// Parse frontmatter from a string.
///
/// The returned body is always a suffix of the input, so the original
/// frontmatter block can be recovered by slicing the head off.
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<(Frontmatter, String)> {
    let Some((format, fm_str, body)) = split_frontmatter(content) else {
        // No frontmatter found, return default with full content
        return Ok((Frontmatter::default(), content.to_string()));
    };

    let frontmatter: Frontmatter = match format {
        FrontmatterFormat::Yaml => {
            serde_yaml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
        FrontmatterFormat::Toml => {
            toml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
    };

    Ok((frontmatter, body.to_string()))
}

impl Frontmatter {
    /// Validate required fields.
    pub fn validate(&self, path: &Path) -> Result<()> {
        if self.title.is_empty() {
            return Err(CoreError::frontmatter(path, "title is required"));
        }
        Ok(())
    }
}
