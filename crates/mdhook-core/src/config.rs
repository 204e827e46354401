//! Site and hook configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for mdhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Per-hook settings.
    #[serde(default)]
    pub hooks: HooksConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Absolute base URL for the site (e.g., "https://example.com/").
    /// Composed with page URLs by bare concatenation, so the trailing
    /// slash belongs here.
    pub site_url: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,
}

/// Per-hook configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HooksConfig {
    /// Share-link hook settings.
    #[serde(default)]
    pub share: ShareConfig,
}

/// Share-link hook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Whether share links are appended to blog pages.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate for more flexibility.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("MDHOOK").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.site_url.is_empty() {
            return Err(CoreError::config("site.site_url cannot be empty"));
        }

        if !self.site.site_url.starts_with("http://") && !self.site.site_url.starts_with("https://")
        {
            tracing::warn!(
                site_url = %self.site.site_url,
                "site.site_url is not an absolute http(s) URL; generated share links will be malformed"
            );
        }

        Ok(())
    }
}
