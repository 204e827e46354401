//! Check command - validates configuration and content.

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr, eyre};
use mdhook_core::{Config, PagePath, frontmatter::parse_frontmatter};
use mdhook_hooks::ShareLinks;
use walkdir::WalkDir;

/// Summary of a content check.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Markdown pages found.
    pub pages: usize,

    /// Pages the share hook would touch.
    pub share_pages: usize,

    /// Human-readable warnings.
    pub warnings: Vec<String>,
}

/// Run the check command.
///
/// Loads and validates the configuration, then walks the content tree
/// reporting pages with missing or unparseable frontmatter and counting
/// the pages that would receive share links.
pub fn run(config_path: &Path, content: &Path, strict: bool) -> Result<()> {
    let config = Config::load(config_path).wrap_err("Failed to load configuration")?;

    if !content.is_dir() {
        return Err(eyre!("content directory not found: {}", content.display()));
    }

    let report = check_content(content, config.hooks.share.enabled)?;

    println!();
    println!("  Configuration OK: {}", config.site.title);
    println!();
    println!("  Pages:       {}", report.pages);
    println!("  Share links: {}", report.share_pages);
    println!();

    if !report.warnings.is_empty() {
        println!("  Warnings:");
        for warn in &report.warnings {
            println!("  ⚠ {warn}");
        }
        println!();
    }

    if strict && !report.warnings.is_empty() {
        return Err(eyre!(
            "{} warning(s) found in strict mode",
            report.warnings.len()
        ));
    }

    Ok(())
}

/// Walk the content tree and collect the check report.
fn check_content(content: &Path, share_enabled: bool) -> Result<CheckReport> {
    let share = ShareLinks::new();
    let mut report = CheckReport::default();

    for entry in WalkDir::new(content) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(content)?;
        let Some(page_path) = PagePath::from_path(rel) else {
            continue;
        };

        report.pages += 1;

        let raw = fs::read_to_string(entry.path())
            .wrap_err_with(|| format!("Failed to read {}", entry.path().display()))?;
        match parse_frontmatter(&raw, entry.path()) {
            Ok((frontmatter, _body)) => {
                if frontmatter.title.is_empty() {
                    report.warnings.push(format!(
                        "{}: missing title, the slug will be used instead",
                        rel.display()
                    ));
                }
            }
            Err(e) => report.warnings.push(format!("{}: {e}", rel.display())),
        }

        if share_enabled && share.matches(&page_path.url()) {
            report.share_pages += 1;
        }
    }

    Ok(report)
}
