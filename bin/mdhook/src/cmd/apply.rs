//! Apply command - runs the hook set over a content tree.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use color_eyre::eyre::{Result, WrapErr, eyre};
use mdhook_core::{Config, PageContext, PagePath, frontmatter::parse_frontmatter};
use mdhook_hooks::HookSet;
use rayon::prelude::*;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Statistics from an apply run.
#[derive(Debug, Clone, Default)]
pub struct ApplyStats {
    /// Markdown pages written.
    pub pages: usize,

    /// Pages whose Markdown a hook changed.
    pub changed: usize,

    /// Draft pages skipped.
    pub drafts_skipped: usize,

    /// Non-Markdown files copied through unchanged.
    pub assets: usize,
}

enum PageOutcome {
    Written { changed: bool },
    DraftSkipped,
}

/// Run the apply command.
///
/// Walks the content tree, applies the configured hooks to every page, and
/// writes the transformed Markdown into the output tree mirroring the
/// source layout. Non-Markdown files are copied through unchanged.
pub fn run(config_path: &Path, content: &Path, output: &Path, drafts: bool) -> Result<ApplyStats> {
    let start = Instant::now();
    info!(?config_path, ?content, ?output, drafts, "starting apply");

    let config = Config::load(config_path).wrap_err("Failed to load configuration")?;
    let hooks = HookSet::from_config(&config);
    debug!(hooks = ?hooks.names(), "enabled hooks");

    if !content.is_dir() {
        return Err(eyre!("content directory not found: {}", content.display()));
    }

    // Partition the tree into pages and pass-through assets
    let mut pages: Vec<(PathBuf, PagePath)> = Vec::new();
    let mut assets: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(content) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(content)?;
        match PagePath::from_path(rel) {
            Some(page_path) => pages.push((entry.path().to_path_buf(), page_path)),
            None => assets.push(rel.to_path_buf()),
        }
    }

    // Hooks are pure per-page transforms, so pages process in parallel
    let outcomes: Vec<PageOutcome> = pages
        .par_iter()
        .map(|(source, page_path)| process_page(source, page_path, &config, &hooks, output, drafts))
        .collect::<Result<_>>()?;

    let mut stats = ApplyStats::default();
    for outcome in &outcomes {
        match outcome {
            PageOutcome::Written { changed } => {
                stats.pages += 1;
                if *changed {
                    stats.changed += 1;
                }
            }
            PageOutcome::DraftSkipped => stats.drafts_skipped += 1,
        }
    }

    for rel in &assets {
        let dest = output.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(content.join(rel), &dest)?;
    }
    stats.assets = assets.len();

    let duration = start.elapsed();

    println!();
    println!("  Hooks applied successfully!");
    println!();
    println!("  Pages:    {}", stats.pages);
    println!("  Changed:  {}", stats.changed);
    println!("  Drafts:   {}", stats.drafts_skipped);
    println!("  Assets:   {}", stats.assets);
    println!();
    println!("  Duration: {:.2}s", duration.as_secs_f64());
    println!("  Output:   {}", output.display());
    println!();

    info!(?stats, ?duration, "apply completed");

    Ok(stats)
}

/// Transform a single page and write it to the output tree.
fn process_page(
    source: &Path,
    page_path: &PagePath,
    config: &Config,
    hooks: &HookSet,
    output: &Path,
    drafts: bool,
) -> Result<PageOutcome> {
    let raw = fs::read_to_string(source)
        .wrap_err_with(|| format!("Failed to read {}", source.display()))?;
    let (frontmatter, body) = parse_frontmatter(&raw, source)?;

    if frontmatter.draft && !drafts {
        debug!(path = %source.display(), "skipping draft");
        return Ok(PageOutcome::DraftSkipped);
    }

    // Untitled pages fall back to the slug tail
    let title = if frontmatter.title.is_empty() {
        page_path
            .slug
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string()
    } else {
        frontmatter.title.clone()
    };
    let page = PageContext::new(page_path.url(), title);

    // parse_frontmatter returns the body as a suffix of the input, so the
    // original frontmatter block survives byte-for-byte
    let head = &raw[..raw.len() - body.len()];
    let transformed = hooks.apply(body.clone(), &page, &config.site);
    let changed = transformed != body;

    let dest = output.join(&page_path.path);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&dest, format!("{head}{transformed}"))
        .wrap_err_with(|| format!("Failed to write {}", dest.display()))?;

    Ok(PageOutcome::Written { changed })
}
