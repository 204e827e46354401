//! mdhook CLI Library
//!
//! This library provides the command implementations for the mdhook
//! Markdown post-processor. It is used by the binary entry point while
//! also exposing public APIs for integration purposes.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (apply, check)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use mdhook::cmd;
//!
//! // Apply the configured hooks to a content tree
//! cmd::apply::run(
//!     Path::new("mdhook.toml"),
//!     Path::new("docs"),
//!     Path::new("public"),
//!     false,
//! )
//! .unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use mdhook_core::{Config, Frontmatter, PageContext, PagePath, SiteConfig};
pub use mdhook_hooks::{HookSet, MarkdownHook, ShareLinks};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
