//! mdhook Hook Library
//!
//! Per-page Markdown transforms applied during documentation-site
//! post-processing.
//!
//! # Modules
//!
//! - [`hook`] - The hook seam: the [`MarkdownHook`] trait and [`HookSet`]
//! - [`share`] - Social share-link injection for blog pages

pub mod hook;
pub mod share;

pub use hook::{HookSet, MarkdownHook};
pub use share::{ShareLinks, inject};
