//! Chapter resolution and navigation for Quire.
//!
//! This crate provides:
//! - [`ChapterResolver`]: resolves one chapter for rendering, or every chapter
//!   of a category for navigation and static generation
//! - [`Chapter`]: the immutable, render-ready page model
//! - [`Navigation`]: chapters grouped per category for menus
//! - URL helpers for the `/docs/{category}/{slug}` convention
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use quire_chapters::{ChapterResolver, Navigation};
//! use quire_content::{CategorySelector, FsContentStore, SlugMatch};
//! use quire_renderer::{MarkdownRenderer, Placeholders};
//!
//! let store = Arc::new(FsContentStore::open(PathBuf::from("docs"), SlugMatch::Exact)?);
//! let resolver = ChapterResolver::new(store, Arc::new(MarkdownRenderer::new()));
//!
//! // Render a single chapter
//! let chapter = resolver.find("framework", "getting-started", &Placeholders::new())?;
//!
//! // Build the menu
//! let listing = resolver.all(&CategorySelector::All)?;
//! let nav = Navigation::from_chapters(&listing.chapters);
//! # Ok(())
//! # }
//! ```

mod chapter;
mod error;
mod navigation;
mod resolver;
mod routes;

pub use chapter::{Chapter, merge_front_matter};
pub use error::ChapterError;
pub use navigation::{NavCategory, NavItem, Navigation};
pub use resolver::{ChapterResolver, Listing, SkippedChapter};
pub use routes::{ChapterRoute, DOCS_PREFIX, canonical_route, chapter_href, parse_docs_path};
