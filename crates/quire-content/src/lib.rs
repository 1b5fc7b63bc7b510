//! Content discovery and front matter extraction for Quire.
//!
//! This crate provides the leaf components of the chapter pipeline:
//!
//! - [`ContentStore`] trait for locating chapter files by category and slug
//! - [`FsContentStore`] implementation rooted at a content directory
//! - [`MockContentStore`] for testing (behind `mock` feature flag)
//! - [`parse_filename`] for the `[<digits>-]<slug>.md` naming convention
//! - [`extract_front_matter`] for `---` fenced YAML headers
//!
//! # Content Layout
//!
//! ```text
//! docs/
//! ├── framework/
//! │   ├── 01-getting-started.md
//! │   ├── 02-routing.md
//! │   └── changelog.md
//! └── console/
//!     └── 01-getting-started.md
//! ```
//!
//! Each top-level directory is a category. Files are never written back.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use quire_content::{CategorySelector, ContentStore, FsContentStore, SlugMatch};
//!
//! let store = FsContentStore::open(PathBuf::from("docs"), SlugMatch::Exact)?;
//! for entry in store.list(&CategorySelector::All)? {
//!     println!("{}/{}", entry.category, entry.file_name);
//! }
//! ```

mod filename;
mod front_matter;
mod fs;
#[cfg(feature = "mock")]
mod mock;
mod store;

pub use filename::{ParsedName, parse_filename};
pub use front_matter::{FrontMatter, FrontMatterError, extract_front_matter, parse_front_matter};
pub use fs::FsContentStore;
#[cfg(feature = "mock")]
pub use mock::MockContentStore;
pub use store::{CategorySelector, ContentRef, ContentStore, SlugMatch, StoreError};
