//! Content store trait and error types.
//!
//! Provides the [`ContentStore`] trait for locating chapter files, along with
//! the selection rules shared by every backend.

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::filename::parse_filename;

/// Reference to a chapter file.
///
/// Contains only its location; no content is read at this stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentRef {
    /// Category (name of the directory holding the file).
    pub category: String,
    /// File name including the `.md` extension.
    pub file_name: String,
    /// Backend-specific location of the file.
    pub path: PathBuf,
}

/// Which categories to enumerate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategorySelector {
    /// A single named category.
    Literal(String),
    /// Every category in the content tree.
    All,
}

impl CategorySelector {
    /// Check whether a category name is selected.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::Literal(name) => name == category,
            Self::All => true,
        }
    }
}

impl FromStr for CategorySelector {
    type Err = Infallible;

    /// `*` selects all categories; anything else is a literal name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "*" => Self::All,
            name => Self::Literal(name.to_owned()),
        })
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(name) => f.write_str(name),
            Self::All => f.write_str("*"),
        }
    }
}

/// How a requested slug is matched against file names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlugMatch {
    /// Slug equals the parsed slug or the full file stem.
    #[default]
    Exact,
    /// Slug appears anywhere in the file name.
    Substring,
}

impl FromStr for SlugMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "substring" => Ok(Self::Substring),
            other => Err(format!(
                "unknown slug match mode '{other}' (expected 'exact' or 'substring')"
            )),
        }
    }
}

/// Content store error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No file matches the category and slug (or the category is missing).
    #[error("Chapter not found: {category}/{slug}")]
    NotFound {
        /// Requested category.
        category: String,
        /// Requested slug.
        slug: String,
    },
    /// More than one file matches the category and slug.
    #[error("Ambiguous chapter {category}/{slug}: matches {}", .candidates.join(", "))]
    Ambiguous {
        /// Requested category.
        category: String,
        /// Requested slug.
        slug: String,
        /// Matching file names.
        candidates: Vec<String>,
    },
    /// Content root does not exist.
    #[error("Content root not found: {}", .0.display())]
    RootMissing(PathBuf),
    /// I/O error while reading a file or directory.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(category: &str, slug: &str) -> Self {
        Self::NotFound {
            category: category.to_owned(),
            slug: slug.to_owned(),
        }
    }

    /// Create an I/O error with path context.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Chapter file lookup and retrieval.
///
/// Implementations are read-only views of a content tree and hold no
/// per-call state, so a single store can serve concurrent callers.
pub trait ContentStore: Send + Sync {
    /// Locate the single file for `slug` in `category`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the category or file is missing and
    /// [`StoreError::Ambiguous`] if more than one file matches.
    fn find(&self, category: &str, slug: &str) -> Result<ContentRef, StoreError>;

    /// List every chapter file in the selected categories.
    ///
    /// Entries are sorted by category, then file name. Missing categories
    /// yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if a directory cannot be read.
    fn list(&self, selector: &CategorySelector) -> Result<Vec<ContentRef>, StoreError>;

    /// Read the full text of a file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file doesn't exist or can't be read.
    fn read(&self, entry: &ContentRef) -> Result<String, StoreError>;
}

/// Check that a category name is a single plain path segment.
///
/// Names with separators, parent references, glob metacharacters or a
/// leading dot never match a category.
pub(crate) fn is_valid_category(category: &str) -> bool {
    !category.is_empty()
        && !category.starts_with('.')
        && !category.contains(['/', '\\', '*', '?', '[', ']', '{', '}'])
}

/// Check whether a file name is a visible chapter file.
pub(crate) fn is_chapter_file(file_name: &str) -> bool {
    !file_name.starts_with('.') && parse_filename(file_name).is_some()
}

/// Check whether a chapter file answers to `slug`.
pub(crate) fn slug_matches(file_name: &str, slug: &str, mode: SlugMatch) -> bool {
    if slug.is_empty() {
        return false;
    }
    match mode {
        SlugMatch::Exact => {
            let stem = file_name.strip_suffix(".md").unwrap_or(file_name);
            stem == slug || parse_filename(file_name).is_some_and(|parsed| parsed.slug == slug)
        }
        SlugMatch::Substring => file_name.contains(slug),
    }
}

/// Pick the single matching entry out of a category's files.
///
/// `entries` must be the chapter files of `category`, in any order.
pub(crate) fn select_match(
    category: &str,
    slug: &str,
    mode: SlugMatch,
    entries: Vec<ContentRef>,
) -> Result<ContentRef, StoreError> {
    let mut matches: Vec<ContentRef> = entries
        .into_iter()
        .filter(|entry| slug_matches(&entry.file_name, slug, mode))
        .collect();
    matches.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    match matches.len() {
        0 => Err(StoreError::not_found(category, slug)),
        1 => Ok(matches.remove(0)),
        _ => Err(StoreError::Ambiguous {
            category: category.to_owned(),
            slug: slug.to_owned(),
            candidates: matches.into_iter().map(|m| m.file_name).collect(),
        }),
    }
}
