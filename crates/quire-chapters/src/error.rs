//! Chapter resolution errors.

use quire_content::StoreError;

/// Chapter resolution error.
///
/// A missing category and a missing slug are the same [`NotFound`](Self::NotFound)
/// outcome.
#[derive(Debug, thiserror::Error)]
pub enum ChapterError {
    /// No chapter matches the category and slug.
    #[error("Chapter not found: {category}/{slug}")]
    NotFound {
        /// Requested category.
        category: String,
        /// Requested slug.
        slug: String,
    },
    /// More than one chapter file matches the category and slug.
    #[error("Ambiguous chapter {category}/{slug}: matches {}", .candidates.join(", "))]
    Ambiguous {
        /// Requested category.
        category: String,
        /// Requested slug.
        slug: String,
        /// Matching file names.
        candidates: Vec<String>,
    },
    /// Chapter file is malformed (front matter or file name).
    #[error("Failed to parse {category}/{file_name}: {message}")]
    Parse {
        /// Category of the file.
        category: String,
        /// File name.
        file_name: String,
        /// What went wrong.
        message: String,
    },
    /// Content store failure (I/O, missing root).
    #[error(transparent)]
    Store(StoreError),
}

impl ChapterError {
    /// Create a parse error for a chapter file.
    #[must_use]
    pub fn parse(category: &str, file_name: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            category: category.to_owned(),
            file_name: file_name.to_owned(),
            message: message.into(),
        }
    }

    /// Check if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<StoreError> for ChapterError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { category, slug } => Self::NotFound { category, slug },
            StoreError::Ambiguous {
                category,
                slug,
                candidates,
            } => Self::Ambiguous {
                category,
                slug,
                candidates,
            },
            other => Self::Store(other),
        }
    }
}
