//! Mock content store for testing.
//!
//! Provides [`MockContentStore`] for unit testing without filesystem access.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::store::{
    CategorySelector, ContentRef, ContentStore, SlugMatch, StoreError, is_chapter_file,
    is_valid_category, select_match,
};

/// Mock content store for testing.
///
/// Stores chapter files in memory, keyed by category and file name. Uses the
/// same selection rules as the filesystem store.
///
/// # Example
///
/// ```ignore
/// use quire_content::{ContentStore, MockContentStore};
///
/// let store = MockContentStore::new()
///     .with_file("framework", "01-getting-started.md", "# Hello");
///
/// let entry = store.find("framework", "getting-started")?;
/// assert_eq!(store.read(&entry)?, "# Hello");
/// ```
#[derive(Debug, Default)]
pub struct MockContentStore {
    files: BTreeMap<(String, String), String>,
    slug_match: SlugMatch,
}

impl MockContentStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a chapter file.
    #[must_use]
    pub fn with_file(
        mut self,
        category: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.files
            .insert((category.into(), file_name.into()), content.into());
        self
    }

    /// Set the slug matching mode.
    #[must_use]
    pub fn with_slug_match(mut self, slug_match: SlugMatch) -> Self {
        self.slug_match = slug_match;
        self
    }

    fn refs(&self, selector: &CategorySelector) -> Vec<ContentRef> {
        self.files
            .keys()
            .filter(|(category, file_name)| {
                is_valid_category(category)
                    && selector.matches(category)
                    && is_chapter_file(file_name)
            })
            .map(|(category, file_name)| ContentRef {
                category: category.clone(),
                file_name: file_name.clone(),
                path: PathBuf::from(category).join(file_name),
            })
            .collect()
    }
}

impl ContentStore for MockContentStore {
    fn find(&self, category: &str, slug: &str) -> Result<ContentRef, StoreError> {
        let entries = self.refs(&CategorySelector::Literal(category.to_owned()));
        select_match(category, slug, self.slug_match, entries)
    }

    fn list(&self, selector: &CategorySelector) -> Result<Vec<ContentRef>, StoreError> {
        Ok(self.refs(selector))
    }

    fn read(&self, entry: &ContentRef) -> Result<String, StoreError> {
        self.files
            .get(&(entry.category.clone(), entry.file_name.clone()))
            .cloned()
            .ok_or_else(|| {
                StoreError::io(
                    std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                    &entry.path,
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_find_and_read() {
        let store = MockContentStore::new().with_file("docs", "01-intro.md", "# Intro");

        let entry = store.find("docs", "intro").unwrap();
        assert_eq!(entry.file_name, "01-intro.md");
        assert_eq!(store.read(&entry).unwrap(), "# Intro");
    }

    #[test]
    fn test_mock_list_sorted() {
        let store = MockContentStore::new()
            .with_file("b", "x.md", "")
            .with_file("a", "z.md", "")
            .with_file("a", "y.md", "")
            .with_file("a", "notes.txt", "");

        let refs = store.list(&CategorySelector::All).unwrap();
        let names: Vec<_> = refs.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["y.md", "z.md", "x.md"]);
    }

    #[test]
    fn test_mock_read_unknown() {
        let store = MockContentStore::new();
        let entry = ContentRef {
            category: "docs".to_owned(),
            file_name: "gone.md".to_owned(),
            path: PathBuf::from("docs/gone.md"),
        };
        assert!(store.read(&entry).is_err());
    }
}
