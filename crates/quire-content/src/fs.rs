//! Filesystem content store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::store::{
    CategorySelector, ContentRef, ContentStore, SlugMatch, StoreError, is_chapter_file,
    is_valid_category, select_match,
};

/// Filesystem content store.
///
/// Each directory directly under the content root is a category, and each
/// visible `.md` file inside it is a chapter. Subdirectories of a category
/// are not descended into. Symlinked categories and chapters are followed.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use quire_content::{ContentStore, FsContentStore, SlugMatch};
///
/// let store = FsContentStore::open(PathBuf::from("docs"), SlugMatch::Exact)?;
/// let entry = store.find("framework", "getting-started")?;
/// let text = store.read(&entry)?;
/// ```
#[derive(Debug)]
pub struct FsContentStore {
    /// Content root directory.
    root: PathBuf,
    /// Slug matching mode for lookups.
    slug_match: SlugMatch,
}

impl FsContentStore {
    /// Open a content store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RootMissing`] if `root` is not a directory.
    pub fn open(root: PathBuf, slug_match: SlugMatch) -> Result<Self, StoreError> {
        if !root.is_dir() {
            return Err(StoreError::RootMissing(root));
        }
        Ok(Self { root, slug_match })
    }

    /// Content root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Collect the chapter files of one category directory.
    ///
    /// Returns an empty Vec if the directory doesn't exist.
    fn scan_category(&self, category: &str) -> Result<Vec<ContentRef>, StoreError> {
        let dir = self.root.join(category);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir).map_err(|e| StoreError::io(e, &dir))?;
        let mut refs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(e, &dir))?;
            // Follows symlinks; dangling links are skipped.
            if !fs::metadata(entry.path()).is_ok_and(|m| m.is_file()) {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if !is_chapter_file(&file_name) {
                continue;
            }
            refs.push(ContentRef {
                category: category.to_owned(),
                file_name,
                path: entry.path(),
            });
        }

        refs.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(refs)
    }

    /// Names of all category directories, sorted.
    fn categories(&self) -> Result<Vec<String>, StoreError> {
        let entries = fs::read_dir(&self.root).map_err(|e| StoreError::io(e, &self.root))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(e, &self.root))?;
            if !fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_valid_category(&name) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}

impl ContentStore for FsContentStore {
    fn find(&self, category: &str, slug: &str) -> Result<ContentRef, StoreError> {
        if !is_valid_category(category) {
            tracing::debug!(category, "Rejected invalid category name");
            return Err(StoreError::not_found(category, slug));
        }
        let entries = self.scan_category(category)?;
        select_match(category, slug, self.slug_match, entries)
    }

    fn list(&self, selector: &CategorySelector) -> Result<Vec<ContentRef>, StoreError> {
        let categories = match selector {
            CategorySelector::Literal(name) if is_valid_category(name) => vec![name.clone()],
            CategorySelector::Literal(name) => {
                tracing::debug!(category = %name, "Rejected invalid category name");
                Vec::new()
            }
            CategorySelector::All => self.categories()?,
        };

        let mut refs = Vec::new();
        for category in &categories {
            refs.extend(self.scan_category(category)?);
        }
        tracing::debug!(selector = %selector, count = refs.len(), "Listed chapter files");
        Ok(refs)
    }

    fn read(&self, entry: &ContentRef) -> Result<String, StoreError> {
        fs::read_to_string(&entry.path).map_err(|e| StoreError::io(e, &entry.path))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_tree() -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        let framework = temp_dir.path().join("framework");
        fs::create_dir(&framework).unwrap();
        fs::write(framework.join("01-getting-started.md"), "# Start").unwrap();
        fs::write(framework.join("02-routing.md"), "# Routing").unwrap();
        fs::write(framework.join("changelog.md"), "# Changes").unwrap();
        fs::write(framework.join(".draft.md"), "# Draft").unwrap();
        fs::write(framework.join("logo.png"), "png").unwrap();

        let console = temp_dir.path().join("console");
        fs::create_dir(&console).unwrap();
        fs::write(console.join("01-getting-started.md"), "# Console").unwrap();

        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        fs::write(temp_dir.path().join("README.md"), "# Root file").unwrap();
        temp_dir
    }

    fn open(temp_dir: &tempfile::TempDir, mode: SlugMatch) -> FsContentStore {
        FsContentStore::open(temp_dir.path().to_path_buf(), mode).unwrap()
    }

    fn names(refs: &[ContentRef]) -> Vec<String> {
        refs.iter()
            .map(|r| format!("{}/{}", r.category, r.file_name))
            .collect()
    }

    #[test]
    fn test_open_missing_root() {
        let result = FsContentStore::open(PathBuf::from("/nonexistent/docs"), SlugMatch::Exact);
        assert!(matches!(result, Err(StoreError::RootMissing(_))));
    }

    #[test]
    fn test_find_by_slug() {
        let temp_dir = create_tree();
        let store = open(&temp_dir, SlugMatch::Exact);

        let entry = store.find("framework", "getting-started").unwrap();
        assert_eq!(entry.category, "framework");
        assert_eq!(entry.file_name, "01-getting-started.md");
        assert!(entry.path.ends_with("framework/01-getting-started.md"));
    }

    #[test]
    fn test_find_by_prefixed_stem() {
        let temp_dir = create_tree();
        let store = open(&temp_dir, SlugMatch::Exact);

        let entry = store.find("framework", "01-getting-started").unwrap();
        assert_eq!(entry.file_name, "01-getting-started.md");
    }

    #[test]
    fn test_find_missing_slug() {
        let temp_dir = create_tree();
        let store = open(&temp_dir, SlugMatch::Exact);

        let err = store.find("framework", "missing").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_find_missing_category() {
        let temp_dir = create_tree();
        let store = open(&temp_dir, SlugMatch::Exact);

        let err = store.find("nope", "getting-started").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_find_rejects_traversal() {
        let temp_dir = create_tree();
        let store = open(&temp_dir, SlugMatch::Substring);

        let err = store.find("..", "README").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        let err = store.find("*", "getting-started").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_find_ignores_hidden_files() {
        let temp_dir = create_tree();
        let store = open(&temp_dir, SlugMatch::Exact);

        let err = store.find("framework", "draft").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_find_substring_mode() {
        let temp_dir = create_tree();
        let store = open(&temp_dir, SlugMatch::Substring);

        let entry = store.find("framework", "rout").unwrap();
        assert_eq!(entry.file_name, "02-routing.md");
    }

    #[test]
    fn test_find_ambiguous() {
        let temp_dir = create_tree();
        fs::write(
            temp_dir.path().join("framework").join("03-routing.md"),
            "# Routing again",
        )
        .unwrap();
        let store = open(&temp_dir, SlugMatch::Exact);

        let err = store.find("framework", "routing").unwrap_err();
        match err {
            StoreError::Ambiguous { candidates, .. } => {
                assert_eq!(candidates, vec!["02-routing.md", "03-routing.md"]);
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }

    #[test]
    fn test_list_category() {
        let temp_dir = create_tree();
        let store = open(&temp_dir, SlugMatch::Exact);

        let refs = store
            .list(&CategorySelector::Literal("framework".to_owned()))
            .unwrap();
        assert_eq!(
            names(&refs),
            vec![
                "framework/01-getting-started.md",
                "framework/02-routing.md",
                "framework/changelog.md",
            ]
        );
    }

    #[test]
    fn test_list_all_categories() {
        let temp_dir = create_tree();
        let store = open(&temp_dir, SlugMatch::Exact);

        let refs = store.list(&CategorySelector::All).unwrap();
        assert_eq!(
            names(&refs),
            vec![
                "console/01-getting-started.md",
                "framework/01-getting-started.md",
                "framework/02-routing.md",
                "framework/changelog.md",
            ]
        );
    }

    #[test]
    fn test_list_missing_category_is_empty() {
        let temp_dir = create_tree();
        let store = open(&temp_dir, SlugMatch::Exact);

        let refs = store
            .list(&CategorySelector::Literal("missing".to_owned()))
            .unwrap();
        assert!(refs.is_empty());
    }

    #[test]
    fn test_list_is_restartable() {
        let temp_dir = create_tree();
        let store = open(&temp_dir, SlugMatch::Exact);

        let first = store.list(&CategorySelector::All).unwrap();
        let second = store.list(&CategorySelector::All).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_read_content() {
        let temp_dir = create_tree();
        let store = open(&temp_dir, SlugMatch::Exact);

        let entry = store.find("framework", "routing").unwrap();
        assert_eq!(store.read(&entry).unwrap(), "# Routing");
    }

    #[test]
    fn test_read_removed_file() {
        let temp_dir = create_tree();
        let store = open(&temp_dir, SlugMatch::Exact);

        let entry = store.find("framework", "routing").unwrap();
        fs::remove_file(&entry.path).unwrap();
        let err = store.read(&entry).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_chapter_is_listed_and_found() {
        let temp_dir = create_tree();
        let framework = temp_dir.path().join("framework");
        let shared = temp_dir.path().join("shared-install.md");
        fs::write(&shared, "# Install").unwrap();
        std::os::unix::fs::symlink(&shared, framework.join("03-install.md")).unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("gone.md"),
            framework.join("04-dangling.md"),
        )
        .unwrap();
        let store = open(&temp_dir, SlugMatch::Exact);

        let refs = store
            .list(&CategorySelector::Literal("framework".to_owned()))
            .unwrap();
        assert_eq!(
            names(&refs),
            vec![
                "framework/01-getting-started.md",
                "framework/02-routing.md",
                "framework/03-install.md",
                "framework/changelog.md",
            ]
        );

        let entry = store.find("framework", "install").unwrap();
        assert_eq!(store.read(&entry).unwrap(), "# Install");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_category_is_listed_and_found() {
        let temp_dir = create_tree();
        let outside = tempfile::tempdir().unwrap();
        fs::write(outside.path().join("01-overview.md"), "# Overview").unwrap();
        std::os::unix::fs::symlink(outside.path(), temp_dir.path().join("cli")).unwrap();
        let store = open(&temp_dir, SlugMatch::Exact);

        let refs = store.list(&CategorySelector::All).unwrap();
        assert_eq!(
            names(&refs),
            vec![
                "cli/01-overview.md",
                "console/01-getting-started.md",
                "framework/01-getting-started.md",
                "framework/02-routing.md",
                "framework/changelog.md",
            ]
        );

        let entry = store.find("cli", "overview").unwrap();
        assert_eq!(store.read(&entry).unwrap(), "# Overview");
    }
}
