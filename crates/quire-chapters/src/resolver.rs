//! Chapter resolution.
//!
//! [`ChapterResolver`] turns content store entries into [`Chapter`] values:
//! a single fully rendered chapter for a page view, or lightweight listing
//! entries (no body) for menus and static generation.

use std::cmp::Ordering;
use std::sync::Arc;

use quire_content::{
    CategorySelector, ContentRef, ContentStore, extract_front_matter, parse_filename,
};
use quire_renderer::{Converter, Placeholders, render_or_escape, substitute};
use serde::Serialize;

use crate::chapter::{Chapter, merge_front_matter};
use crate::error::ChapterError;

/// Chapter files found while listing that could not be turned into chapters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedChapter {
    /// Category of the file.
    pub category: String,
    /// File name.
    pub file_name: String,
    /// Why the file was skipped.
    pub reason: String,
}

/// Result of [`ChapterResolver::all`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Listing {
    /// Chapters in display order.
    pub chapters: Vec<Chapter>,
    /// Files skipped because they could not be read or parsed.
    pub skipped: Vec<SkippedChapter>,
}

impl Listing {
    /// Number of listed chapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Check if no chapters were listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Discard skip reports and keep the chapters.
    #[must_use]
    pub fn into_chapters(self) -> Vec<Chapter> {
        self.chapters
    }
}

/// Resolves chapters from a content store.
///
/// Holds no per-call state: every call reads the store afresh and returns
/// new values, so one resolver can be shared behind an `Arc` by concurrent
/// requests.
///
/// # Example
///
/// ```ignore
/// let resolver = ChapterResolver::new(store, Arc::new(MarkdownRenderer::new()))
///     .with_placeholders(config.placeholders);
///
/// let chapter = resolver.find("framework", "getting-started", &Placeholders::new())?;
/// ```
pub struct ChapterResolver {
    store: Arc<dyn ContentStore>,
    converter: Arc<dyn Converter>,
    defaults: Placeholders,
}

impl ChapterResolver {
    /// Create a resolver with no default placeholder values.
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>, converter: Arc<dyn Converter>) -> Self {
        Self {
            store,
            converter,
            defaults: Placeholders::new(),
        }
    }

    /// Set placeholder values applied to every chapter.
    ///
    /// Values passed to [`find`](Self::find) take precedence over these.
    #[must_use]
    pub fn with_placeholders(mut self, defaults: Placeholders) -> Self {
        self.defaults = defaults;
        self
    }

    /// Default placeholder values.
    pub fn placeholders(&self) -> &Placeholders {
        &self.defaults
    }

    /// Resolve and render a single chapter.
    ///
    /// Placeholders are substituted into the raw text before anything else,
    /// so they may appear in front matter as well as the body. Front matter
    /// reported by the converter wins over the file header.
    ///
    /// # Errors
    ///
    /// Returns [`ChapterError::NotFound`] or [`ChapterError::Ambiguous`] if
    /// the lookup does not yield exactly one file, [`ChapterError::Parse`] if
    /// its front matter is malformed, and [`ChapterError::Store`] if it
    /// cannot be read.
    pub fn find(
        &self,
        category: &str,
        slug: &str,
        substitutions: &Placeholders,
    ) -> Result<Chapter, ChapterError> {
        let entry = self.store.find(category, slug)?;
        self.render_entry(&entry, substitutions)
    }

    /// Chapter files of the selected categories, as listed by the store.
    ///
    /// # Errors
    ///
    /// Returns [`ChapterError::Store`] if the content tree cannot be listed.
    pub fn entries(&self, selector: &CategorySelector) -> Result<Vec<ContentRef>, ChapterError> {
        Ok(self.store.list(selector)?)
    }

    /// Render a chapter file that has already been located.
    ///
    /// Only the text after the file header is handed to the converter.
    ///
    /// # Errors
    ///
    /// Returns [`ChapterError::Parse`] if the front matter or file name is
    /// malformed and [`ChapterError::Store`] if the file cannot be read.
    pub fn render_entry(
        &self,
        entry: &ContentRef,
        substitutions: &Placeholders,
    ) -> Result<Chapter, ChapterError> {
        let raw = self.store.read(entry)?;
        let parse_error =
            |message: String| ChapterError::parse(&entry.category, &entry.file_name, message);

        let values = self.defaults.overlaid_with(substitutions);
        let text = substitute(&raw, &values);

        let (header, body) =
            extract_front_matter(&text).map_err(|e| parse_error(e.to_string()))?;
        let source = body.strip_prefix('\u{feff}').unwrap_or(body);
        let rendered = render_or_escape(self.converter.as_ref(), source)
            .map_err(|e| parse_error(e.to_string()))?;
        let name = parse_filename(&entry.file_name)
            .ok_or_else(|| parse_error("Invalid chapter file name".to_owned()))?;

        tracing::debug!(
            category = %entry.category,
            file = %entry.file_name,
            warnings = rendered.warnings.len(),
            "Rendered chapter"
        );

        let front_matter = merge_front_matter(header, rendered.front_matter);
        Ok(Chapter::assemble(
            entry.category.clone(),
            name.slug,
            name.index,
            entry.file_name.clone(),
            Some(rendered.html),
            front_matter,
        ))
    }

    /// List chapters of the selected categories without rendering them.
    ///
    /// Only the file header is parsed; the converter is never invoked.
    /// Default placeholders are applied so titles match [`find`](Self::find).
    /// Files that cannot be read or parsed are left out and reported in
    /// [`Listing::skipped`].
    ///
    /// Chapters are ordered by index (unindexed last), then file name, then
    /// category.
    ///
    /// # Errors
    ///
    /// Returns [`ChapterError::Store`] if the content tree cannot be listed.
    pub fn all(&self, selector: &CategorySelector) -> Result<Listing, ChapterError> {
        let entries = self.store.list(selector)?;
        let mut listing = Listing::default();

        for entry in entries {
            match self.summarize(&entry) {
                Ok(chapter) => listing.chapters.push(chapter),
                Err(reason) => {
                    tracing::warn!(
                        category = %entry.category,
                        file = %entry.file_name,
                        reason = %reason,
                        "Skipping chapter"
                    );
                    listing.skipped.push(SkippedChapter {
                        category: entry.category,
                        file_name: entry.file_name,
                        reason,
                    });
                }
            }
        }

        listing.chapters.sort_by(display_order);
        tracing::debug!(
            selector = %selector,
            chapters = listing.chapters.len(),
            skipped = listing.skipped.len(),
            "Listed chapters"
        );
        Ok(listing)
    }

    /// Build a body-less listing entry.
    fn summarize(&self, entry: &ContentRef) -> Result<Chapter, String> {
        let raw = self.store.read(entry).map_err(|e| e.to_string())?;
        let name =
            parse_filename(&entry.file_name).ok_or_else(|| "Invalid chapter file name".to_owned())?;
        let text = substitute(&raw, &self.defaults);
        let (header, _) = extract_front_matter(&text).map_err(|e| e.to_string())?;

        Ok(Chapter::assemble(
            entry.category.clone(),
            name.slug,
            name.index,
            entry.file_name.clone(),
            None,
            header,
        ))
    }
}

/// Index ascending with unindexed chapters last, then file name, then category.
fn display_order(a: &Chapter, b: &Chapter) -> Ordering {
    (a.index().is_none(), a.index(), a.file_name(), a.category()).cmp(&(
        b.index().is_none(),
        b.index(),
        b.file_name(),
        b.category(),
    ))
}

#[cfg(test)]
static_assertions::assert_impl_all!(ChapterResolver: Send, Sync);
