//! URL conventions for chapter pages.
//!
//! Chapters are served at `/docs/{category}/{slug}`.

use quire_content::parse_filename;

/// Path prefix under which chapters are served.
pub const DOCS_PREFIX: &str = "/docs";

/// Category and slug extracted from a chapter URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterRoute {
    /// Category segment.
    pub category: String,
    /// Slug segment.
    pub slug: String,
}

impl ChapterRoute {
    /// URL path of this route.
    #[must_use]
    pub fn href(&self) -> String {
        chapter_href(&self.category, &self.slug)
    }
}

/// Build the URL path of a chapter.
#[must_use]
pub fn chapter_href(category: &str, slug: &str) -> String {
    format!("{DOCS_PREFIX}/{category}/{slug}")
}

/// Parse a `/docs/{category}/{slug}` URL path.
///
/// Query strings, fragments and a trailing slash are ignored. Returns `None`
/// for any other shape.
///
/// # Examples
///
/// ```
/// use quire_chapters::parse_docs_path;
///
/// let route = parse_docs_path("/docs/framework/getting-started").unwrap();
/// assert_eq!(route.category, "framework");
/// assert_eq!(route.slug, "getting-started");
///
/// assert!(parse_docs_path("/blog/post").is_none());
/// ```
#[must_use]
pub fn parse_docs_path(path: &str) -> Option<ChapterRoute> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let rest = path.strip_prefix(DOCS_PREFIX)?.strip_prefix('/')?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);

    let (category, slug) = rest.split_once('/')?;
    if category.is_empty() || slug.is_empty() || slug.contains('/') {
        return None;
    }

    Some(ChapterRoute {
        category: category.to_owned(),
        slug: slug.to_owned(),
    })
}

/// Canonical form of a route whose slug still carries an index prefix.
///
/// `/docs/framework/01-getting-started` canonicalizes to
/// `/docs/framework/getting-started`, so callers can redirect. Returns `None`
/// when the route is already canonical.
#[must_use]
pub fn canonical_route(route: &ChapterRoute) -> Option<ChapterRoute> {
    let parsed = parse_filename(&format!("{}.md", route.slug))?;
    parsed.index?;
    Some(ChapterRoute {
        category: route.category.clone(),
        slug: parsed.slug,
    })
}
