//! Chapter filename convention.
//!
//! Chapter files are named `[<digits>-]<slug>.md`. The optional numeric
//! prefix orders chapters within a category and is never part of the slug.

use std::sync::LazyLock;

use regex::Regex;

static FILENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?<index>\d+)-)?(?<slug>.*)\.md$").expect("filename regex is valid")
});

/// Index and slug recovered from a chapter filename.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedName {
    /// Ordering key from the numeric prefix, if any.
    pub index: Option<u32>,
    /// Slug with the prefix and extension removed.
    pub slug: String,
}

/// Parse a chapter filename into its index and slug.
///
/// Returns `None` if the name has no `.md` extension or the slug would be
/// empty (e.g. `01-.md`). A prefix too large for `u32` is not treated as an
/// index and stays part of the slug.
///
/// # Examples
///
/// ```
/// use quire_content::parse_filename;
///
/// let parsed = parse_filename("01-getting-started.md").unwrap();
/// assert_eq!(parsed.index, Some(1));
/// assert_eq!(parsed.slug, "getting-started");
///
/// let parsed = parse_filename("overview.md").unwrap();
/// assert_eq!(parsed.index, None);
/// assert_eq!(parsed.slug, "overview");
/// ```
pub fn parse_filename(name: &str) -> Option<ParsedName> {
    let caps = FILENAME_RE.captures(name)?;
    let slug = caps.name("slug").map_or("", |m| m.as_str());

    let parsed = match caps.name("index") {
        Some(digits) => match digits.as_str().parse::<u32>() {
            Ok(index) => ParsedName {
                index: Some(index),
                slug: slug.to_owned(),
            },
            Err(_) => ParsedName {
                index: None,
                slug: name.strip_suffix(".md").unwrap_or(name).to_owned(),
            },
        },
        None => ParsedName {
            index: None,
            slug: slug.to_owned(),
        },
    };

    if parsed.slug.is_empty() {
        return None;
    }
    Some(parsed)
}
