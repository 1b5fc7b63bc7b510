//! Chapter model and front matter precedence.

use quire_content::FrontMatter;
use serde::Serialize;
use serde_json::Value;

use crate::routes::chapter_href;

/// Keys the pipeline always sets itself; front matter cannot override them.
const RESERVED_KEYS: &[&str] = &["category", "slug", "body", "index"];

/// A resolved documentation page.
///
/// Built fresh by every [`ChapterResolver`](crate::ChapterResolver) call and
/// immutable afterwards. Front matter fields other than `title` are exposed
/// through [`attributes`](Self::attributes) and flattened into the
/// serialized form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chapter {
    category: String,
    slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<u32>,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    #[serde(flatten)]
    attributes: FrontMatter,
    #[serde(skip)]
    file_name: String,
}

impl Chapter {
    /// Assemble a chapter from pipeline-controlled fields and front matter.
    ///
    /// Reserved keys in `front_matter` are dropped. `title` is taken from
    /// front matter when it is a non-empty scalar, otherwise the slug is used;
    /// it never remains among the attributes.
    pub(crate) fn assemble(
        category: String,
        slug: String,
        index: Option<u32>,
        file_name: String,
        body: Option<String>,
        front_matter: FrontMatter,
    ) -> Self {
        let mut attributes = front_matter;
        for key in RESERVED_KEYS {
            if attributes.remove(*key).is_some() {
                tracing::debug!(
                    key = *key,
                    category = %category,
                    file = %file_name,
                    "Ignoring pipeline-controlled front matter key"
                );
            }
        }

        let title = attributes
            .remove("title")
            .as_ref()
            .and_then(scalar_text)
            .unwrap_or_else(|| slug.clone());

        Self {
            category,
            slug,
            index,
            title,
            body,
            attributes,
            file_name,
        }
    }

    /// Category the chapter belongs to.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Slug, unique within the category.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Ordering key from the filename prefix.
    pub fn index(&self) -> Option<u32> {
        self.index
    }

    /// Page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rendered HTML; `None` for listing entries.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Remaining front matter fields.
    pub fn attributes(&self) -> &FrontMatter {
        &self.attributes
    }

    /// Single front matter field.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Source file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// URL path of the chapter page.
    pub fn href(&self) -> String {
        chapter_href(&self.category, &self.slug)
    }
}

/// Merge static header front matter with front matter found while rendering.
///
/// Render-time values win for keys present in both; keys found in only one
/// source are kept as-is.
///
/// # Examples
///
/// ```
/// use quire_chapters::merge_front_matter;
/// use quire_content::FrontMatter;
/// use serde_json::json;
///
/// let header = FrontMatter::from([
///     ("title".to_owned(), json!("From header")),
///     ("draft".to_owned(), json!(true)),
/// ]);
/// let rendered = FrontMatter::from([("title".to_owned(), json!("From renderer"))]);
///
/// let merged = merge_front_matter(header, rendered);
/// assert_eq!(merged["title"], "From renderer");
/// assert_eq!(merged["draft"], true);
/// ```
pub fn merge_front_matter(
    static_front_matter: FrontMatter,
    render_front_matter: FrontMatter,
) -> FrontMatter {
    let mut merged = static_front_matter;
    merged.extend(render_front_matter);
    merged
}

/// Text of a scalar value usable as a title.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
