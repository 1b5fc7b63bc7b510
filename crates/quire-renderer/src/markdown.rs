//! pulldown-cmark backed Markdown conversion.

use std::collections::HashSet;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use quire_content::parse_front_matter;

use crate::converter::{Converter, RenderError, Rendered};

/// Markdown to HTML converter built on pulldown-cmark.
///
/// A leading `---` fenced YAML block is captured as front matter instead of
/// being rendered. Headings get anchor ids derived from their text.
///
/// The renderer holds only configuration; a parser is created per call, so
/// one instance can be shared across threads.
#[derive(Clone, Debug)]
pub struct MarkdownRenderer {
    gfm: bool,
    heading_ids: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a new renderer with GFM and heading ids enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gfm: true,
            heading_ids: true,
        }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    /// - Footnotes
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Enable or disable generated heading ids.
    #[must_use]
    pub fn with_heading_ids(mut self, enabled: bool) -> Self {
        self.heading_ids = enabled;
        self
    }

    /// Get parser options based on configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        let mut options = Options::ENABLE_YAML_STYLE_METADATA_BLOCKS;
        if self.gfm {
            options |= Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_GFM;
        }
        options
    }
}

impl Converter for MarkdownRenderer {
    fn render(&self, markdown: &str) -> Result<Rendered, RenderError> {
        let mut events = Vec::new();
        let mut metadata = String::new();
        let mut in_metadata = false;

        for event in Parser::new_ext(markdown, self.parser_options()) {
            match event {
                Event::Start(Tag::MetadataBlock(_)) => in_metadata = true,
                Event::End(TagEnd::MetadataBlock(_)) => in_metadata = false,
                Event::Text(text) if in_metadata => metadata.push_str(&text),
                other => events.push(other),
            }
        }

        let front_matter =
            parse_front_matter(&metadata).map_err(|e| RenderError::FrontMatter(e.to_string()))?;

        if self.heading_ids {
            assign_heading_ids(&mut events);
        }

        let mut output = String::with_capacity(markdown.len() + markdown.len() / 2);
        html::push_html(&mut output, events.into_iter());

        Ok(Rendered {
            html: output,
            front_matter,
            warnings: Vec::new(),
        })
    }
}

/// Give every heading without an explicit id a unique slug id.
fn assign_heading_ids(events: &mut [Event<'_>]) {
    let mut seen: HashSet<String> = HashSet::new();
    let mut i = 0;

    while i < events.len() {
        if matches!(&events[i], Event::Start(Tag::Heading { id: None, .. })) {
            let mut text = String::new();
            let mut end = i + 1;
            while end < events.len() {
                match &events[end] {
                    Event::End(TagEnd::Heading(_)) => break,
                    Event::Text(t) | Event::Code(t) => text.push_str(t),
                    _ => {}
                }
                end += 1;
            }

            let id = unique_id(&slugify(&text), &mut seen);
            if let Event::Start(Tag::Heading { id: slot, .. }) = &mut events[i] {
                *slot = Some(CowStr::from(id));
            }
            i = end;
        }
        i += 1;
    }
}

/// Convert heading text to an anchor slug.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "section".to_owned()
    } else {
        slug
    }
}

/// Suffix `-1`, `-2`, ... onto `base` until the id is unused.
fn unique_id(base: &str, seen: &mut HashSet<String>) -> String {
    let mut id = base.to_owned();
    let mut n = 0;
    while seen.contains(&id) {
        n += 1;
        id = format!("{base}-{n}");
    }
    seen.insert(id.clone());
    id
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn render(markdown: &str) -> Rendered {
        MarkdownRenderer::new().render(markdown).unwrap()
    }

    #[test]
    fn test_render_heading_with_id() {
        let rendered = render("# Hello World");
        assert_eq!(rendered.html, "<h1 id=\"hello-world\">Hello World</h1>\n");
        assert!(rendered.front_matter.is_empty());
    }

    #[test]
    fn test_render_paragraph() {
        let rendered = render("Some **bold** text");
        assert_eq!(rendered.html, "<p>Some <strong>bold</strong> text</p>\n");
    }

    #[test]
    fn test_render_captures_front_matter() {
        let rendered = render("---\ntitle: Getting Started\nweight: 2\n---\n# Hello World\n");

        assert_eq!(
            rendered.front_matter.get("title"),
            Some(&json!("Getting Started"))
        );
        assert_eq!(rendered.front_matter.get("weight"), Some(&json!(2)));
        assert_eq!(rendered.html, "<h1 id=\"hello-world\">Hello World</h1>\n");
    }

    #[test]
    fn test_render_invalid_front_matter() {
        let result = MarkdownRenderer::new().render("---\ntitle: [broken\n---\n# Body\n");
        assert!(matches!(result, Err(RenderError::FrontMatter(_))));
    }

    #[test]
    fn test_render_duplicate_heading_ids() {
        let rendered = render("## Usage\n\n## Usage\n\n## Usage");
        assert_eq!(
            rendered.html,
            "<h2 id=\"usage\">Usage</h2>\n<h2 id=\"usage-1\">Usage</h2>\n<h2 id=\"usage-2\">Usage</h2>\n"
        );
    }

    #[test]
    fn test_render_heading_ids_avoid_generated_suffixes() {
        let rendered = render("## Usage\n\n## Usage\n\n## Usage 1");
        assert_eq!(
            rendered.html,
            "<h2 id=\"usage\">Usage</h2>\n<h2 id=\"usage-1\">Usage</h2>\n<h2 id=\"usage-1-1\">Usage 1</h2>\n"
        );
    }

    #[test]
    fn test_render_heading_with_code() {
        let rendered = render("## The `find` method");
        assert_eq!(
            rendered.html,
            "<h2 id=\"the-find-method\">The <code>find</code> method</h2>\n"
        );
    }

    #[test]
    fn test_render_without_heading_ids() {
        let rendered = MarkdownRenderer::new()
            .with_heading_ids(false)
            .render("# Plain")
            .unwrap();
        assert_eq!(rendered.html, "<h1>Plain</h1>\n");
    }

    #[test]
    fn test_render_gfm_table() {
        let rendered = render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(rendered.html.contains("<table>"));
    }

    #[test]
    fn test_render_without_gfm() {
        let rendered = MarkdownRenderer::new()
            .with_gfm(false)
            .render("~~gone~~")
            .unwrap();
        assert!(!rendered.html.contains("<del>"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Trim -- me  "), "trim-me");
        assert_eq!(slugify("snake_case_name"), "snake-case-name");
        assert_eq!(slugify("What's new?"), "whats-new");
        assert_eq!(slugify("!!!"), "section");
    }
}
