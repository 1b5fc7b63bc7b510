//! Markdown conversion capability.

use quire_content::FrontMatter;

use crate::html::escape_html;

/// Result of converting a Markdown document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rendered {
    /// Rendered HTML.
    pub html: String,
    /// Front matter discovered by the conversion engine (possibly empty).
    pub front_matter: FrontMatter,
    /// Non-fatal problems encountered during conversion.
    pub warnings: Vec<String>,
}

/// Conversion error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Front matter found during conversion is malformed.
    #[error("Invalid front matter: {0}")]
    FrontMatter(String),
    /// The engine could not convert the document.
    #[error("Markdown conversion failed: {0}")]
    Conversion(String),
}

/// Converts Markdown text into HTML.
///
/// Implementations must be stateless across calls. The chapter pipeline
/// only depends on this trait, so a test double returning fixed output can
/// stand in for the real engine.
pub trait Converter: Send + Sync {
    /// Convert `markdown` to HTML, exposing any front matter the engine finds.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::FrontMatter`] for malformed embedded front
    /// matter and [`RenderError::Conversion`] if conversion fails.
    fn render(&self, markdown: &str) -> Result<Rendered, RenderError>;
}

/// Convert `markdown`, degrading conversion failures to escaped source.
///
/// A [`RenderError::Conversion`] yields the raw text HTML-escaped inside a
/// `<pre>` block, with the failure recorded in `warnings`. Front matter
/// errors are passed through.
///
/// # Errors
///
/// Returns [`RenderError::FrontMatter`] if the embedded front matter is malformed.
pub fn render_or_escape(
    converter: &dyn Converter,
    markdown: &str,
) -> Result<Rendered, RenderError> {
    match converter.render(markdown) {
        Err(RenderError::Conversion(message)) => {
            tracing::warn!(error = %message, "Markdown conversion failed, emitting escaped source");
            Ok(Rendered {
                html: format!("<pre>{}</pre>\n", escape_html(markdown)),
                front_matter: FrontMatter::new(),
                warnings: vec![message],
            })
        }
        other => other,
    }
}
