//! Placeholder substitution and pluggable Markdown conversion for Quire.
//!
//! This crate provides:
//! - [`substitute`]: single-pass `%key%` token replacement over raw chapter text
//! - [`Converter`]: the capability the chapter pipeline renders through
//! - [`MarkdownRenderer`]: the pulldown-cmark backed [`Converter`]
//! - [`render_or_escape`]: degrade conversion failures to escaped source
//!
//! # Example
//!
//! ```
//! use quire_renderer::{Converter, MarkdownRenderer, Placeholders, substitute};
//!
//! let values: Placeholders = [("name", "World")].into_iter().collect();
//! let markdown = substitute("# Hello %name%", &values);
//!
//! let rendered = MarkdownRenderer::new().render(&markdown).unwrap();
//! assert_eq!(rendered.html, "<h1 id=\"hello-world\">Hello World</h1>\n");
//! ```

mod converter;
mod html;
mod markdown;
mod placeholders;

pub use converter::{Converter, RenderError, Rendered, render_or_escape};
pub use html::escape_html;
pub use markdown::MarkdownRenderer;
pub use placeholders::{Placeholders, substitute};
