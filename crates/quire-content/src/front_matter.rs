//! YAML front matter extraction.
//!
//! A chapter may start with a YAML header fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Getting Started
//! description: First steps
//! ---
//! # Hello
//! ```
//!
//! The header is parsed into a [`FrontMatter`] mapping and the remainder is
//! returned untouched. Documents without a header pass through unchanged.

use std::collections::BTreeMap;

/// Front matter fields keyed by name.
///
/// Ordered so that chapters built from the same file compare equal and
/// serialize identically.
pub type FrontMatter = BTreeMap<String, serde_json::Value>;

/// Opening and closing fence.
const FENCE: &str = "---";
/// Alternative YAML document-end marker accepted as a closing fence.
const END_MARKER: &str = "...";

/// Error type for front matter parsing.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// Header is not valid YAML, or not a mapping.
    #[error("{0}")]
    Parse(String),
}

/// Split a document into its front matter and remainder.
///
/// When the document has no fenced header, or the opening fence is never
/// closed, the front matter is empty and the remainder is `raw` unchanged.
///
/// # Errors
///
/// Returns [`FrontMatterError::Parse`] if the header is malformed YAML or is
/// not a mapping.
///
/// # Examples
///
/// ```
/// use quire_content::extract_front_matter;
///
/// let (front_matter, body) = extract_front_matter("---\ntitle: Intro\n---\n# Intro\n").unwrap();
/// assert_eq!(front_matter["title"], "Intro");
/// assert_eq!(body, "# Intro\n");
/// ```
pub fn extract_front_matter(raw: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    match split_header(raw) {
        Some((header, remainder)) => Ok((parse_front_matter(header)?, remainder)),
        None => Ok((FrontMatter::new(), raw)),
    }
}

/// Parse a YAML header (without fences) into a [`FrontMatter`] mapping.
///
/// Empty, comment-only or null headers yield an empty mapping.
///
/// # Errors
///
/// Returns [`FrontMatterError::Parse`] if the YAML is malformed or its root
/// is not a mapping.
pub fn parse_front_matter(yaml: &str) -> Result<FrontMatter, FrontMatterError> {
    let blank = yaml
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'));
    if blank {
        return Ok(FrontMatter::new());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(yaml)
        .map_err(|e| FrontMatterError::Parse(format!("Invalid YAML: {e}")))?;

    match value {
        serde_yaml::Value::Null => Ok(FrontMatter::new()),
        serde_yaml::Value::Mapping(_) => serde_yaml::from_value(value)
            .map_err(|e| FrontMatterError::Parse(format!("Invalid front matter: {e}"))),
        other => Err(FrontMatterError::Parse(format!(
            "Front matter must be a mapping, found {}",
            yaml_kind(&other)
        ))),
    }
}

/// Locate the fenced header, returning `(header, remainder)`.
fn split_header(raw: &str) -> Option<(&str, &str)> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = text.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != FENCE {
        return None;
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == FENCE || trimmed == END_MARKER {
            return Some((&text[header_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_extract_simple_header() {
        let raw = "---\ntitle: Getting Started\n---\n# Hello\n";
        let (front_matter, body) = extract_front_matter(raw).unwrap();

        assert_eq!(front_matter.get("title"), Some(&json!("Getting Started")));
        assert_eq!(body, "# Hello\n");
    }

    #[test]
    fn test_extract_without_header_returns_input() {
        let raw = "# Hello\n\nNo front matter here.";
        let (front_matter, body) = extract_front_matter(raw).unwrap();

        assert!(front_matter.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_extract_empty_input() {
        let (front_matter, body) = extract_front_matter("").unwrap();

        assert!(front_matter.is_empty());
        assert_eq!(body, "");
    }

    #[test]
    fn test_extract_empty_header() {
        let (front_matter, body) = extract_front_matter("---\n---\nBody").unwrap();

        assert!(front_matter.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_extract_unclosed_fence_is_not_header() {
        let raw = "---\ntitle: Oops\n# Body";
        let (front_matter, body) = extract_front_matter(raw).unwrap();

        assert!(front_matter.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_extract_fence_must_open_document() {
        let raw = "Intro\n---\ntitle: Late\n---\n";
        let (front_matter, body) = extract_front_matter(raw).unwrap();

        assert!(front_matter.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_extract_crlf_line_endings() {
        let raw = "---\r\ntitle: Windows\r\n---\r\nBody\r\n";
        let (front_matter, body) = extract_front_matter(raw).unwrap();

        assert_eq!(front_matter.get("title"), Some(&json!("Windows")));
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_extract_with_bom() {
        let raw = "\u{feff}---\ntitle: Bom\n---\nBody";
        let (front_matter, body) = extract_front_matter(raw).unwrap();

        assert_eq!(front_matter.get("title"), Some(&json!("Bom")));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_extract_document_end_marker() {
        let (front_matter, body) = extract_front_matter("---\ntitle: Dots\n...\nBody").unwrap();

        assert_eq!(front_matter.get("title"), Some(&json!("Dots")));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_extract_structured_values() {
        let raw = "---\ntitle: API\norder: 3\ntags:\n  - core\n  - http\nextra:\n  draft: true\n---\n";
        let (front_matter, body) = extract_front_matter(raw).unwrap();

        assert_eq!(front_matter.get("order"), Some(&json!(3)));
        assert_eq!(front_matter.get("tags"), Some(&json!(["core", "http"])));
        assert_eq!(front_matter.get("extra"), Some(&json!({"draft": true})));
        assert_eq!(body, "");
    }

    #[test]
    fn test_extract_invalid_yaml_fails() {
        let result = extract_front_matter("---\ntitle: [unclosed\n---\nBody");
        assert!(matches!(result, Err(FrontMatterError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_sequence_root() {
        let err = parse_front_matter("- a\n- b").unwrap_err();
        assert!(err.to_string().contains("a sequence"));
    }

    #[test]
    fn test_parse_null_is_empty() {
        assert!(parse_front_matter("~").unwrap().is_empty());
        assert!(parse_front_matter("# only a comment").unwrap().is_empty());
    }
}
